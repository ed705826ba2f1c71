use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::commands::{ConfigError, ConfigStore, DashboardSession, IconFallbacks};

pub struct AppState {
    session: Mutex<DashboardSession>,
    pub icon_fallbacks: IconFallbacks,
}

impl AppState {
    pub fn new(store: ConfigStore) -> Self {
        Self {
            session: Mutex::new(DashboardSession::open(store)),
            icon_fallbacks: IconFallbacks::new(),
        }
    }

    pub fn open_in(dir: &Path) -> Self {
        Self::new(ConfigStore::open_in(dir))
    }

    pub fn open_default() -> Result<Self, ConfigError> {
        let dir = crate::commands::config_dir()?;
        Ok(Self::open_in(&dir))
    }

    /// Every command holds this guard for its whole duration, which orders an
    /// update before the next read.
    pub fn session(&self) -> MutexGuard<'_, DashboardSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
