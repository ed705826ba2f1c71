use crate::state::AppState;
use uuid::Uuid;

mod bookmark_commands;
mod bookmarks;
mod config;
mod constants;
mod groups;
mod icon_fallback;
mod index_map;
mod link_commands;
mod migration;
mod session;
mod settings;
mod text_utils;
mod types;

use constants::*;

pub use bookmark_commands::*;
pub use config::{config_dir, options_file_path, ConfigError, ConfigStore};
pub use groups::LinkCollection;
pub use icon_fallback::{EntryPosition, IconFallbacks};
pub use index_map::{canonical_index, BookmarkIndex, IndexLookup};
pub use link_commands::*;
pub use migration::{GroupMigration, MigrationState};
pub use session::DashboardSession;
pub use settings::{BookmarkPatch, ConfigDocument, ConfigPatch, GroupPatch};
pub use types::{BookmarkEntry, BookmarkView, EmptyState, FolderSection, LinkEntry, TabGroup};

