use super::*;

#[derive(serde::Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MigrationState {
    Unchecked,
    /// The document already carried `tabGroups`.
    Adopted,
    /// Legacy quick links were folded into the default group.
    Synthesized,
    /// Nothing to migrate; the document stays flat.
    Skipped,
}

/// One-shot upgrade of a flat quick-link document to tab groups.
#[derive(Debug)]
pub struct GroupMigration {
    state: MigrationState,
}

impl Default for GroupMigration {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupMigration {
    pub fn new() -> Self {
        Self {
            state: MigrationState::Unchecked,
        }
    }

    pub fn state(&self) -> MigrationState {
        self.state
    }

    /// Returns the groups the caller should hold afterwards, `None` for flat mode.
    ///
    /// Does nothing when the caller already holds groups or when the check has
    /// already run in this process.
    pub fn run(&mut self, store: &mut ConfigStore, held: Option<&[TabGroup]>) -> Option<Vec<TabGroup>> {
        if let Some(groups) = held {
            return Some(groups.to_vec());
        }

        if self.state != MigrationState::Unchecked {
            return store.read().tab_groups.clone();
        }

        let document = store.read();

        if let Some(groups) = document.tab_groups.clone() {
            self.state = MigrationState::Adopted;
            tracing::debug!(groups = groups.len(), "adopted persisted tab groups");
            return Some(groups);
        }

        let quick_links = document.quick_links();
        if quick_links.is_empty() {
            self.state = MigrationState::Skipped;
            tracing::debug!("no quick links to migrate, staying flat");
            return None;
        }

        let groups = vec![default_group(quick_links.to_vec())];
        self.state = MigrationState::Synthesized;
        tracing::info!(links = quick_links.len(), "migrated quick links into the default tab group");

        if let Err(err) = store.update(ConfigPatch::tab_groups(groups.clone())) {
            tracing::warn!("default tab group kept in memory only: {err}");
        }

        Some(groups)
    }
}

fn default_group(links: Vec<LinkEntry>) -> TabGroup {
    TabGroup {
        id: DEFAULT_GROUP_ID.to_string(),
        name: DEFAULT_GROUP_NAME.to_string(),
        color_hex: DEFAULT_GROUP_COLOR.to_string(),
        links,
    }
}
