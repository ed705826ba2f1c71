use super::*;

/// Everything one dashboard works against: the store, the migration that ran
/// on it, the links currently shown and the bookmark lookup table.
///
/// Every mutation persists through the store before returning.
#[derive(Debug)]
pub struct DashboardSession {
    store: ConfigStore,
    migration: GroupMigration,
    links: LinkCollection,
    bookmark_index: BookmarkIndex,
}

impl DashboardSession {
    pub fn open(store: ConfigStore) -> Self {
        let links = LinkCollection::Flat(store.read().quick_links().to_vec());
        let bookmark_index = BookmarkIndex::build(&store.read().bookmarks);

        let mut session = Self {
            store,
            migration: GroupMigration::new(),
            links,
            bookmark_index,
        };
        session.ensure_groups();
        session
    }

    /// Runs the group migration, then seeds the default shortcuts into a
    /// document that never had any.
    pub fn ensure_groups(&mut self) {
        let held = self.links.groups();
        match self.migration.run(&mut self.store, held) {
            Some(groups) => self.links = LinkCollection::Grouped(groups),
            None => {
                if self.migration.state() == MigrationState::Skipped
                    && self.store.read().quick_links.is_none()
                {
                    let defaults = settings::default_quick_links();
                    tracing::info!(links = defaults.len(), "seeding default quick links");
                    if let Err(err) = self.apply_links(LinkCollection::Flat(defaults)) {
                        tracing::warn!("default quick links kept in memory only: {err}");
                    }
                }
            }
        }
    }

    pub fn document(&self) -> &ConfigDocument {
        self.store.read()
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn links(&self) -> &LinkCollection {
        &self.links
    }

    pub fn migration_state(&self) -> MigrationState {
        self.migration.state()
    }

    pub fn bookmarks(&self) -> &[BookmarkEntry] {
        &self.store.read().bookmarks
    }

    pub fn update(&mut self, patch: ConfigPatch) -> Result<(), ConfigError> {
        let rewrites_bookmarks = patch.bookmarks.is_some();
        let result = self.store.update(patch);

        self.links = LinkCollection::from_document(self.store.read());
        if rewrites_bookmarks {
            self.bookmark_index = BookmarkIndex::build(&self.store.read().bookmarks);
        }
        result
    }

    fn apply_links(&mut self, next: LinkCollection) -> Result<(), ConfigError> {
        let patch = next.to_patch();
        self.links = next;
        self.store.update(patch)
    }

    fn apply_groups(&mut self, change: impl FnOnce(&[TabGroup]) -> Vec<TabGroup>) -> Result<bool, ConfigError> {
        let Some(groups) = self.links.groups() else {
            tracing::debug!("tab group change ignored in flat mode");
            return Ok(false);
        };

        let next = LinkCollection::Grouped(change(groups));
        self.apply_links(next)?;
        Ok(true)
    }

    pub fn add_group(&mut self) -> Result<bool, ConfigError> {
        self.apply_groups(groups::add_group)
    }

    pub fn update_group(&mut self, index: usize, patch: GroupPatch) -> Result<bool, ConfigError> {
        self.apply_groups(|held| groups::update_group(held, index, patch))
    }

    pub fn delete_group(&mut self, index: usize) -> Result<bool, ConfigError> {
        self.apply_groups(|held| groups::delete_group(held, index))
    }

    pub fn add_link(&mut self, group: Option<usize>, link: LinkEntry) -> Result<(), ConfigError> {
        let next = self.links.with_link_added(group, link);
        self.apply_links(next)
    }

    pub fn remove_link(&mut self, group: Option<usize>, link_index: usize) -> Result<(), ConfigError> {
        let next = self.links.with_link_removed(group, link_index);
        self.apply_links(next)
    }

    fn apply_bookmarks(&mut self, next: Vec<BookmarkEntry>) -> Result<(), ConfigError> {
        self.update(ConfigPatch::bookmarks(next))
    }

    /// Canonical position of a bookmark picked from a derived view.
    pub fn bookmark_position(&mut self, target: &BookmarkEntry) -> Option<usize> {
        let canonical = &self.store.read().bookmarks;
        self.bookmark_index.resolve(canonical, target)
    }

    pub fn add_bookmark(&mut self, entry: BookmarkEntry) -> Result<(), ConfigError> {
        let next = bookmarks::add_bookmark(self.bookmarks(), entry);
        self.apply_bookmarks(next)
    }

    pub fn edit_bookmark(&mut self, target: &BookmarkEntry, patch: BookmarkPatch) -> Result<bool, ConfigError> {
        let Some(index) = self.bookmark_position(target) else {
            tracing::debug!(id = %target.id, "edit target not found, ignoring");
            return Ok(false);
        };

        let next = bookmarks::edit_bookmark_at(self.bookmarks(), index, patch);
        self.apply_bookmarks(next)?;
        Ok(true)
    }

    pub fn remove_bookmark(&mut self, target: &BookmarkEntry) -> Result<bool, ConfigError> {
        let Some(index) = self.bookmark_position(target) else {
            tracing::debug!(id = %target.id, "remove target not found, ignoring");
            return Ok(false);
        };

        let next = bookmarks::remove_bookmark_at(self.bookmarks(), index);
        self.apply_bookmarks(next)?;
        Ok(true)
    }

    pub fn bookmark_view(&self, selected_folder: &str, query: &str) -> BookmarkView {
        bookmarks::derive_view(self.bookmarks(), selected_folder, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn open_with(dir: &tempfile::TempDir, document: serde_json::Value) -> DashboardSession {
        let path = options_file_path(dir.path());
        fs::write(&path, document.to_string()).unwrap();
        DashboardSession::open(ConfigStore::open(path))
    }

    fn bookmark(id: &str, label: &str, folder: Option<&str>) -> serde_json::Value {
        match folder {
            Some(folder) => json!({ "id": id, "link": "", "icon": "", "name": label, "folder": folder }),
            None => json!({ "id": id, "link": "", "icon": "", "name": label }),
        }
    }

    #[test]
    fn open_should_seed_default_links_into_a_new_document() {
        let dir = tempfile::tempdir().unwrap();
        let session = DashboardSession::open(ConfigStore::open_in(dir.path()));

        assert_eq!(session.migration_state(), MigrationState::Skipped);
        assert_eq!(session.links(), &LinkCollection::Flat(settings::default_quick_links()));

        let reopened = ConfigStore::open(session.store().path());
        assert_eq!(reopened.read().quick_links().len(), DEFAULT_QUICK_LINKS.len());
        assert!(!reopened.read().is_grouped());
    }

    #[test]
    fn second_launch_should_migrate_seeded_links_into_default_group() {
        let dir = tempfile::tempdir().unwrap();
        drop(DashboardSession::open(ConfigStore::open_in(dir.path())));

        let session = DashboardSession::open(ConfigStore::open_in(dir.path()));

        assert_eq!(session.migration_state(), MigrationState::Synthesized);
        let groups = session.links().groups().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, DEFAULT_GROUP_ID);
        assert_eq!(groups[0].links, settings::default_quick_links());
    }

    #[test]
    fn open_should_keep_settings_on_disk_when_one_bookmark_is_bad() {
        let dir = tempfile::tempdir().unwrap();
        let session = open_with(
            &dir,
            json!({
                "theme": "dark",
                "tabGroups": [{ "id": "w", "name": "Work", "color": "#000000", "links": [] }],
                "bookmarks": [
                    { "id": "1", "link": "https://a.com", "icon": "", "name": "A", "folder": 5 },
                    bookmark("2", "B", Some("Work"))
                ]
            }),
        );

        assert_eq!(session.migration_state(), MigrationState::Adopted);
        assert_eq!(session.bookmarks().len(), 1);

        let raw = fs::read_to_string(session.store().path()).unwrap();
        let on_disk: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk["theme"], "dark");
        assert_eq!(on_disk["tabGroups"][0]["id"], "w");
        assert_eq!(on_disk["bookmarks"][1]["id"], "2");
        assert!(on_disk.get("quickLinks").is_none());
    }

    #[test]
    fn open_should_not_seed_over_an_explicitly_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let session = open_with(&dir, json!({ "quickLinks": [] }));

        assert_eq!(session.links(), &LinkCollection::Flat(Vec::new()));
    }

    #[test]
    fn group_changes_should_be_ignored_in_flat_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_with(&dir, json!({ "quickLinks": [] }));

        assert!(!session.add_group().unwrap());
        assert!(!session.delete_group(0).unwrap());
        assert!(!session.document().is_grouped());
    }

    #[test]
    fn group_changes_should_persist_in_grouped_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_with(&dir, json!({ "tabGroups": [] }));

        assert!(session.add_group().unwrap());
        assert!(session.add_group().unwrap());
        assert!(session
            .update_group(1, GroupPatch { name: Some("Work".to_string()), ..GroupPatch::default() })
            .unwrap());
        session
            .add_link(Some(1), LinkEntry::new("https://a.com", "", "A"))
            .unwrap();
        assert!(session.delete_group(0).unwrap());

        let reopened = ConfigStore::open(session.store().path());
        let groups = reopened.read().tab_groups.clone().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Work");
        assert_eq!(groups[0].links.len(), 1);
        assert_eq!(session.links().groups().unwrap(), groups.as_slice());
    }

    #[test]
    fn flat_links_should_persist_to_quick_links() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_with(&dir, json!({ "quickLinks": [] }));

        session
            .add_link(None, LinkEntry::new("https://a.com", "", "A"))
            .unwrap();
        session
            .add_link(None, LinkEntry::new("https://b.com", "", "B"))
            .unwrap();
        session.remove_link(None, 0).unwrap();

        let labels: Vec<&str> = session
            .document()
            .quick_links()
            .iter()
            .map(|link| link.label.as_str())
            .collect();
        assert_eq!(labels, vec!["B"]);
    }

    #[test]
    fn remove_bookmark_should_target_the_id_from_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_with(
            &dir,
            json!({
                "tabGroups": [],
                "bookmarks": [
                    bookmark("1", "Zeta", Some("Work")),
                    bookmark("2", "Apple", Some("Work")),
                    bookmark("3", "Tool", None)
                ]
            }),
        );

        let view = session.bookmark_view("All", "");
        let apple = view.sections[1].entries[0].clone();
        assert_eq!(session.bookmark_position(&apple), Some(1));

        let reversed: Vec<BookmarkEntry> = session.bookmarks().iter().rev().cloned().collect();
        session.update(ConfigPatch::bookmarks(reversed)).unwrap();

        assert!(session.remove_bookmark(&apple).unwrap());
        let remaining: Vec<&str> = session.bookmarks().iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(remaining, vec!["3", "1"]);

        assert!(!session.remove_bookmark(&apple).unwrap());
        assert_eq!(session.bookmarks().len(), 2);
    }

    #[test]
    fn edit_and_add_bookmark_should_persist() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_with(&dir, json!({ "bookmarks": [bookmark("1", "Zeta", None)] }));

        session
            .add_bookmark(BookmarkEntry {
                label: "New".to_string(),
                folder: Some("Work".to_string()),
                ..BookmarkEntry::default()
            })
            .unwrap();
        let target = session.bookmarks()[0].clone();
        assert!(session
            .edit_bookmark(&target, BookmarkPatch { label: Some("Zed".to_string()), ..BookmarkPatch::default() })
            .unwrap());

        let reopened = ConfigStore::open(session.store().path());
        let stored = &reopened.read().bookmarks;
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].label, "Zed");
        assert!(!stored[1].id.is_empty());
        assert_eq!(session.bookmark_view("Work", "").sections[0].entries[0].label, "New");
    }

    #[test]
    fn update_should_keep_unrelated_document_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = open_with(&dir, json!({ "theme": "dark", "quickLinks": [] }));

        session
            .update(ConfigPatch::default().with_field("type", json!("light")))
            .unwrap();

        assert_eq!(session.document().extra["theme"], "dark");
        assert_eq!(session.document().extra["type"], "light");
    }
}
