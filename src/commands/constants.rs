pub(super) const STORAGE_KEY: &str = "options";
pub(super) const CONFIG_DIR_NAME: &str = "tabdeck";
pub(super) const CONFIG_DIR_ENV: &str = "TABDECK_CONFIG_DIR";
pub(super) const DEFAULT_GROUP_ID: &str = "default";
pub(super) const DEFAULT_GROUP_NAME: &str = "Default";
pub(super) const DEFAULT_GROUP_COLOR: &str = "#6b8cff";
pub(super) const NEW_GROUP_NAME_PREFIX: &str = "Group";
pub(super) const ALL_FOLDERS: &str = "All";
pub(super) const UNCATEGORIZED_FOLDER: &str = "Uncategorized";
pub(super) const BOOKMARK_FALLBACK_KEY_PREFIX: &str = "bookmark";
pub(super) const DEFAULT_QUICK_LINKS: &[(&str, &str, &str)] = &[
    ("https://google.com", "https://google.com/favicon.ico", "Google"),
    ("https://facebook.com", "https://facebook.com/favicon.ico", "Facebook"),
    ("https://quora.com", "https://quora.com/favicon.ico", "Quora"),
    ("https://github.com", "https://github.com/favicon.ico", "GitHub"),
];
