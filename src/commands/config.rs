use super::*;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const OWNED_KEYS: &[&str] = &["quickLinks", "tabGroups", "bookmarks"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot locate a config directory, set TABDECK_CONFIG_DIR")]
    NoConfigDir,
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize options document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write options document {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    dirs::config_dir()
        .map(|base| base.join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

pub fn options_file_path(dir: &Path) -> PathBuf {
    dir.join(format!("{STORAGE_KEY}.json"))
}

/// Owner of the persisted options document.
///
/// The document is read from disk once, in [`ConfigStore::open`]. After that
/// every read is served from memory and every [`ConfigStore::update`] rewrites
/// the whole file.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    document: ConfigDocument,
}

impl ConfigStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let document = load_document(&path);
        Self { path, document }
    }

    pub fn open_in(dir: &Path) -> Self {
        Self::open(options_file_path(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> &ConfigDocument {
        &self.document
    }

    /// Merges `patch` into the cached document and writes the result back.
    ///
    /// The cache keeps the merged document even when the write fails, so the
    /// next `read` still observes this update.
    pub fn update(&mut self, patch: ConfigPatch) -> Result<(), ConfigError> {
        merge_patch(&mut self.document, patch);

        write_document(&self.path, &self.document).inspect_err(|err| {
            tracing::warn!(path = %self.path.display(), "options write failed: {err}");
        })
    }
}

fn load_document(path: &Path) -> ConfigDocument {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no options document, starting empty");
        return ConfigDocument::default();
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), "options document unreadable, starting empty: {err}");
            return ConfigDocument::default();
        }
    };

    if raw.trim().is_empty() {
        return ConfigDocument::default();
    }

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => document_from_map(map),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "options document is not an object, starting empty");
            ConfigDocument::default()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "options document malformed, starting empty: {err}");
            ConfigDocument::default()
        }
    }
}

/// Owned keys are read one entry at a time so a single bad entry never
/// costs the rest of the document.
fn document_from_map(mut map: Map<String, Value>) -> ConfigDocument {
    let quick_links = owned_entries(&mut map, "quickLinks");
    let tab_groups = owned_entries(&mut map, "tabGroups");
    let bookmarks = owned_entries(&mut map, "bookmarks").unwrap_or_default();

    ConfigDocument {
        quick_links,
        tab_groups,
        bookmarks,
        extra: map,
    }
}

fn owned_entries<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<Vec<T>> {
    match map.remove(key)? {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| match serde_json::from_value(item) {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        tracing::warn!(key, index, "skipping malformed entry: {err}");
                        None
                    }
                })
                .collect(),
        ),
        _ => {
            tracing::warn!(key, "expected an array, treating it as absent");
            None
        }
    }
}

fn write_document(path: &Path, document: &ConfigDocument) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(document)?;
    fs::write(path, format!("{}\n", content)).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn merge_patch(document: &mut ConfigDocument, patch: ConfigPatch) {
    if let Some(quick_links) = patch.quick_links {
        document.quick_links = Some(quick_links);
    }

    if let Some(tab_groups) = patch.tab_groups {
        document.tab_groups = Some(tab_groups);
    }

    if let Some(bookmarks) = patch.bookmarks {
        document.bookmarks = bookmarks;
    }

    for (key, value) in patch.extra {
        if OWNED_KEYS.contains(&key.as_str()) {
            tracing::warn!(key = %key, "untyped patch for an owned key ignored");
            continue;
        }
        document.extra.insert(key, value);
    }
}
