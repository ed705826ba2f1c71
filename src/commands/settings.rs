use super::*;

use serde_json::{Map, Value};

pub(super) fn default_quick_links() -> Vec<LinkEntry> {
    DEFAULT_QUICK_LINKS
        .iter()
        .map(|(link, icon, name)| LinkEntry::new(link, icon, name))
        .collect()
}

/// The persisted options document.
///
/// `tab_groups` decides the link mode: absent means flat, present (even empty)
/// means grouped. Keys this crate does not own are carried in `extra` and
/// written back untouched.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_links: Option<Vec<LinkEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_groups: Option<Vec<TabGroup>>,
    #[serde(default, deserialize_with = "super::types::null_as_default")]
    pub bookmarks: Vec<BookmarkEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigDocument {
    pub fn quick_links(&self) -> &[LinkEntry] {
        self.quick_links.as_deref().unwrap_or_default()
    }

    pub fn is_grouped(&self) -> bool {
        self.tab_groups.is_some()
    }
}

/// A shallow update: every `Some` field, and every key in `extra`, replaces
/// the matching key of the document.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_links: Option<Vec<LinkEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_groups: Option<Vec<TabGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<Vec<BookmarkEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigPatch {
    pub fn quick_links(links: Vec<LinkEntry>) -> Self {
        Self {
            quick_links: Some(links),
            ..Self::default()
        }
    }

    pub fn tab_groups(groups: Vec<TabGroup>) -> Self {
        Self {
            tab_groups: Some(groups),
            ..Self::default()
        }
    }

    pub fn bookmarks(bookmarks: Vec<BookmarkEntry>) -> Self {
        Self {
            bookmarks: Some(bookmarks),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.quick_links.is_none()
            && self.tab_groups.is_none()
            && self.bookmarks.is_none()
            && self.extra.is_empty()
    }
}

#[derive(serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupPatch {
    pub name: Option<String>,
    #[serde(rename = "color")]
    pub color_hex: Option<String>,
    pub links: Option<Vec<LinkEntry>>,
}

/// Fields submitted by the bookmark edit form.
#[derive(serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    #[serde(rename = "link")]
    pub destination: Option<String>,
    #[serde(rename = "icon")]
    pub icon_url: Option<String>,
    #[serde(rename = "name")]
    pub label: Option<String>,
    pub folder: Option<String>,
}

pub(super) fn normalize_folder(folder: Option<&str>) -> &str {
    match folder {
        Some(value) if !value.is_empty() => value,
        _ => UNCATEGORIZED_FOLDER,
    }
}
