use serde::{Deserialize, Deserializer, Serialize};

use super::constants::DEFAULT_GROUP_COLOR;

pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Older documents stored `Date.now()` ids as JSON numbers.
fn lenient_entry_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(id)) => id,
        Some(serde_json::Value::Number(id)) => id.to_string(),
        _ => String::new(),
    })
}

fn default_group_color() -> String {
    DEFAULT_GROUP_COLOR.to_string()
}

fn lenient_group_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_group_color))
}

/// A single shortcut tile. Identity is its position in the owning collection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkEntry {
    #[serde(rename = "link", default, deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(rename = "icon", default, deserialize_with = "null_as_default")]
    pub icon_url: String,
    #[serde(rename = "name", default, deserialize_with = "null_as_default")]
    pub label: String,
}

impl LinkEntry {
    pub fn new(destination: &str, icon_url: &str, label: &str) -> Self {
        Self {
            destination: destination.to_string(),
            icon_url: icon_url.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TabGroup {
    #[serde(default, deserialize_with = "lenient_entry_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        rename = "color",
        default = "default_group_color",
        deserialize_with = "lenient_group_color"
    )]
    pub color_hex: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<LinkEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BookmarkEntry {
    #[serde(default, deserialize_with = "lenient_entry_id")]
    pub id: String,
    #[serde(rename = "link", default, deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(rename = "icon", default, deserialize_with = "null_as_default")]
    pub icon_url: String,
    #[serde(rename = "name", default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// One folder section of a derived bookmark view.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FolderSection {
    pub folder: String,
    pub count: usize,
    pub entries: Vec<BookmarkEntry>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EmptyState {
    /// The collection itself is empty.
    NoBookmarks,
    /// A folder or query filter hides every entry.
    NoMatches,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkView {
    pub folders: Vec<String>,
    pub sections: Vec<FolderSection>,
    pub show_folder_headers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}
