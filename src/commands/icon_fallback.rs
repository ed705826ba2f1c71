use dashmap::DashMap;

use super::constants::BOOKMARK_FALLBACK_KEY_PREFIX;

/// Where an icon is rendered, used to key its load-failure flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPosition {
    Flat(usize),
    Grouped { group: usize, link: usize },
    Bookmark(usize),
}

impl EntryPosition {
    pub fn key(&self) -> String {
        match self {
            Self::Flat(index) => index.to_string(),
            Self::Grouped { group, link } => format!("{group}-{link}"),
            Self::Bookmark(index) => format!("{BOOKMARK_FALLBACK_KEY_PREFIX}-{index}"),
        }
    }
}

/// Icon load-failure flags set by the renderer.
///
/// A flagged entry shows the default icon instead of its own.
#[derive(Debug, Default)]
pub struct IconFallbacks {
    failed: DashMap<String, bool>,
}

impl IconFallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_failed(&self, position: EntryPosition) {
        self.failed.insert(position.key(), true);
    }

    pub fn uses_fallback(&self, position: EntryPosition) -> bool {
        self.failed
            .get(&position.key())
            .map(|flag| *flag)
            .unwrap_or(false)
    }

    /// Positions shift when links are rewritten, so their flags no longer apply.
    pub fn clear_links(&self) {
        let bookmark_prefix = format!("{BOOKMARK_FALLBACK_KEY_PREFIX}-");
        self.failed.retain(|key, _| key.starts_with(&bookmark_prefix));
    }

    pub fn clear_bookmarks(&self) {
        let bookmark_prefix = format!("{BOOKMARK_FALLBACK_KEY_PREFIX}-");
        self.failed.retain(|key, _| !key.starts_with(&bookmark_prefix));
    }

    pub fn len(&self) -> usize {
        self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }
}
