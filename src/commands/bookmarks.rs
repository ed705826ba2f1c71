use super::*;

use std::collections::BTreeSet;

pub(super) fn folder_of(entry: &BookmarkEntry) -> &str {
    settings::normalize_folder(entry.folder.as_deref())
}

/// `"All"` followed by every distinct folder in ascending order.
pub fn folders(bookmarks: &[BookmarkEntry]) -> Vec<String> {
    let distinct: BTreeSet<&str> = bookmarks.iter().map(folder_of).collect();

    std::iter::once(ALL_FOLDERS.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

fn matches_query(entry: &BookmarkEntry, query: &str) -> bool {
    text_utils::contains_ignore_case(&entry.label, query)
        || text_utils::contains_ignore_case(&entry.destination, query)
        || text_utils::contains_ignore_case(folder_of(entry), query)
}

pub fn filter(bookmarks: &[BookmarkEntry], selected_folder: &str, query: &str) -> Vec<BookmarkEntry> {
    bookmarks
        .iter()
        .filter(|entry| selected_folder == ALL_FOLDERS || folder_of(entry) == selected_folder)
        .filter(|entry| query.is_empty() || matches_query(entry, query))
        .cloned()
        .collect()
}

/// Stable sort by folder, then label.
pub fn sort(mut entries: Vec<BookmarkEntry>) -> Vec<BookmarkEntry> {
    entries.sort_by(|left, right| {
        folder_of(left)
            .cmp(folder_of(right))
            .then_with(|| left.label.cmp(&right.label))
    });
    entries
}

/// Splits already sorted entries into folder sections in one pass.
///
/// Sections keep first-appearance order, which is alphabetical only because
/// the input went through [`sort`].
pub fn group(sorted: Vec<BookmarkEntry>) -> Vec<FolderSection> {
    let mut sections: Vec<FolderSection> = Vec::new();

    for entry in sorted {
        let folder = folder_of(&entry);
        match sections.iter_mut().find(|section| section.folder == folder) {
            Some(section) => section.entries.push(entry),
            None => sections.push(FolderSection {
                folder: folder.to_string(),
                count: 0,
                entries: vec![entry],
            }),
        }
    }

    for section in &mut sections {
        section.count = section.entries.len();
    }

    sections
}

pub fn derive_view(bookmarks: &[BookmarkEntry], selected_folder: &str, query: &str) -> BookmarkView {
    let sections = group(sort(filter(bookmarks, selected_folder, query)));
    let filtered = !query.is_empty() || selected_folder != ALL_FOLDERS;

    let empty_state = match (sections.is_empty(), filtered) {
        (false, _) => None,
        (true, true) => Some(EmptyState::NoMatches),
        (true, false) => Some(EmptyState::NoBookmarks),
    };

    BookmarkView {
        folders: folders(bookmarks),
        sections,
        show_folder_headers: selected_folder == ALL_FOLDERS,
        empty_state,
    }
}

/// Appends a form-built entry, giving it a fresh id when it has none.
pub fn add_bookmark(canonical: &[BookmarkEntry], mut entry: BookmarkEntry) -> Vec<BookmarkEntry> {
    if entry.id.trim().is_empty() {
        entry.id = groups::fresh_id(canonical.iter().map(|item| item.id.as_str()));
    }

    let mut next = canonical.to_vec();
    next.push(entry);
    next
}

/// Merges `patch` into the entry at `index`; out of range is a no-op.
pub fn edit_bookmark_at(canonical: &[BookmarkEntry], index: usize, patch: BookmarkPatch) -> Vec<BookmarkEntry> {
    let mut next = canonical.to_vec();
    if let Some(entry) = next.get_mut(index) {
        if let Some(destination) = patch.destination {
            entry.destination = destination;
        }
        if let Some(icon_url) = patch.icon_url {
            entry.icon_url = icon_url;
        }
        if let Some(label) = patch.label {
            entry.label = label;
        }
        if let Some(folder) = patch.folder {
            entry.folder = Some(folder);
        }
    }
    next
}

pub fn remove_bookmark_at(canonical: &[BookmarkEntry], index: usize) -> Vec<BookmarkEntry> {
    let mut next = canonical.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}
