use super::*;

use std::collections::HashSet;

/// A uuid v4 that no currently held id already uses.
pub(super) fn fresh_id<'a>(taken: impl IntoIterator<Item = &'a str>) -> String {
    let taken: HashSet<&str> = taken.into_iter().collect();
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
    }
}

pub fn add_group(groups: &[TabGroup]) -> Vec<TabGroup> {
    let mut next = groups.to_vec();
    next.push(TabGroup {
        id: fresh_id(groups.iter().map(|group| group.id.as_str())),
        name: format!("{} {}", NEW_GROUP_NAME_PREFIX, groups.len() + 1),
        color_hex: DEFAULT_GROUP_COLOR.to_string(),
        links: Vec::new(),
    });
    next
}

pub fn update_group(groups: &[TabGroup], index: usize, patch: GroupPatch) -> Vec<TabGroup> {
    let mut next = groups.to_vec();
    if let Some(group) = next.get_mut(index) {
        if let Some(name) = patch.name {
            group.name = name;
        }
        if let Some(color_hex) = patch.color_hex {
            group.color_hex = color_hex;
        }
        if let Some(links) = patch.links {
            group.links = links;
        }
    }
    next
}

pub fn delete_group(groups: &[TabGroup], index: usize) -> Vec<TabGroup> {
    let mut next = groups.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

pub fn add_link_to_group(groups: &[TabGroup], group_index: usize, link: LinkEntry) -> Vec<TabGroup> {
    let mut next = groups.to_vec();
    if let Some(group) = next.get_mut(group_index) {
        group.links.push(link);
    }
    next
}

pub fn remove_link_from_group(groups: &[TabGroup], group_index: usize, link_index: usize) -> Vec<TabGroup> {
    let mut next = groups.to_vec();
    if let Some(group) = next.get_mut(group_index) {
        if link_index < group.links.len() {
            group.links.remove(link_index);
        }
    }
    next
}

pub fn add_link(links: &[LinkEntry], link: LinkEntry) -> Vec<LinkEntry> {
    let mut next = links.to_vec();
    next.push(link);
    next
}

pub fn remove_link(links: &[LinkEntry], index: usize) -> Vec<LinkEntry> {
    let mut next = links.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// Shortcut links in whichever mode the document is in.
///
/// Link mutations go through one interface; `group` is ignored in flat mode
/// and required in grouped mode.
#[derive(serde::Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "mode", content = "items", rename_all = "camelCase")]
pub enum LinkCollection {
    Flat(Vec<LinkEntry>),
    Grouped(Vec<TabGroup>),
}

impl LinkCollection {
    pub fn from_document(document: &ConfigDocument) -> Self {
        match &document.tab_groups {
            Some(groups) => Self::Grouped(groups.clone()),
            None => Self::Flat(document.quick_links().to_vec()),
        }
    }

    pub fn groups(&self) -> Option<&[TabGroup]> {
        match self {
            Self::Flat(_) => None,
            Self::Grouped(groups) => Some(groups),
        }
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    pub fn with_link_added(&self, group: Option<usize>, link: LinkEntry) -> Self {
        match (self, group) {
            (Self::Flat(links), _) => Self::Flat(add_link(links, link)),
            (Self::Grouped(groups), Some(index)) => Self::Grouped(add_link_to_group(groups, index, link)),
            (Self::Grouped(_), None) => self.clone(),
        }
    }

    pub fn with_link_removed(&self, group: Option<usize>, link_index: usize) -> Self {
        match (self, group) {
            (Self::Flat(links), _) => Self::Flat(remove_link(links, link_index)),
            (Self::Grouped(groups), Some(index)) => {
                Self::Grouped(remove_link_from_group(groups, index, link_index))
            }
            (Self::Grouped(_), None) => self.clone(),
        }
    }

    /// The patch that persists this collection into the field its mode owns.
    pub fn to_patch(&self) -> ConfigPatch {
        match self {
            Self::Flat(links) => ConfigPatch::quick_links(links.clone()),
            Self::Grouped(groups) => ConfigPatch::tab_groups(groups.clone()),
        }
    }
}
