use super::*;

use std::collections::HashMap;

/// Position of the first canonical entry whose id equals `target.id`.
///
/// Colliding ids all resolve to the first match.
pub fn canonical_index(canonical: &[BookmarkEntry], target: &BookmarkEntry) -> Option<usize> {
    canonical.iter().position(|entry| entry.id == target.id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexLookup {
    Found(usize),
    NotFound,
    /// The table was built from a different collection; rebuild it.
    Stale,
}

/// `id -> index` table over a canonical bookmark collection.
///
/// The table remembers the id sequence it was built from. A lookup against
/// any other sequence reports [`IndexLookup::Stale`] instead of a position,
/// so a hit is always the first match and a miss is a real miss.
#[derive(Debug, Default, Clone)]
pub struct BookmarkIndex {
    positions: HashMap<String, usize>,
    built_from: Vec<String>,
}

impl BookmarkIndex {
    pub fn build(canonical: &[BookmarkEntry]) -> Self {
        let mut positions = HashMap::with_capacity(canonical.len());
        for (index, entry) in canonical.iter().enumerate() {
            positions.entry(entry.id.clone()).or_insert(index);
        }

        Self {
            positions,
            built_from: canonical.iter().map(|entry| entry.id.clone()).collect(),
        }
    }

    fn is_built_from(&self, canonical: &[BookmarkEntry]) -> bool {
        canonical.len() == self.built_from.len()
            && canonical
                .iter()
                .zip(&self.built_from)
                .all(|(entry, id)| entry.id == *id)
    }

    pub fn lookup(&self, canonical: &[BookmarkEntry], target: &BookmarkEntry) -> IndexLookup {
        if !self.is_built_from(canonical) {
            return IndexLookup::Stale;
        }

        match self.positions.get(&target.id) {
            Some(&index) => IndexLookup::Found(index),
            None => IndexLookup::NotFound,
        }
    }

    /// Resolves `target`, rebuilding the table first when it is stale.
    pub fn resolve(&mut self, canonical: &[BookmarkEntry], target: &BookmarkEntry) -> Option<usize> {
        match self.lookup(canonical, target) {
            IndexLookup::Found(index) => Some(index),
            IndexLookup::NotFound => None,
            IndexLookup::Stale => {
                *self = Self::build(canonical);
                match self.lookup(canonical, target) {
                    IndexLookup::Found(index) => Some(index),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: &str, label: &str) -> BookmarkEntry {
        BookmarkEntry {
            id: id.to_string(),
            label: label.to_string(),
            ..BookmarkEntry::default()
        }
    }

    #[test]
    fn canonical_index_should_return_first_match_by_id() {
        let canonical = vec![bookmark("a", "A"), bookmark("b", "B"), bookmark("b", "B2")];

        assert_eq!(canonical_index(&canonical, &bookmark("b", "anything")), Some(1));
        assert_eq!(canonical_index(&canonical, &canonical[2]), Some(1));
        assert_eq!(canonical_index(&canonical, &bookmark("z", "Z")), None);
    }

    #[test]
    fn index_should_resolve_like_linear_scan() {
        let canonical = vec![bookmark("a", "A"), bookmark("b", "B"), bookmark("a", "A2")];
        let index = BookmarkIndex::build(&canonical);

        for entry in &canonical {
            assert_eq!(
                index.lookup(&canonical, entry),
                IndexLookup::Found(canonical_index(&canonical, entry).unwrap())
            );
        }
        assert_eq!(index.lookup(&canonical, &bookmark("z", "Z")), IndexLookup::NotFound);
    }

    #[test]
    fn index_should_report_stale_after_reorder_or_resize() {
        let canonical = vec![bookmark("a", "A"), bookmark("b", "B")];
        let index = BookmarkIndex::build(&canonical);

        let mut reordered = canonical.clone();
        reordered.reverse();
        assert_eq!(index.lookup(&reordered, &bookmark("a", "A")), IndexLookup::Stale);

        let mut grown = canonical.clone();
        grown.push(bookmark("c", "C"));
        assert_eq!(index.lookup(&grown, &bookmark("a", "A")), IndexLookup::Stale);
    }

    #[test]
    fn index_should_report_stale_after_same_length_replacement() {
        let index = BookmarkIndex::build(&[bookmark("a", "A"), bookmark("b", "B")]);
        let replaced = vec![bookmark("a", "A"), bookmark("c", "C")];

        assert_eq!(index.lookup(&replaced, &bookmark("c", "C")), IndexLookup::Stale);

        let mut index = index;
        assert_eq!(index.resolve(&replaced, &bookmark("c", "C")), Some(1));
        assert_eq!(index.resolve(&replaced, &bookmark("b", "B")), None);
    }

    #[test]
    fn index_should_resolve_first_match_after_ids_collide() {
        let mut index = BookmarkIndex::build(&[bookmark("a", "A"), bookmark("b", "B")]);
        let collided = vec![bookmark("b", "B"), bookmark("b", "B2")];

        assert_eq!(index.lookup(&collided, &bookmark("b", "B")), IndexLookup::Stale);
        assert_eq!(
            index.resolve(&collided, &bookmark("b", "B")),
            canonical_index(&collided, &bookmark("b", "B"))
        );
        assert_eq!(index.resolve(&collided, &bookmark("b", "B")), Some(0));
    }

    #[test]
    fn resolve_should_rebuild_stale_table() {
        let canonical = vec![bookmark("a", "A"), bookmark("b", "B")];
        let mut index = BookmarkIndex::build(&canonical);

        let mut reordered = canonical.clone();
        reordered.reverse();

        assert_eq!(index.resolve(&reordered, &bookmark("a", "A")), Some(1));
        assert_eq!(index.lookup(&reordered, &bookmark("a", "A")), IndexLookup::Found(1));
        assert_eq!(index.resolve(&reordered, &bookmark("z", "Z")), None);
    }
}
