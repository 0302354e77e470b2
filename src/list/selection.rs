//! Row Selection

use std::collections::BTreeSet;

/// Ids of checked rows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet(BTreeSet<u32>);

impl SelectionSet {
    /// Flip membership of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &BTreeSet<u32> {
        &self.0
    }
}

impl From<BTreeSet<u32>> for SelectionSet {
    fn from(ids: BTreeSet<u32>) -> Self {
        Self(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_unselects() {
        let mut selection = SelectionSet::default();
        assert!(selection.toggle(42));
        assert!(selection.contains(42));
        assert!(!selection.toggle(42));
        assert!(!selection.contains(42));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_leaves_other_ids() {
        let mut selection = SelectionSet::from(BTreeSet::from([1, 2, 3]));
        selection.toggle(2);
        assert_eq!(selection.ids(), &BTreeSet::from([1, 3]));
        assert_eq!(selection.len(), 2);
    }
}
