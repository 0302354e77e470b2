//! Loaded Page State
//!
//! The prefix of the server's ordered result set currently held in memory,
//! and the optimistic reorder bookkeeping on top of it.

use crate::models::{ListItem, ListPage, SortOrder};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub total_records: usize,
    pub records: Vec<ListItem>,
    /// Bumped on every wholesale replacement
    generation: u64,
}

/// Enough information to undo one optimistic move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReorderUndo {
    generation: u64,
    from: usize,
    to: usize,
    id: u32,
}

impl ReorderUndo {
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Server-side position for a drop at visual `index`.
///
/// Descending lists are shown back to front, so the index is mirrored
/// against the total record count.
pub fn server_target_index(sort_order: SortOrder, total_records: usize, index: usize) -> usize {
    match sort_order {
        SortOrder::Asc => index,
        SortOrder::Desc => total_records.saturating_sub(index + 1),
    }
}

impl PageState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace everything with a fresh first page
    pub fn replace(&mut self, page: ListPage) {
        self.total_records = page.total_records;
        self.records = page.records;
        self.generation += 1;
    }

    /// Append the next page
    pub fn append(&mut self, page: ListPage) {
        self.total_records = page.total_records;
        self.records.extend(page.records);
    }

    /// Offset of the next page to request
    pub fn next_start(&self) -> usize {
        self.records.len()
    }

    pub fn has_more(&self) -> bool {
        self.records.len() < self.total_records
    }

    /// Move the record at `from` so it ends up at `to`.
    ///
    /// Returns `None` when either index is out of range or they are equal.
    pub fn move_record(&mut self, from: usize, to: usize) -> Option<ReorderUndo> {
        let len = self.records.len();
        if from == to || from >= len || to >= len {
            return None;
        }
        let moved = self.records.remove(from);
        let id = moved.id;
        self.records.insert(to, moved);
        Some(ReorderUndo { generation: self.generation, from, to, id })
    }

    /// Apply a drop of row `source_id`, seen at `source_index`, onto `target_index`.
    ///
    /// The server position is computed against the page as it was before the
    /// move. Returns `None` if the source row shifted since the drag started,
    /// for drops onto itself, and for out-of-range indices.
    pub fn plan_drop(
        &mut self,
        sort_order: SortOrder,
        source_index: usize,
        source_id: u32,
        target_index: usize,
    ) -> Option<(ReorderUndo, usize)> {
        if self.records.get(source_index).map(|i| i.id) != Some(source_id) {
            return None;
        }
        let target_order = server_target_index(sort_order, self.total_records, target_index);
        let undo = self.move_record(source_index, target_index)?;
        Some((undo, target_order))
    }

    /// Undo a move, unless the page was replaced or the row moved again since
    pub fn undo_move(&mut self, undo: ReorderUndo) -> bool {
        if undo.generation != self.generation {
            return false;
        }
        match self.records.get(undo.to) {
            Some(item) if item.id == undo.id => {
                let moved = self.records.remove(undo.to);
                self.records.insert(undo.from, moved);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32) -> ListItem {
        ListItem { id, name: format!("Item {}", id), order: id as i32 }
    }

    fn make_page(ids: &[u32], total: usize) -> ListPage {
        ListPage { records: ids.iter().copied().map(make_item).collect(), total_records: total }
    }

    fn ids(state: &PageState) -> Vec<u32> {
        state.records.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_server_target_index() {
        assert_eq!(server_target_index(SortOrder::Desc, 100, 10), 89);
        assert_eq!(server_target_index(SortOrder::Asc, 100, 10), 10);
        assert_eq!(server_target_index(SortOrder::Desc, 100, 0), 99);
        assert_eq!(server_target_index(SortOrder::Desc, 100, 99), 0);
        assert_eq!(server_target_index(SortOrder::Desc, 3, 7), 0);
    }

    #[test]
    fn test_replace_and_append() {
        let mut state = PageState::default();
        state.replace(make_page(&[1, 2], 5));
        assert_eq!(state.generation(), 1);
        assert!(state.has_more());
        assert_eq!(state.next_start(), 2);

        state.append(make_page(&[3, 4, 5], 5));
        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);
        assert!(!state.has_more());
        // Appending keeps the generation
        assert_eq!(state.generation(), 1);

        state.replace(make_page(&[9], 1));
        assert_eq!(ids(&state), vec![9]);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_move_record_down_and_up() {
        let mut state = PageState::default();
        state.replace(make_page(&[1, 2, 3, 4], 4));

        state.move_record(0, 2).unwrap();
        assert_eq!(ids(&state), vec![2, 3, 1, 4]);

        state.move_record(3, 0).unwrap();
        assert_eq!(ids(&state), vec![4, 2, 3, 1]);

        let mut sorted = ids(&state);
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_move_record_rejects_noop_and_out_of_range() {
        let mut state = PageState::default();
        state.replace(make_page(&[1, 2], 2));
        assert!(state.move_record(1, 1).is_none());
        assert!(state.move_record(0, 2).is_none());
        assert!(state.move_record(5, 0).is_none());
        assert_eq!(ids(&state), vec![1, 2]);
    }

    #[test]
    fn test_plan_drop_remaps_descending() {
        let mut state = PageState::default();
        state.replace(make_page(&(1..=20).collect::<Vec<_>>(), 100));

        let (undo, target_order) = state.plan_drop(SortOrder::Desc, 0, 1, 10).unwrap();
        assert_eq!(target_order, 89);
        assert_eq!(undo.id(), 1);
        assert_eq!(state.records[10].id, 1);
    }

    #[test]
    fn test_plan_drop_keeps_ascending_index() {
        let mut state = PageState::default();
        state.replace(make_page(&(1..=20).collect::<Vec<_>>(), 100));

        let (_, target_order) = state.plan_drop(SortOrder::Asc, 12, 13, 10).unwrap();
        assert_eq!(target_order, 10);
        assert_eq!(state.records[10].id, 13);
    }

    #[test]
    fn test_plan_drop_rejects_stale_self_and_out_of_range() {
        let mut state = PageState::default();
        state.replace(make_page(&[1, 2, 3], 3));

        // Row at index 0 is no longer id 2
        assert!(state.plan_drop(SortOrder::Asc, 0, 2, 2).is_none());
        assert!(state.plan_drop(SortOrder::Asc, 1, 2, 1).is_none());
        assert!(state.plan_drop(SortOrder::Desc, 1, 2, 3).is_none());
        assert!(state.plan_drop(SortOrder::Asc, 5, 2, 0).is_none());
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_undo_restores_order() {
        let mut state = PageState::default();
        state.replace(make_page(&[1, 2, 3, 4], 4));

        let undo = state.move_record(1, 3).unwrap();
        assert_eq!(undo.id(), 2);
        assert_eq!(ids(&state), vec![1, 3, 4, 2]);

        assert!(state.undo_move(undo));
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_undo_skipped_after_replace() {
        let mut state = PageState::default();
        state.replace(make_page(&[1, 2, 3], 3));
        let undo = state.move_record(0, 2).unwrap();

        state.replace(make_page(&[7, 8, 9], 3));
        assert!(!state.undo_move(undo));
        assert_eq!(ids(&state), vec![7, 8, 9]);
    }

    #[test]
    fn test_undo_skipped_when_row_moved_again() {
        let mut state = PageState::default();
        state.replace(make_page(&[1, 2, 3], 3));
        let undo = state.move_record(0, 2).unwrap();
        state.move_record(2, 0).unwrap();

        assert!(!state.undo_move(undo));
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }
}
