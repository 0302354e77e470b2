//! List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiResult;
use crate::list::{PageState, ReorderUndo, SelectionSet};
use crate::models::{ListPage, PersistedListState, SortOrder};
use crate::storage::{save_list_state, KeyValueStore};

/// All UI state owned by the list container
#[derive(Clone, Debug, Default, Store)]
pub struct ListViewState {
    /// Committed (debounced) search text
    pub search: String,
    pub sort_order: SortOrder,
    pub selected: SelectionSet,
    /// Loaded prefix of the result set
    pub page: PageState,
}

impl ListViewState {
    pub fn from_persisted(persisted: Option<PersistedListState>) -> Self {
        let persisted = persisted.unwrap_or_default();
        Self {
            sort_order: persisted.sort_order,
            selected: SelectionSet::from(persisted.selected_ids),
            ..Default::default()
        }
    }

    /// Snapshot written to local storage
    pub fn to_persisted(&self) -> PersistedListState {
        PersistedListState {
            selected_ids: self.selected.ids().clone(),
            sort_order: self.sort_order,
        }
    }
}

/// Type alias for the store
pub type ListStore = Store<ListViewState>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_persisted(store: &ListStore) -> PersistedListState {
    store.read_untracked().to_persisted()
}

/// Replace the loaded page with a fresh first page
pub fn store_replace_page(store: &ListStore, page: ListPage) {
    store.page().write().replace(page);
}

/// Append a page if the loaded page is still the one it extends
pub fn store_append_page(store: &ListStore, generation: u64, page: ListPage) -> bool {
    let page_field = store.page();
    let mut current = page_field.write();
    if current.generation() != generation {
        return false;
    }
    current.append(page);
    true
}

/// Flip selection of a row; returns whether it is now selected
pub fn store_toggle_selected(store: &ListStore, id: u32) -> bool {
    store.selected().write().toggle(id)
}

/// Flip sort order; returns the new order
pub fn store_toggle_sort(store: &ListStore) -> SortOrder {
    let next = store.sort_order().get_untracked().toggled();
    store.sort_order().set(next);
    next
}

/// Optimistically apply a drop; returns undo info and the server position
pub fn store_plan_drop(store: &ListStore, source_index: usize, source_id: u32, target_index: usize) -> Option<(ReorderUndo, usize)> {
    let sort_order = store.sort_order().get_untracked();
    store.page().write().plan_drop(sort_order, source_index, source_id, target_index)
}

pub fn store_undo_move(store: &ListStore, undo: ReorderUndo) -> bool {
    store.page().write().undo_move(undo)
}

/// Merge server-provided sort order and checked rows into `current`.
///
/// Whatever succeeded is written to `storage` and the merged state returned.
/// When both requests failed nothing is written, so the next mount seeds again.
pub fn apply_seed(
    storage: &impl KeyValueStore,
    current: PersistedListState,
    sort_order: ApiResult<SortOrder>,
    checked: ApiResult<BTreeSet<u32>>,
) -> Option<PersistedListState> {
    let mut seeded = current;
    let mut any_ok = false;

    match sort_order {
        Ok(order) => {
            seeded.sort_order = order;
            any_ok = true;
        }
        Err(e) => log::error!("[LIST] failed to load sort order: {}", e),
    }
    match checked {
        Ok(ids) => {
            seeded.selected_ids = ids;
            any_ok = true;
        }
        Err(e) => log::error!("[LIST] failed to load checked rows: {}", e),
    }

    if !any_ok {
        return None;
    }
    save_list_state(storage, &seeded);
    Some(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::storage::{load_list_state, MemoryStorage};

    #[test]
    fn test_persisted_roundtrip() {
        let persisted = PersistedListState {
            selected_ids: BTreeSet::from([4, 8]),
            sort_order: SortOrder::Desc,
        };
        let state = ListViewState::from_persisted(Some(persisted.clone()));
        assert!(state.selected.contains(4));
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert_eq!(state.to_persisted(), persisted);
    }

    #[test]
    fn test_missing_persisted_state_uses_defaults() {
        let state = ListViewState::from_persisted(None);
        assert_eq!(state.sort_order, SortOrder::Asc);
        assert!(state.selected.is_empty());
        assert!(state.search.is_empty());
    }

    #[test]
    fn test_seed_failure_writes_nothing() {
        let storage = MemoryStorage::default();
        let seeded = apply_seed(
            &storage,
            PersistedListState::default(),
            Err(ApiError::Status(503)),
            Err(ApiError::Transport("offline".into())),
        );

        assert!(seeded.is_none());
        assert!(load_list_state(&storage).is_none());
    }

    #[test]
    fn test_seed_success_is_persisted() {
        let storage = MemoryStorage::default();
        let seeded = apply_seed(
            &storage,
            PersistedListState::default(),
            Ok(SortOrder::Desc),
            Ok(BTreeSet::from([3, 9])),
        )
        .unwrap();

        assert_eq!(seeded.sort_order, SortOrder::Desc);
        assert_eq!(seeded.selected_ids, BTreeSet::from([3, 9]));
        assert_eq!(load_list_state(&storage), Some(seeded));
    }

    #[test]
    fn test_partial_seed_keeps_current_selection() {
        let storage = MemoryStorage::default();
        let current = PersistedListState {
            selected_ids: BTreeSet::from([1]),
            sort_order: SortOrder::Asc,
        };
        let seeded = apply_seed(&storage, current, Ok(SortOrder::Desc), Err(ApiError::Status(500))).unwrap();

        assert_eq!(seeded.sort_order, SortOrder::Desc);
        assert_eq!(seeded.selected_ids, BTreeSet::from([1]));
        assert_eq!(load_list_state(&storage), Some(seeded));
    }
}
