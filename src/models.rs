//! Frontend Models
//!
//! Data structures matching backend payloads and persisted UI state.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One record of the list (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub name: String,
    /// Backend-side position
    pub order: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Arrow shown on the sort button
    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↓",
            SortOrder::Desc => "↑",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET /getList` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    pub records: Vec<ListItem>,
    pub total_records: usize,
}

/// `GET /getSort` response
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOrderPayload {
    pub sort_order: SortOrder,
}

/// `POST /checkRow` and `GET /getListChecked` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckedIdsPayload {
    #[serde(default)]
    pub checked_ids: BTreeSet<u32>,
}

/// UI state kept in local storage under [`crate::storage::LIST_STATE_KEY`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedListState {
    #[serde(default)]
    pub selected_ids: BTreeSet<u32>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_toggle_and_wire_names() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), r#""desc""#);
        assert_eq!(serde_json::from_str::<SortOrder>(r#""asc""#).unwrap(), SortOrder::Asc);
    }

    #[test]
    fn test_list_page_from_backend_json() {
        let json = r#"{"records":[{"id":4,"name":"four","order":3}],"totalRecords":100}"#;
        let page: ListPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_records, 100);
        assert_eq!(page.records[0], ListItem { id: 4, name: "four".into(), order: 3 });
    }

    #[test]
    fn test_checked_ids_missing_field_is_empty() {
        let payload: CheckedIdsPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.checked_ids.is_empty());
    }

    #[test]
    fn test_persisted_state_partial_blob_uses_defaults() {
        let state: PersistedListState = serde_json::from_str(r#"{"selectedIds":[3,1]}"#).unwrap();
        assert_eq!(state.sort_order, SortOrder::Asc);
        assert_eq!(state.selected_ids.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }
}
