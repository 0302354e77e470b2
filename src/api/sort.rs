//! Sort Order Commands
//!
//! Global sort direction and single-row reordering.

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::{SortOrder, SortOrderPayload};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSortRowBody {
    id: u32,
    target_order: usize,
}

// ========================
// Commands
// ========================

impl ApiClient {
    pub async fn get_sort_order(&self) -> ApiResult<SortOrder> {
        let payload: SortOrderPayload = self.get_json("/getSort").await?;
        Ok(payload.sort_order)
    }

    pub async fn update_sort_order(&self, sort_order: SortOrder) -> ApiResult<()> {
        self.post("/updateSortOrder", &SortOrderPayload { sort_order }).await
    }

    /// Move row `id` to server-side position `target_order`
    pub async fn update_sort_row(&self, id: u32, target_order: usize) -> ApiResult<()> {
        self.post("/updateSortRow", &UpdateSortRowBody { id, target_order }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_bodies_use_camel_case() {
        let body = serde_json::to_string(&UpdateSortRowBody { id: 3, target_order: 89 }).unwrap();
        assert_eq!(body, r#"{"id":3,"targetOrder":89}"#);

        let body = serde_json::to_string(&SortOrderPayload { sort_order: SortOrder::Desc }).unwrap();
        assert_eq!(body, r#"{"sortOrder":"desc"}"#);
    }
}
