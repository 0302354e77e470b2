//! Row Check Commands

use std::collections::BTreeSet;

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::CheckedIdsPayload;

#[derive(Serialize)]
struct IdBody {
    id: u32,
}

impl ApiClient {
    /// Toggle the server-side check of a row; returns the resulting checked set
    pub async fn check_row(&self, id: u32) -> ApiResult<BTreeSet<u32>> {
        let payload: CheckedIdsPayload = self.post_json("/checkRow", &IdBody { id }).await?;
        Ok(payload.checked_ids)
    }

    pub async fn get_list_checked(&self) -> ApiResult<BTreeSet<u32>> {
        let payload: CheckedIdsPayload = self.get_json("/getListChecked").await?;
        Ok(payload.checked_ids)
    }
}
