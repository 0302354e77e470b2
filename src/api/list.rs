//! List Page Queries
//!
//! Paged record fetches with search and sort parameters.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{ApiClient, ApiResult};
use crate::models::{ListPage, SortOrder};

/// Everything except RFC 3986 unreserved characters
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path and query for `GET /getList`
pub fn list_query(start: usize, limit: usize, search: &str, sort_order: SortOrder) -> String {
    format!(
        "/getList?start={}&limit={}&search={}&sortOrder={}",
        start,
        limit,
        utf8_percent_encode(search, QUERY_VALUE),
        sort_order.as_str(),
    )
}

impl ApiClient {
    pub async fn get_list(&self, start: usize, limit: usize, search: &str, sort_order: SortOrder) -> ApiResult<ListPage> {
        self.get_json(&list_query(start, limit, search, sort_order)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_plain() {
        assert_eq!(
            list_query(0, 20, "", SortOrder::Asc),
            "/getList?start=0&limit=20&search=&sortOrder=asc"
        );
    }

    #[test]
    fn test_list_query_encodes_search() {
        assert_eq!(
            list_query(40, 20, "a&b c", SortOrder::Desc),
            "/getList?start=40&limit=20&search=a%26b%20c&sortOrder=desc"
        );
        assert_eq!(
            list_query(0, 20, "ёж-1", SortOrder::Asc),
            "/getList?start=0&limit=20&search=%D1%91%D0%B6-1&sortOrder=asc"
        );
    }
}
