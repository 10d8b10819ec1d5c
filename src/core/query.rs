//! Paginated query engine.
//!
//! Retrieves the full set of published records from a resolved query target.
//! Pagination is an inherently sequential cursor chain: each request carries
//! the previous response's `next_cursor`. Any request failure aborts the run;
//! accumulated pages are discarded.

use serde_json::json;
use tracing::debug;

use crate::error::Result;
use crate::notion::{ContentApi, Page, QueryRequest, QueryTarget};

/// Query parameters shared by both pipeline entrypoints
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Status value that marks a record as published
    pub published_value: String,

    /// Page size per request
    pub page_size: u32,
}

impl QueryOptions {
    fn request(&self, cursor: Option<String>) -> QueryRequest {
        QueryRequest {
            start_cursor: cursor,
            page_size: self.page_size,
            filter: Some(json!({
                "property": "Status",
                "select": { "equals": self.published_value },
            })),
            sorts: vec![json!({
                "property": "title",
                "direction": "ascending",
            })],
        }
    }
}

/// Fetch every published record from the target, in page order.
///
/// Terminates when the source stops declaring more pages, or when it does so
/// without supplying a continuation cursor (treated as end-of-stream so a
/// misbehaving source cannot loop us forever).
pub async fn fetch_published(
    api: &dyn ContentApi,
    target: &QueryTarget,
    options: &QueryOptions,
) -> Result<Vec<Page>> {
    let mut pages = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let response = api.query(target, &options.request(cursor)).await?;
        debug!(
            results = response.results.len(),
            has_more = response.has_more,
            "query page received"
        );

        pages.extend(response.results);

        cursor = match (response.has_more, response.next_cursor) {
            (true, Some(next)) if !next.is_empty() => Some(next),
            _ => break,
        };
    }

    Ok(pages)
}
