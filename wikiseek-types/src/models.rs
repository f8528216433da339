use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One matched page as the server represents it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    pub pageid: u64,
    pub title: String,
    /// Plain-text intro extract. Absent on some malformed or truncated
    /// responses; an empty string propagates downstream instead of a
    /// decode failure.
    #[serde(default)]
    pub extract: String,
}

/// The `query.pages` object: opaque keys mapping to page records.
///
/// Keys are page ids rendered as strings, but nothing downstream relies
/// on that; only the values matter.
pub type PageMap = BTreeMap<String, PageRecord>;

/// Nested `query` body of a successful search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryBody {
    #[serde(default)]
    pub pages: PageMap,
}

/// Embedded error indicator the API returns inside a 200 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    pub info: String,
}

/// Top-level search response envelope.
///
/// A structurally-successful response carries either `query.pages` or an
/// `error` indicator; a search with zero hits carries neither.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<QueryBody>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

/// Normalized display shape consumed by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub page_id: u64,
    pub title: String,
    pub intro: String,
}

/// Flatten the server's keyed page map into an ordered display sequence.
///
/// One output per input value, in the map's value-iteration order. Fields
/// are renamed copies; no validation, truncation, or escaping happens
/// here.
pub fn map_results(pages: &PageMap) -> Vec<SearchResult> {
    pages
        .values()
        .map(|page| SearchResult {
            page_id: page.pageid,
            title: page.title.clone(),
            intro: page.extract.clone(),
        })
        .collect()
}
