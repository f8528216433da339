use serde::Serialize;

/// Immutable template for the constant portion of a search request.
///
/// The MediaWiki query API wants the same fixed knobs on every request;
/// only the search term varies. The template is never mutated: each
/// search merges it with the term into a fresh [`SearchParams`], so two
/// in-flight requests can never observe each other's term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    /// Response serialization format.
    pub format: &'static str,
    /// API action selector.
    pub action: &'static str,
    /// Page property to fetch for each match.
    pub prop: &'static str,
    /// Maximum number of extract characters per page.
    pub exchars: u32,
    /// Only return content before the first section heading.
    pub exintro: bool,
    /// Return extracts as plain text instead of HTML.
    pub explaintext: bool,
    /// Generator used to produce the page set.
    pub generator: &'static str,
    /// Maximum number of pages the generator returns.
    pub gsrlimit: u32,
}

impl Default for QueryTemplate {
    fn default() -> Self {
        Self {
            format: "json",
            action: "query",
            prop: "extracts",
            exchars: 250,
            exintro: true,
            explaintext: true,
            generator: "search",
            gsrlimit: 20,
        }
    }
}

impl QueryTemplate {
    /// Build the full parameter set for one request.
    pub fn build(&self, term: &str) -> SearchParams {
        SearchParams {
            format: self.format,
            action: self.action,
            prop: self.prop,
            exchars: self.exchars,
            exintro: self.exintro,
            explaintext: self.explaintext,
            generator: self.generator,
            gsrlimit: self.gsrlimit,
            gsrsearch: term.to_string(),
        }
    }
}

/// Complete query-string parameters for one search request.
///
/// Serializes directly into the request query string; `gsrsearch`
/// carries the user's term.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchParams {
    pub format: &'static str,
    pub action: &'static str,
    pub prop: &'static str,
    pub exchars: u32,
    pub exintro: bool,
    pub explaintext: bool,
    pub generator: &'static str,
    pub gsrlimit: u32,
    pub gsrsearch: String,
}
