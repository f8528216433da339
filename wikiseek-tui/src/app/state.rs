use wikiseek_types::QueryTemplate;

use crate::api::ApiClient;
use crate::bindings::Bindings;
use crate::view::SearchView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Browsing the result list, shortcuts active
    Navigation,
    /// In the search field, keys edit the query
    Typing,
}

/// State of the search input field
pub struct SearchState {
    /// Current text-field value
    pub input: String,
    /// Set by the key handler, drained by the main loop
    pub pending_search: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            pending_search: false,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
pub struct App {
    pub running: bool,
    pub api_client: ApiClient,
    /// Immutable request-parameter template; merged with the current
    /// term on every search.
    pub template: QueryTemplate,
    pub search_state: SearchState,
    pub view: SearchView,
    pub input_mode: InputMode,
    pub bindings: Bindings,
    pub log_config: crate::logging::LogConfig,
}
