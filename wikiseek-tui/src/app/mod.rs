use anyhow::Result;
use wikiseek_types::{map_results, query, QueryTemplate};

use crate::api::ApiClient;
use crate::bindings::Bindings;
use crate::log_api_call;
use crate::view::SearchView;

pub mod state;
pub use state::*;
pub mod handlers;


impl App {
    /// Create the app against the given query endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            running: true,
            api_client: ApiClient::new(endpoint),
            template: QueryTemplate::default(),
            search_state: SearchState::new(),
            view: SearchView::new(),
            input_mode: InputMode::Typing,
            bindings: Bindings::default(),
            log_config: crate::logging::LogConfig::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Append a character to the search input
    pub fn add_char(&mut self, c: char) {
        self.search_state.input.push(c);
    }

    /// Remove the last character from the search input
    pub fn remove_char(&mut self) {
        self.search_state.input.pop();
    }

    /// Move focus to the search field
    pub fn focus_input(&mut self) {
        self.input_mode = InputMode::Typing;
    }

    /// Move focus to the result list, selecting the first result if
    /// nothing is selected yet
    pub fn focus_results(&mut self) {
        self.input_mode = InputMode::Navigation;
        if self.view.list_state.selected().is_none() && !self.view.results.is_empty() {
            self.view.list_state.select(Some(0));
        }
    }

    /// Run one end-to-end search interaction.
    ///
    /// Empty input aborts silently with no request and no UI change.
    /// Otherwise the view is cleared and disabled, one request goes out,
    /// and the response lands on the results surface or the error
    /// surface. The UI is re-enabled no matter how the request ends.
    pub async fn search(&mut self) -> Result<()> {
        let user_input = self.search_state.input.clone();
        if query::is_empty(Some(user_input.as_str())) {
            return Ok(());
        }

        let params = self.template.build(&user_input);

        self.view.clear_previous_results();
        self.view.disable_ui();

        log_api_call!(self.log_config, "search term={:?}", user_input);

        match self.api_client.search(&params).await {
            Ok(pages) => {
                let results = map_results(&pages);
                log_api_call!(self.log_config, "search returned {} result(s)", results.len());
                self.view.show_results(results);
            }
            Err(e) => {
                log_api_call!(self.log_config, "search failed: {}", e);
                self.view.show_error(e.to_string());
            }
        }

        self.view.enable_ui();
        Ok(())
    }

    /// Open the selected result's canonical article in the system
    /// browser
    pub fn open_selected_result(&mut self) {
        if let Some(result) = self.view.selected() {
            let url = crate::config::article_url(self.api_client.endpoint(), result.page_id);
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("Failed to open browser for {}: {}", url, e);
            }
        }
    }
}
