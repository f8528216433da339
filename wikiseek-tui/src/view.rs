use ratatui::widgets::ListState;
use wikiseek_types::SearchResult;

/// Owned state behind the two display surfaces and the shared UI-enabled
/// flag. The renderer draws whatever is here each frame; the controller
/// mutates it through the operations below.
pub struct SearchView {
    /// Results surface: the ordered sequence of rendered result blocks.
    pub results: Vec<SearchResult>,
    /// Error surface: a single decorated line, or nothing.
    pub error: Option<String>,
    /// One flag for both the input field and the submit affordance, so
    /// they can never disagree.
    pub ui_enabled: bool,
    /// Selection over the results surface.
    pub list_state: ListState,
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            error: None,
            ui_enabled: true,
            list_state: ListState::default(),
        }
    }

    /// Disable the input field and submit affordance. Idempotent.
    pub fn disable_ui(&mut self) {
        self.ui_enabled = false;
    }

    /// Re-enable the input field and submit affordance. Idempotent.
    pub fn enable_ui(&mut self) {
        self.ui_enabled = true;
    }

    /// Empty both surfaces so stale content never shows beside new
    /// content.
    pub fn clear_previous_results(&mut self) {
        self.results.clear();
        self.error = None;
        self.list_state.select(None);
    }

    /// Replace the error surface with a single message. Overwrites, does
    /// not append.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Replace the results surface with the given sequence.
    ///
    /// Replacement (rather than appending) means calling this twice can
    /// never accumulate duplicate blocks.
    pub fn show_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        if self.results.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Currently selected result, if any.
    pub fn selected(&self) -> Option<&SearchResult> {
        self.list_state.selected().and_then(|i| self.results.get(i))
    }

    /// Move the selection down one result.
    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.results.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the selection up one result.
    pub fn select_previous(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };
        self.list_state.select(Some(previous));
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(page_id: u64, title: &str) -> SearchResult {
        SearchResult {
            page_id,
            title: title.to_string(),
            intro: format!("{} intro", title),
        }
    }

    #[test]
    fn ui_toggles_are_idempotent() {
        let mut view = SearchView::new();
        assert!(view.ui_enabled);

        view.disable_ui();
        view.disable_ui();
        assert!(!view.ui_enabled);

        view.enable_ui();
        view.enable_ui();
        assert!(view.ui_enabled);
    }

    #[test]
    fn clear_empties_both_surfaces() {
        let mut view = SearchView::new();
        view.show_results(vec![result(1, "Cat")]);
        view.show_error("boom");

        view.clear_previous_results();

        assert!(view.results.is_empty());
        assert!(view.error.is_none());
        assert_eq!(view.list_state.selected(), None);
    }

    #[test]
    fn show_results_after_clear_renders_exactly_the_sequence() {
        let mut view = SearchView::new();
        view.clear_previous_results();
        view.show_results(vec![result(1, "Cat"), result(2, "Dog")]);

        assert_eq!(view.results.len(), 2);
        assert_eq!(view.results[0].title, "Cat");
        assert_eq!(view.results[1].title, "Dog");
        assert_eq!(view.list_state.selected(), Some(0));
    }

    #[test]
    fn show_results_replaces_rather_than_appends() {
        let mut view = SearchView::new();
        view.show_results(vec![result(1, "Cat"), result(2, "Dog")]);
        view.show_results(vec![result(3, "Fox")]);

        assert_eq!(view.results.len(), 1);
        assert_eq!(view.results[0].title, "Fox");
    }

    #[test]
    fn empty_result_set_leaves_surface_empty_and_unselected() {
        let mut view = SearchView::new();
        view.show_results(Vec::new());

        assert!(view.results.is_empty());
        assert_eq!(view.list_state.selected(), None);
    }

    #[test]
    fn show_error_overwrites_previous_message() {
        let mut view = SearchView::new();
        view.show_error("first");
        view.show_error("second");

        assert_eq!(view.error.as_deref(), Some("second"));
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut view = SearchView::new();
        view.show_results(vec![result(1, "A"), result(2, "B")]);

        view.select_next();
        assert_eq!(view.list_state.selected(), Some(1));
        view.select_next();
        assert_eq!(view.list_state.selected(), Some(1));

        view.select_previous();
        assert_eq!(view.list_state.selected(), Some(0));
        view.select_previous();
        assert_eq!(view.list_state.selected(), Some(0));

        assert_eq!(view.selected().unwrap().title, "A");
    }

    #[test]
    fn selection_is_noop_with_no_results() {
        let mut view = SearchView::new();
        view.select_next();
        view.select_previous();
        assert_eq!(view.list_state.selected(), None);
        assert!(view.selected().is_none());
    }
}
