use crossterm::event::KeyCode;

use crate::app::InputMode;

/// Application-level actions a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run the search with the current input (explicit activation and
    /// the Enter-key signal both map here).
    SubmitSearch,
    /// Open the selected result's article in the system browser.
    OpenResult,
    NextResult,
    PreviousResult,
    FocusInput,
    FocusResults,
    Quit,
}

/// Subscription table from key signals to actions, per input mode.
///
/// Keys not registered for the active mode resolve to nothing and are
/// ignored by the dispatcher. Character and backspace editing in typing
/// mode is handled before lookup, so registering plain characters only
/// makes sense for navigation mode.
pub struct Bindings {
    typing: Vec<(KeyCode, Action)>,
    navigation: Vec<(KeyCode, Action)>,
}

impl Bindings {
    pub fn empty() -> Self {
        Self {
            typing: Vec::new(),
            navigation: Vec::new(),
        }
    }

    /// Register a key signal for the given mode.
    pub fn on_key(&mut self, mode: InputMode, key: KeyCode, action: Action) {
        match mode {
            InputMode::Typing => self.typing.push((key, action)),
            InputMode::Navigation => self.navigation.push((key, action)),
        }
    }

    /// Resolve a key signal for the given mode.
    pub fn resolve(&self, mode: InputMode, key: KeyCode) -> Option<Action> {
        let table = match mode {
            InputMode::Typing => &self.typing,
            InputMode::Navigation => &self.navigation,
        };
        table
            .iter()
            .find(|(code, _)| *code == key)
            .map(|(_, action)| *action)
    }
}

impl Default for Bindings {
    fn default() -> Self {
        let mut bindings = Self::empty();

        // Typing: the input field has focus. Enter is equivalent to
        // pressing the submit control.
        bindings.on_key(InputMode::Typing, KeyCode::Enter, Action::SubmitSearch);
        bindings.on_key(InputMode::Typing, KeyCode::Tab, Action::FocusResults);
        bindings.on_key(InputMode::Typing, KeyCode::Down, Action::FocusResults);
        bindings.on_key(InputMode::Typing, KeyCode::Esc, Action::Quit);

        // Navigation: the result list has focus. 's' re-runs the current
        // query, the explicit-activation counterpart of Enter-in-typing.
        bindings.on_key(InputMode::Navigation, KeyCode::Char('s'), Action::SubmitSearch);
        bindings.on_key(InputMode::Navigation, KeyCode::Enter, Action::OpenResult);
        bindings.on_key(InputMode::Navigation, KeyCode::Char('o'), Action::OpenResult);
        bindings.on_key(InputMode::Navigation, KeyCode::Down, Action::NextResult);
        bindings.on_key(InputMode::Navigation, KeyCode::Char('j'), Action::NextResult);
        bindings.on_key(InputMode::Navigation, KeyCode::Up, Action::PreviousResult);
        bindings.on_key(InputMode::Navigation, KeyCode::Char('k'), Action::PreviousResult);
        bindings.on_key(InputMode::Navigation, KeyCode::Tab, Action::FocusInput);
        bindings.on_key(InputMode::Navigation, KeyCode::Char('/'), Action::FocusInput);
        bindings.on_key(InputMode::Navigation, KeyCode::Char('i'), Action::FocusInput);
        bindings.on_key(InputMode::Navigation, KeyCode::Char('q'), Action::Quit);
        bindings.on_key(InputMode::Navigation, KeyCode::Esc, Action::Quit);

        bindings
    }
}
