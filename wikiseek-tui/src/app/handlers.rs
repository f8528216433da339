use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, InputMode};
use crate::bindings::Action;
use crate::log_key_event;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Input and submit control share one disabled flag; while a
        // search is in flight neither accepts events.
        if !self.view.ui_enabled {
            return Ok(());
        }

        log_key_event!(self.log_config, "{:?} mode={:?}", key.code, self.input_mode);

        // Editing keys first while the search field has focus; everything
        // else goes through the binding table.
        if self.input_mode == InputMode::Typing {
            match key.code {
                KeyCode::Char(c) => {
                    self.add_char(c);
                    return Ok(());
                }
                KeyCode::Backspace => {
                    self.remove_char();
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.bindings.resolve(self.input_mode, key.code) {
            Some(Action::SubmitSearch) => self.search_state.pending_search = true,
            Some(Action::OpenResult) => self.open_selected_result(),
            Some(Action::NextResult) => self.view.select_next(),
            Some(Action::PreviousResult) => self.view.select_previous(),
            Some(Action::FocusInput) => self.focus_input(),
            Some(Action::FocusResults) => self.focus_results(),
            Some(Action::Quit) => self.quit(),
            None => {}
        }

        Ok(())
    }
}
