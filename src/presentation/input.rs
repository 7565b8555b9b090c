use crate::application::{Action, App};
use crate::domain::Store;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Maps a key press to a dashboard action. Unmapped keys yield `None`.
    pub fn map_key(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match key {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            };
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MovePrevious),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveNext),
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h')
            | KeyCode::Char('l') => Some(Action::SwitchPane),
            KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    /// Applies the action bound to `key`, if any. Returns whether the key was handled.
    ///
    /// Any pending status message is dropped first, so it lasts exactly one key press.
    pub fn handle_key_event<S: Store>(app: &mut App<S>, key: KeyCode, modifiers: KeyModifiers) -> bool {
        app.clear_status();
        match Self::map_key(key, modifiers) {
            Some(action) => {
                app.apply(action);
                true
            }
            None => false,
        }
    }
}
