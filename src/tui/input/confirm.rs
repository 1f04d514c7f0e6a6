use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::entry_ops;
use crate::tui::app::{App, Mode};

/// Confirmation prompt before clearing the whole list.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            entry_ops::clear_entries(&mut app.settings.clocks);
            app.cursor = 0;
            app.scroll_offset = 0;
            app.notice = Some("cleared".to_string());
            app.mode = Mode::Navigate;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::ClockEntry;
    use crate::model::settings::ClockSettings;
    use crossterm::event::KeyModifiers;

    fn sample_app() -> App {
        let settings = ClockSettings {
            clocks: vec![ClockEntry::new("London", "Europe/London")],
            time_format: "%H:%M".to_string(),
        };
        let mut app = App::new(settings, Vec::new());
        app.mode = Mode::Confirm;
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn y_clears_the_list() {
        let mut app = sample_app();
        handle_confirm(&mut app, key(KeyCode::Char('y')));
        assert!(app.settings.clocks.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn n_keeps_the_list() {
        let mut app = sample_app();
        handle_confirm(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.settings.clocks.len(), 1);
        assert_eq!(app.mode, Mode::Navigate);
    }
}
