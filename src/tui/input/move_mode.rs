use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::entry_ops::{self, MoveDirection};
use crate::tui::app::{App, Mode, MoveState};

/// Enter MOVE mode for the row under the cursor.
pub(super) fn enter_move_mode(app: &mut App) {
    if let Some(row) = app.selection() {
        app.cursor = row;
        app.move_state = Some(MoveState {
            original_index: row,
        });
        app.mode = Mode::Move;
    }
}

pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        // Confirm: the rows are already in their final order
        KeyCode::Enter | KeyCode::Char('m') => {
            if let Some(ms) = app.move_state.take()
                && ms.original_index != app.cursor
            {
                app.notice = Some(format!(
                    "moved row {} to {}",
                    ms.original_index, app.cursor
                ));
            }
            app.mode = Mode::Navigate;
        }
        // Cancel: put the row back where it started
        KeyCode::Esc => {
            if let Some(ms) = app.move_state.take()
                && let Some(sel) = app.selection()
                && sel != ms.original_index
            {
                let entry = app.settings.clocks.remove(sel);
                app.settings.clocks.insert(ms.original_index, entry);
                app.cursor = ms.original_index;
            }
            app.mode = Mode::Navigate;
        }
        // Reorder as the cursor moves
        KeyCode::Char('j') | KeyCode::Down => {
            let sel = app.selection();
            if let Some(new_index) =
                entry_ops::move_entry(&mut app.settings.clocks, sel, MoveDirection::Down)
            {
                app.cursor = new_index;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let sel = app.selection();
            if let Some(new_index) =
                entry_ops::move_entry(&mut app.settings.clocks, sel, MoveDirection::Up)
            {
                app.cursor = new_index;
            }
        }
        KeyCode::Char('g') | KeyCode::Home => {
            let sel = app.selection();
            if let Some(new_index) =
                entry_ops::move_entry(&mut app.settings.clocks, sel, MoveDirection::Top)
            {
                app.cursor = new_index;
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            let sel = app.selection();
            if let Some(new_index) =
                entry_ops::move_entry(&mut app.settings.clocks, sel, MoveDirection::Bottom)
            {
                app.cursor = new_index;
            }
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
            clocks: vec![
                ClockEntry::new("London", "Europe/London"),
                ClockEntry::new("Paris", "Europe/Paris"),
                ClockEntry::new("Tokyo", "Asia/Tokyo"),
            ],
            time_format: "%H:%M".to_string(),
        };
        App::new(settings, Vec::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn labels(app: &App) -> Vec<&str> {
        app.settings.clocks.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn move_mode_reorders_and_confirms() {
        let mut app = sample_app();
        app.cursor = 0;
        enter_move_mode(&mut app);
        handle_move(&mut app, key(KeyCode::Char('j')));
        assert_eq!(labels(&app), ["Paris", "London", "Tokyo"]);
        handle_move(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(labels(&app), ["Paris", "London", "Tokyo"]);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn esc_reverts_to_original_position() {
        let mut app = sample_app();
        app.cursor = 0;
        enter_move_mode(&mut app);
        handle_move(&mut app, key(KeyCode::Char('G')));
        assert_eq!(labels(&app), ["Paris", "Tokyo", "London"]);
        handle_move(&mut app, key(KeyCode::Esc));
        assert_eq!(labels(&app), ["London", "Paris", "Tokyo"]);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn move_up_at_top_stays_put() {
        let mut app = sample_app();
        app.cursor = 0;
        enter_move_mode(&mut app);
        handle_move(&mut app, key(KeyCode::Char('k')));
        assert_eq!(labels(&app), ["London", "Paris", "Tokyo"]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn enter_move_mode_on_empty_list_is_noop() {
        let mut app = sample_app();
        app.settings.clocks.clear();
        enter_move_mode(&mut app);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.move_state.is_none());
    }

    #[test]
    fn top_and_bottom_jumps() {
        let mut app = sample_app();
        app.cursor = 2;
        enter_move_mode(&mut app);
        handle_move(&mut app, key(KeyCode::Char('g')));
        assert_eq!(labels(&app), ["Tokyo", "London", "Paris"]);
        assert_eq!(app.cursor, 0);
        handle_move(&mut app, key(KeyCode::Char('G')));
        assert_eq!(labels(&app), ["London", "Paris", "Tokyo"]);
        assert_eq!(app.cursor, 2);
    }
}
