use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::settings::default_entry;
use crate::ops::entry_ops::{self, MoveDirection};
use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        // Quit
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Cursor movement
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.settings.clocks.len() {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.settings.clocks.len().saturating_sub(1);
        }

        // Add a clock (the applet's stock new row), then edit its label
        (_, KeyCode::Char('a')) => {
            entry_ops::append_entry(&mut app.settings.clocks, default_entry());
            app.cursor = app.settings.clocks.len() - 1;
            start_label_edit(app, app.cursor);
        }

        // Remove the selected clock; no-op when nothing is selected
        (_, KeyCode::Char('x')) | (_, KeyCode::Delete) => {
            let sel = app.selection();
            if let Some(removed) = entry_ops::remove_entry(&mut app.settings.clocks, sel) {
                app.notice = Some(format!("removed {}", removed.label));
                app.clamp_cursor();
            }
        }

        // Clear all (with confirmation)
        (_, KeyCode::Char('C')) => {
            if !app.settings.clocks.is_empty() {
                app.mode = Mode::Confirm;
            }
        }

        // Edit fields
        (_, KeyCode::Enter) | (_, KeyCode::Char('e')) => {
            if let Some(row) = app.selection() {
                start_label_edit(app, row);
            }
        }
        (_, KeyCode::Char('t')) => {
            if let Some(row) = app.selection() {
                start_timezone_edit(app, row);
            }
        }
        (_, KeyCode::Char('f')) => {
            start_format_edit(app);
        }

        // Reorder
        (_, KeyCode::Char('m')) => {
            enter_move_mode(app);
        }
        (_, KeyCode::Char('K')) => {
            let sel = app.selection();
            if let Some(new_index) =
                entry_ops::move_entry(&mut app.settings.clocks, sel, MoveDirection::Up)
            {
                app.cursor = new_index;
            }
        }
        (_, KeyCode::Char('J')) => {
            let sel = app.selection();
            if let Some(new_index) =
                entry_ops::move_entry(&mut app.settings.clocks, sel, MoveDirection::Down)
            {
                app.cursor = new_index;
            }
        }

        // Search
        (_, KeyCode::Char('/')) => {
            app.search_input.clear();
            app.mode = Mode::Search;
        }
        (_, KeyCode::Char('n')) => {
            jump_to_match(app, true);
        }
        (_, KeyCode::Char('N')) => {
            jump_to_match(app, false);
        }

        // Help
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}
