use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if app.search_input.is_empty() {
                app.last_search = None;
            } else {
                app.last_search = Some(std::mem::take(&mut app.search_input));
            }
            app.mode = Mode::Navigate;
            jump_to_match(app, true);
        }
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        _ => {}
    }
}

/// Move the cursor to the next (or previous) row matching the active
/// search, wrapping around. Label and timezone both count.
pub(super) fn jump_to_match(app: &mut App, forward: bool) {
    let re = match app.active_search_re() {
        Some(re) => re,
        None => return,
    };
    let len = app.settings.clocks.len();
    if len == 0 {
        return;
    }
    for step in 1..=len {
        let idx = if forward {
            (app.cursor + step) % len
        } else {
            (app.cursor + len - (step % len)) % len
        };
        let entry = &app.settings.clocks[idx];
        if re.is_match(&entry.label) || re.is_match(&entry.timezone) {
            app.cursor = idx;
            return;
        }
    }
    app.notice = Some("no match".to_string());
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

    #[test]
    fn search_jumps_to_matching_row() {
        let mut app = sample_app();
        app.mode = Mode::Search;
        for c in "tokyo".chars() {
            handle_search(&mut app, key(KeyCode::Char(c)));
        }
        handle_search(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.last_search.as_deref(), Some("tokyo"));
    }

    #[test]
    fn search_matches_timezone_field_too() {
        let mut app = sample_app();
        app.last_search = Some("asia".to_string());
        jump_to_match(&mut app, true);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn next_match_wraps_around() {
        let mut app = sample_app();
        app.last_search = Some("europe".to_string());
        app.cursor = 1;
        jump_to_match(&mut app, true);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn backward_search_goes_to_previous_match() {
        let mut app = sample_app();
        app.last_search = Some("europe".to_string());
        app.cursor = 2;
        jump_to_match(&mut app, false);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn no_match_leaves_cursor_and_sets_notice() {
        let mut app = sample_app();
        app.last_search = Some("zanzibar".to_string());
        jump_to_match(&mut app, true);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.notice.as_deref(), Some("no match"));
    }

    #[test]
    fn esc_abandons_the_prompt() {
        let mut app = sample_app();
        app.mode = Mode::Search;
        handle_search(&mut app, key(KeyCode::Char('x')));
        handle_search(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.search_input.is_empty());
        assert!(app.last_search.is_none());
    }
}
