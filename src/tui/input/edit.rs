use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::entry_ops;
use crate::tui::app::{App, AutocompleteState, EditHistory, EditTarget, Mode};
use crate::util::unicode;

// ---------------------------------------------------------------------------
// Entering edit mode

pub(super) fn start_label_edit(app: &mut App, row: usize) {
    begin_edit(app, EditTarget::Label { row }, app.settings.clocks[row].label.clone());
}

pub(super) fn start_timezone_edit(app: &mut App, row: usize) {
    let text = app.settings.clocks[row].timezone.clone();
    begin_edit(app, EditTarget::Timezone { row }, text);
    update_autocomplete_filter(app);
}

pub(super) fn start_format_edit(app: &mut App) {
    begin_edit(app, EditTarget::TimeFormat, app.settings.time_format.clone());
}

fn begin_edit(app: &mut App, target: EditTarget, text: String) {
    app.edit_cursor = text.len();
    app.edit_history = Some(EditHistory::new(&text, app.edit_cursor));
    app.edit_buffer = text;
    app.edit_target = Some(target);
    app.autocomplete = None;
    app.mode = Mode::Edit;
}

// ---------------------------------------------------------------------------
// Leaving edit mode

/// Commit the buffer into the model.
///
/// For the timezone field this is where force-match applies: text that is
/// not exactly a known candidate is silently discarded — the field keeps
/// its old value and no notice fires.
pub(super) fn confirm_edit(app: &mut App) {
    let target = app.edit_target.take();
    let text = std::mem::take(&mut app.edit_buffer);
    app.autocomplete = None;
    app.edit_history = None;
    app.mode = Mode::Navigate;

    match target {
        Some(EditTarget::Label { row }) => {
            entry_ops::set_label(&mut app.settings.clocks, row, &text);
        }
        Some(EditTarget::Timezone { row }) => {
            if app.completion.accepts(&text) {
                entry_ops::set_timezone(&mut app.settings.clocks, row, &text);
                app.notice = Some(format!("row {} timezone set to {}", row, text));
            }
        }
        Some(EditTarget::TimeFormat) => {
            app.settings.time_format = text;
        }
        None => {}
    }
}

pub(super) fn cancel_edit(app: &mut App) {
    app.edit_target = None;
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_history = None;
    app.autocomplete = None;
    app.mode = Mode::Navigate;
}

// ---------------------------------------------------------------------------
// Autocomplete

/// Refresh the dropdown against the current buffer. Only the timezone
/// field completes; other targets never get a dropdown.
pub(super) fn update_autocomplete_filter(app: &mut App) {
    if !matches!(app.edit_target, Some(EditTarget::Timezone { .. })) || app.completion.is_empty() {
        app.autocomplete = None;
        return;
    }
    let filtered: Vec<String> = app
        .completion
        .filter(&app.edit_buffer)
        .map(String::from)
        .collect();
    let selected = app
        .autocomplete
        .as_ref()
        .map(|ac| ac.selected.min(filtered.len().saturating_sub(1)))
        .unwrap_or(0);
    let mut ac = AutocompleteState::new(filtered);
    ac.selected = selected;
    app.autocomplete = Some(ac);
}

fn autocomplete_accept(app: &mut App) {
    if let Some(entry) = app.autocomplete.as_ref().and_then(|ac| ac.selected_entry()) {
        let entry = entry.to_string();
        app.edit_cursor = entry.len();
        app.edit_buffer = entry;
        if let Some(eh) = &mut app.edit_history {
            eh.snapshot(&app.edit_buffer, app.edit_cursor);
        }
        update_autocomplete_filter(app);
    }
}

// ---------------------------------------------------------------------------
// EDIT mode input

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    // Handle dropdown navigation when it is visible
    let ac_visible = app
        .autocomplete
        .as_ref()
        .is_some_and(|ac| ac.visible && !ac.filtered.is_empty());

    if ac_visible {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Up) => {
                if let Some(ac) = &mut app.autocomplete {
                    ac.move_up();
                }
                return;
            }
            (KeyModifiers::NONE, KeyCode::Down) => {
                if let Some(ac) = &mut app.autocomplete {
                    ac.move_down();
                }
                return;
            }
            (KeyModifiers::NONE, KeyCode::Tab) => {
                autocomplete_accept(app);
                return;
            }
            // Dismiss dropdown on Esc (hide, don't destroy — typing re-shows)
            (_, KeyCode::Esc) => {
                if let Some(ac) = &mut app.autocomplete {
                    ac.visible = false;
                }
                return;
            }
            // Enter: accept the selection if the user is mid-completion,
            // then fall through to commit
            (_, KeyCode::Enter) => {
                if let Some(ac) = &app.autocomplete
                    && let Some(entry) = ac.selected_entry()
                    && app.edit_buffer != entry
                {
                    autocomplete_accept(app);
                }
                confirm_edit(app);
                return;
            }
            _ => {
                // Other keys fall through; characters re-filter below
            }
        }
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            confirm_edit(app);
        }
        (_, KeyCode::Esc) => {
            cancel_edit(app);
        }
        // Home / Ctrl+A: jump to start of line
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = 0;
        }
        (_, KeyCode::Home) => {
            app.edit_cursor = 0;
        }
        // End / Ctrl+E: jump to end of line
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        (_, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        // Kill to start of line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            if app.edit_cursor > 0 {
                app.edit_buffer.drain(..app.edit_cursor);
                app.edit_cursor = 0;
            }
            if let Some(eh) = &mut app.edit_history {
                eh.snapshot(&app.edit_buffer, app.edit_cursor);
            }
            update_autocomplete_filter(app);
        }
        // Inline undo / redo
        (m, KeyCode::Char('z')) if m.contains(KeyModifiers::CONTROL) => {
            if let Some(eh) = &mut app.edit_history
                && let Some((buf, pos)) = eh.undo()
            {
                app.edit_buffer = buf;
                app.edit_cursor = pos;
            }
            update_autocomplete_filter(app);
        }
        (m, KeyCode::Char('y')) if m.contains(KeyModifiers::CONTROL) => {
            if let Some(eh) = &mut app.edit_history
                && let Some((buf, pos)) = eh.redo()
            {
                app.edit_buffer = buf;
                app.edit_cursor = pos;
            }
            update_autocomplete_filter(app);
        }
        // Word movement (Alt+arrow or readline Alt+B/F)
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_right(&app.edit_buffer, app.edit_cursor);
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_right(&app.edit_buffer, app.edit_cursor);
        }
        // Single character movement
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        // Word backspace (Alt or Ctrl)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let new_pos = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.drain(new_pos..app.edit_cursor);
            app.edit_cursor = new_pos;
            if let Some(eh) = &mut app.edit_history {
                eh.snapshot(&app.edit_buffer, app.edit_cursor);
            }
            update_autocomplete_filter(app);
        }
        // Backspace: delete one grapheme
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.drain(prev..app.edit_cursor);
                app.edit_cursor = prev;
            }
            if let Some(eh) = &mut app.edit_history {
                eh.snapshot(&app.edit_buffer, app.edit_cursor);
            }
            update_autocomplete_filter(app);
        }
        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
            if let Some(eh) = &mut app.edit_history {
                eh.snapshot(&app.edit_buffer, app.edit_cursor);
            }
            update_autocomplete_filter(app);
        }
        _ => {}
    }
}
