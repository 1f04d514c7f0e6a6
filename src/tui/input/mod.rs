mod confirm;
mod edit;
mod move_mode;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use move_mode::*;
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use search::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.notice = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Move => handle_move(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}

/// Commit whatever text is in the edit buffer if an edit is in flight.
/// Called on the way out of the TUI: the window losing focus (closing)
/// always attempts a commit.
pub fn commit_pending_edit(app: &mut App) {
    if app.mode == Mode::Edit {
        confirm_edit(app);
    }
}
