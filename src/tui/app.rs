use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use regex::Regex;

use crate::io::file_store::FileStore;
use crate::io::lock::StoreLock;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::zoneinfo;
use crate::model::settings::ClockSettings;
use crate::ops::complete::Completion;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Move,
    Search,
    Confirm,
}

/// Which field an in-place edit is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Label { row: usize },
    Timezone { row: usize },
    TimeFormat,
}

/// Dropdown state while editing the timezone field
#[derive(Debug, Clone)]
pub struct AutocompleteState {
    pub filtered: Vec<String>,
    pub selected: usize,
    pub visible: bool,
}

impl AutocompleteState {
    pub fn new(filtered: Vec<String>) -> Self {
        let visible = !filtered.is_empty();
        AutocompleteState {
            filtered,
            selected: 0,
            visible,
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
        }
    }

    pub fn selected_entry(&self) -> Option<&str> {
        self.filtered.get(self.selected).map(String::as_str)
    }
}

/// Snapshot-based undo/redo for the single-line edit buffer
#[derive(Debug)]
pub struct EditHistory {
    stack: Vec<(String, usize)>,
    index: usize,
}

impl EditHistory {
    pub fn new(buffer: &str, cursor: usize) -> Self {
        EditHistory {
            stack: vec![(buffer.to_string(), cursor)],
            index: 0,
        }
    }

    /// Record the current state. A snapshot with an unchanged buffer only
    /// refreshes the stored cursor (arrow keys don't create entries).
    pub fn snapshot(&mut self, buffer: &str, cursor: usize) {
        if self.stack[self.index].0 == buffer {
            self.stack[self.index].1 = cursor;
            return;
        }
        self.stack.truncate(self.index + 1);
        self.stack.push((buffer.to_string(), cursor));
        self.index += 1;
    }

    pub fn undo(&mut self) -> Option<(String, usize)> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.stack[self.index].clone())
    }

    pub fn redo(&mut self) -> Option<(String, usize)> {
        if self.index + 1 >= self.stack.len() {
            return None;
        }
        self.index += 1;
        Some(self.stack[self.index].clone())
    }
}

/// State while a row is being repositioned
#[derive(Debug, Clone, Copy)]
pub struct MoveState {
    pub original_index: usize,
}

/// Main application state
pub struct App {
    pub settings: ClockSettings,
    /// Timezone candidates: substring matching, exact-match commits only
    pub completion: Completion,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor row in the clock list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub show_help: bool,
    /// Transient one-line message shown in the status row
    pub notice: Option<String>,

    // Edit mode
    pub edit_target: Option<EditTarget>,
    pub edit_buffer: String,
    /// Byte offset into edit_buffer
    pub edit_cursor: usize,
    pub edit_history: Option<EditHistory>,
    pub autocomplete: Option<AutocompleteState>,
    /// Where the dropdown should anchor; set during render
    pub autocomplete_anchor: Option<Rect>,

    // Move mode
    pub move_state: Option<MoveState>,

    // Search
    pub search_input: String,
    pub last_search: Option<String>,
}

impl App {
    pub fn new(settings: ClockSettings, zones: Vec<String>) -> Self {
        // match_anywhere and force_match mirror the applet's timezone cell
        let completion = Completion::new(zones, true, true);
        App {
            settings,
            completion,
            theme: Theme::default(),
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            notice: None,
            edit_target: None,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_history: None,
            autocomplete: None,
            autocomplete_anchor: None,
            move_state: None,
            search_input: String::new(),
            last_search: None,
        }
    }

    /// The selected row, or None when the list is empty.
    pub fn selection(&self) -> Option<usize> {
        if self.settings.clocks.is_empty() {
            None
        } else {
            Some(self.cursor.min(self.settings.clocks.len() - 1))
        }
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.settings.clocks.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. In Navigate: compiles from last_search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            Mode::Navigate => self.last_search.as_deref()?,
            _ => return None,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }
}

/// Run the TUI application
pub fn run(store_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = FileStore::resolve_dir(store_dir)?;
    let mut store = FileStore::open(&dir)?;
    let settings = ClockSettings::load(&store);
    let zones = zoneinfo::load_zones();

    let mut app = App::new(settings, zones);
    restore_ui_state(&mut app, &dir);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Losing focus always attempts a commit: a quit mid-edit first commits
    // whatever text is present (force-match still applies).
    input::commit_pending_edit(&mut app);

    // Best-effort save: the window closes whether or not this works.
    // A lock failure is swallowed like any other save failure.
    let _lock = StoreLock::acquire_default(&dir).ok();
    app.settings.save_best_effort(&mut store);
    save_ui_state(&app, &dir);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // The 250ms poll doubles as the refresh tick for the time preview
        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn restore_ui_state(app: &mut App, store_dir: &Path) {
    if let Some(state) = read_ui_state(store_dir) {
        app.cursor = state.cursor;
        app.clamp_cursor();
        app.last_search = state.last_search;
    }
}

fn save_ui_state(app: &App, store_dir: &Path) {
    let state = UiState {
        cursor: app.cursor,
        last_search: app.last_search.clone(),
    };
    let _ = write_ui_state(store_dir, &state);
}
