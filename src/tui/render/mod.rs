pub mod autocomplete;
pub mod format_row;
pub mod helpers;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | clock list | format row | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    // Clear the dropdown anchor; the list view sets it while a timezone
    // edit is in flight
    app.autocomplete_anchor = None;

    list_view::render_list_view(frame, app, chunks[1]);
    format_row::render_format_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    if let Some(anchor) = app.autocomplete_anchor {
        autocomplete::render_autocomplete(frame, app, anchor);
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let bg = app.theme.background;
    let count = app.settings.clocks.len();
    let title = format!(
        " world clocks \u{2014} {} {}",
        count,
        if count == 1 { "entry" } else { "entries" }
    );
    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
