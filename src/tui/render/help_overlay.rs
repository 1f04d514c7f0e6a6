use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const KEYS: &[(&str, &str)] = &[
    ("j / k", "select row"),
    ("a", "add a clock"),
    ("x", "remove the selected clock"),
    ("C", "clear all clocks"),
    ("e / Enter", "edit the label"),
    ("t", "edit the timezone (Tab completes)"),
    ("f", "edit the time format"),
    ("m", "move the selected row"),
    ("J / K", "quick swap down / up"),
    ("/", "search, then n / N to cycle"),
    ("q", "save and quit"),
];

/// Render the help overlay centered over the whole screen
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let key_width = KEYS.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        " keys",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ))];
    for (key, what) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:>key_width$}  ", key),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
            Span::styled(*what, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }

    let popup_w = 48u16.min(area.width.saturating_sub(2));
    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
