use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};

/// Render the current local time through a strftime format string.
/// Returns None when the format contains an invalid specifier.
pub fn format_preview(fmt: &str) -> Option<String> {
    let items: Vec<Item> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    Some(Local::now().format_with_items(items.into_iter()).to_string())
}

/// Render the time-format row between the list and the status row
pub fn render_format_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing =
        app.mode == Mode::Edit && matches!(app.edit_target, Some(EditTarget::TimeFormat));

    let mut spans = vec![Span::styled(
        " format ",
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    if editing {
        let (before, after) = app.edit_buffer.split_at(app.edit_cursor);
        let style = Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::UNDERLINED);
        spans.push(Span::styled(before, style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after, style));
    } else {
        spans.push(Span::styled(
            app.settings.time_format.clone(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let shown = if editing {
        &app.edit_buffer
    } else {
        &app.settings.time_format
    };
    match format_preview(shown) {
        Some(now) => {
            spans.push(Span::styled(
                format!("   now {}", now),
                Style::default().fg(app.theme.green).bg(bg),
            ));
        }
        None => {
            spans.push(Span::styled(
                "   invalid format",
                Style::default().fg(app.theme.yellow).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_renders_hours_and_minutes() {
        let out = format_preview("%H:%M").unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(out.as_bytes()[2], b':');
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(format_preview("oclock").as_deref(), Some("oclock"));
    }

    #[test]
    fn trailing_percent_is_invalid() {
        assert!(format_preview("%H:%M %").is_none());
    }
}
