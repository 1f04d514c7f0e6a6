use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode;

use super::helpers::push_highlighted_spans;

/// Glyph marking the edit cursor position
const CURSOR_GLYPH: &str = "\u{258C}";

/// Render the clock list content area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.settings.clocks.is_empty() {
        let empty = Paragraph::new("  no clocks \u{2014} press a to add one")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    app.clamp_cursor();
    let visible_height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let label_width = app
        .settings
        .clocks
        .iter()
        .map(|e| unicode::display_width(&e.label))
        .max()
        .unwrap_or(0)
        .clamp(8, 24);

    let re = app.active_search_re();
    let mut anchor = None;

    let end = (app.scroll_offset + visible_height).min(app.settings.clocks.len());
    for (vis_row, idx) in (app.scroll_offset..end).enumerate() {
        let entry = &app.settings.clocks[idx];
        let selected = idx == app.cursor;
        let moving = selected && app.mode == Mode::Move;
        let row_area = Rect::new(area.x, area.y + vis_row as u16, area.width, 1);

        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let base = Style::default()
            .fg(if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        let match_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);

        let prefix = if moving {
            " \u{21C5} "
        } else if selected {
            " \u{25B8} "
        } else {
            "   "
        };
        let prefix_style = if moving {
            Style::default().fg(app.theme.yellow).bg(row_bg)
        } else {
            Style::default().fg(app.theme.highlight).bg(row_bg)
        };

        let editing_label = app.mode == Mode::Edit
            && matches!(app.edit_target, Some(EditTarget::Label { row }) if row == idx);
        let editing_timezone = app.mode == Mode::Edit
            && matches!(app.edit_target, Some(EditTarget::Timezone { row }) if row == idx);

        let mut spans: Vec<Span> = vec![Span::styled(prefix, prefix_style)];

        // Label column, padded to label_width display cells
        if editing_label {
            push_edit_buffer_spans(&mut spans, app, base);
            pad_to(&mut spans, unicode::display_width(&app.edit_buffer), label_width, row_bg);
        } else if unicode::display_width(&entry.label) > label_width {
            // labels wider than the column are truncated and skip match highlighting
            let label = unicode::truncate_to_width(&entry.label, label_width);
            spans.push(Span::styled(label, base));
        } else {
            push_highlighted_spans(&mut spans, &entry.label, re.as_ref(), base, match_style);
            pad_to(&mut spans, unicode::display_width(&entry.label), label_width, row_bg);
        }
        spans.push(Span::styled("  ", Style::default().bg(row_bg)));

        // Timezone column
        if editing_timezone {
            let tz_x = area.x + 3 + label_width as u16 + 2;
            anchor = Some(Rect::new(
                tz_x,
                row_area.y,
                area.width.saturating_sub(tz_x - area.x),
                1,
            ));
            push_edit_buffer_spans(&mut spans, app, base);
        } else if entry.timezone.is_empty() {
            spans.push(Span::styled(
                "(no timezone)",
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        } else {
            push_highlighted_spans(&mut spans, &entry.timezone, re.as_ref(), base, match_style);
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(row_bg));
        frame.render_widget(paragraph, row_area);
    }

    app.autocomplete_anchor = anchor;
}

/// The edit buffer with the cursor glyph spliced in at the cursor offset.
fn push_edit_buffer_spans<'a>(spans: &mut Vec<Span<'a>>, app: &'a App, base: Style) {
    let (before, after) = app.edit_buffer.split_at(app.edit_cursor);
    let edit_style = base.add_modifier(Modifier::UNDERLINED);
    if !before.is_empty() {
        spans.push(Span::styled(before, edit_style));
    }
    spans.push(Span::styled(
        CURSOR_GLYPH,
        Style::default().fg(app.theme.highlight).patch(base),
    ));
    if !after.is_empty() {
        spans.push(Span::styled(after, edit_style));
    }
}

fn pad_to(spans: &mut Vec<Span>, used: usize, width: usize, bg: ratatui::style::Color) {
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
}
