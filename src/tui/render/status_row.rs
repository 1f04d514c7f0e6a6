use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref notice) = app.notice {
                Line::from(Span::styled(
                    format!(" {}", notice),
                    Style::default().fg(app.theme.green).bg(bg),
                ))
            } else if let Some(ref pattern) = app.last_search {
                with_hint(
                    vec![Span::styled(
                        format!("/{}", pattern),
                        Style::default().fg(app.theme.dim).bg(bg),
                    )],
                    "n/N next/prev",
                    app,
                    width,
                )
            } else {
                with_hint(
                    Vec::new(),
                    "a add  x remove  m move  e label  t zone  f format  / search  ? help  q quit",
                    app,
                    width,
                )
            }
        }
        Mode::Edit => {
            let what = match app.edit_target {
                Some(EditTarget::Label { .. }) => "label",
                Some(EditTarget::Timezone { .. }) => "timezone",
                Some(EditTarget::TimeFormat) => "time format",
                None => "",
            };
            with_hint(
                vec![Span::styled(
                    format!(" editing {}", what),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                )],
                "Enter commit  Tab complete  Esc cancel",
                app,
                width,
            )
        }
        Mode::Move => with_hint(
            vec![Span::styled(
                " move",
                Style::default().fg(app.theme.yellow).bg(bg),
            )],
            "j/k shift  g/G top/bottom  Enter confirm  Esc revert",
            app,
            width,
        ),
        Mode::Confirm => Line::from(Span::styled(
            format!(
                " clear all {} clocks? y/n",
                app.settings.clocks.len()
            ),
            Style::default().fg(app.theme.yellow).bg(bg),
        )),
        Mode::Search => {
            let spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            with_hint(spans, "Enter search  Esc cancel", app, width)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Left-aligned content with a dim right-aligned key hint.
fn with_hint<'a>(mut spans: Vec<Span<'a>>, hint: &'a str, app: &App, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crate::model::entry::ClockEntry;
    use crate::model::settings::ClockSettings;
    use crate::tui::app::{App, Mode};
    use crate::tui::render::test_helpers::render_app_to_string;

    fn sample_app() -> App {
        let settings = ClockSettings {
            clocks: vec![ClockEntry::new("London", "Europe/London")],
            time_format: "%H:%M".to_string(),
        };
        App::new(settings, Vec::new())
    }

    #[test]
    fn navigate_mode_shows_key_hints() {
        let mut app = sample_app();
        let text = render_app_to_string(&mut app, 100, 10);
        assert!(text.contains("a add"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn confirm_mode_asks_before_clearing() {
        let mut app = sample_app();
        app.mode = Mode::Confirm;
        let text = render_app_to_string(&mut app, 100, 10);
        assert!(text.contains("clear all 1 clocks? y/n"));
    }

    #[test]
    fn search_mode_shows_prompt() {
        let mut app = sample_app();
        app.mode = Mode::Search;
        app.search_input = "tok".to_string();
        let text = render_app_to_string(&mut app, 100, 10);
        assert!(text.contains("/tok"));
    }

    #[test]
    fn notice_replaces_hints() {
        let mut app = sample_app();
        app.notice = Some("removed London".to_string());
        let text = render_app_to_string(&mut app, 100, 10);
        assert!(text.contains("removed London"));
    }
}
