use ratatui::style::Style;
use ratatui::text::Span;
use regex::Regex;

/// Push `text` as spans, styling regex matches with `match_style`.
pub fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &'a str,
    re: Option<&Regex>,
    base_style: Style,
    match_style: Style,
) {
    let re = match re {
        Some(re) => re,
        None => {
            spans.push(Span::styled(text, base_style));
            return;
        }
    };
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            spans.push(Span::styled(&text[last..m.start()], base_style));
        }
        spans.push(Span::styled(&text[m.range()], match_style));
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span::styled(&text[last..], base_style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_regex_is_one_span() {
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "abc", None, Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn matches_split_the_text() {
        let re = Regex::new("(?i)lon").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(
            &mut spans,
            "Europe/London",
            Some(&re),
            Style::default(),
            Style::default(),
        );
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["Europe/", "Lon", "don"]);
    }
}
