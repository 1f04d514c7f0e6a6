use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let prefix = &s[..byte_offset];
    let mut last_start = 0;
    for (i, _) in prefix.grapheme_indices(true) {
        last_start = i;
    }
    Some(last_start)
}

/// Byte offset of the word boundary left of `pos` (skip spaces, then the word).
pub fn word_boundary_left(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    let mut i = pos;
    while i > 0 && bytes[i - 1] == b' ' {
        i -= 1;
    }
    while i > 0 && bytes[i - 1] != b' ' {
        i -= 1;
    }
    i
}

/// Byte offset of the word boundary right of `pos`.
pub fn word_boundary_right(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    let mut i = pos;
    while i < bytes.len() && bytes[i] != b' ' {
        i += 1;
    }
    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("London", 10), "London");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Europe/London", 7), "Europe\u{2026}");
    }

    #[test]
    fn truncate_width_one() {
        assert_eq!(truncate_to_width("abc", 1), "\u{2026}");
    }

    #[test]
    fn grapheme_boundaries_ascii() {
        assert_eq!(next_grapheme_boundary("ab", 0), Some(1));
        assert_eq!(next_grapheme_boundary("ab", 1), Some(2));
        assert_eq!(next_grapheme_boundary("ab", 2), None);
        assert_eq!(prev_grapheme_boundary("ab", 2), Some(1));
        assert_eq!(prev_grapheme_boundary("ab", 0), None);
    }

    #[test]
    fn grapheme_boundaries_multibyte() {
        // "é" is two bytes
        let s = "\u{e9}x";
        assert_eq!(next_grapheme_boundary(s, 0), Some(2));
        assert_eq!(prev_grapheme_boundary(s, 2), Some(0));
    }

    #[test]
    fn word_boundaries() {
        let s = "Europe London";
        assert_eq!(word_boundary_left(s, 13), 7);
        assert_eq!(word_boundary_left(s, 7), 0);
        assert_eq!(word_boundary_right(s, 0), 7);
        assert_eq!(word_boundary_right(s, 7), 13);
    }
}
