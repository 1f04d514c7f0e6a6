use ratatui::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0B, 0x10, 0x21),
            text: Color::Rgb(0xA8, 0xB8, 0xE8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x3E, 0xC5, 0xF0),
            dim: Color::Rgb(0x5F, 0x6B, 0x96),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x4C, 0xE0, 0x96),
            selection_bg: Color::Rgb(0x1C, 0x2A, 0x4A),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x0B, 0x10, 0x21),
        }
    }
}
