use crossterm::style::Color;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Dark,
    Light,
}

/// Terminal colors for the pane chrome. Syntax colors come from the
/// syntect theme; these cover everything around the highlighted spans.
#[derive(Clone, Copy)]
pub struct ColorScheme {
    pub bg: Color,
    pub line_number_fg: Color,
    /// Gutter marker for rows with no line on this side
    pub placeholder_fg: Color,
    pub added_bg: Color,
    pub removed_bg: Color,
    pub border_fg: Color,
    pub title_bg: Color,
    pub title_fg: Color,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Dark => ColorScheme {
                bg: Color::Rgb { r: 18, g: 22, b: 26 },
                line_number_fg: Color::Rgb {
                    r: 110,
                    g: 110,
                    b: 110,
                },
                placeholder_fg: Color::DarkGrey,
                // Pale tints so syntax colors stay readable on top
                added_bg: Color::Rgb { r: 28, g: 52, b: 30 },
                removed_bg: Color::Rgb { r: 56, g: 28, b: 28 },
                border_fg: Color::Rgb { r: 90, g: 95, b: 100 },
                title_bg: Color::DarkGrey,
                title_fg: Color::White,
            },
            Theme::Light => ColorScheme {
                bg: Color::Rgb {
                    r: 250,
                    g: 250,
                    b: 248,
                },
                line_number_fg: Color::Rgb {
                    r: 150,
                    g: 150,
                    b: 150,
                },
                placeholder_fg: Color::Grey,
                added_bg: Color::Rgb {
                    r: 214,
                    g: 240,
                    b: 214,
                },
                removed_bg: Color::Rgb {
                    r: 248,
                    g: 216,
                    b: 216,
                },
                border_fg: Color::Rgb {
                    r: 170,
                    g: 170,
                    b: 170,
                },
                title_bg: Color::Grey,
                title_fg: Color::Black,
            },
        }
    }
}
