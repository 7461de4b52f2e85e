use std::path::Path;

use crossterm::style::Color as CrosstermColor;
use syntect::easy::HighlightLines;
use syntect::highlighting::{
    Color, FontStyle, ScopeSelectors, Style, StyleModifier, Theme, ThemeItem, ThemeSettings,
};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use tracing::debug;

/// How the lexical grammar for a file was chosen.
///
/// Detection is an explicit step with a tagged outcome: extension lookup
/// first, then syntect's first-line heuristic, then plain text. Plain text
/// is a real fallback, not a silent failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarChoice {
    ByExtension(String),
    ByFirstLine(String),
    PlainText,
}

impl GrammarChoice {
    /// Syntax definition name this choice resolves to.
    pub fn name(&self) -> &str {
        match self {
            GrammarChoice::ByExtension(name) | GrammarChoice::ByFirstLine(name) => name,
            GrammarChoice::PlainText => "Plain Text",
        }
    }
}

pub struct SyntaxHighlighter {
    pub syntax_set: SyntaxSet,
    pub theme: Theme,
}

impl SyntaxHighlighter {
    pub fn new(dark_mode: bool) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme = if dark_mode {
            create_dark_theme()
        } else {
            create_light_theme()
        };

        SyntaxHighlighter { syntax_set, theme }
    }

    /// Pick a grammar for `path`, consulting `first_line` when the
    /// extension is unknown (shebangs, modelines).
    pub fn detect_grammar(&self, path: &str, first_line: &str) -> GrammarChoice {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        if let Some(syntax) = self.syntax_set.find_syntax_by_extension(extension) {
            let choice = GrammarChoice::ByExtension(syntax.name.clone());
            debug!(path, grammar = %syntax.name, "grammar chosen by extension");
            return choice;
        }

        if let Some(syntax) = self.syntax_set.find_syntax_by_first_line(first_line) {
            let choice = GrammarChoice::ByFirstLine(syntax.name.clone());
            debug!(path, grammar = %syntax.name, "grammar chosen by first line");
            return choice;
        }

        debug!(path, "no grammar matched, falling back to plain text");
        GrammarChoice::PlainText
    }

    fn resolve(&self, grammar: &GrammarChoice) -> &SyntaxReference {
        match grammar {
            GrammarChoice::PlainText => self.syntax_set.find_syntax_plain_text(),
            other => self
                .syntax_set
                .find_syntax_by_name(other.name())
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text()),
        }
    }

    /// Highlight one column of text, line by line, keeping parser state
    /// across lines so multi-line constructs color correctly.
    ///
    /// Splits on '\n' (not `str::lines`) so trailing placeholder rows
    /// keep their slot in the output.
    pub fn highlight_column(&self, text: &str, grammar: &GrammarChoice) -> Vec<Vec<(Style, String)>> {
        let syntax = self.resolve(grammar);
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        text.split('\n')
            .map(|line| {
                highlighter
                    .highlight_line(line, &self.syntax_set)
                    .unwrap_or_else(|_| vec![(Style::default(), line)])
                    .into_iter()
                    .map(|(style, span)| (style, span.to_string()))
                    .collect()
            })
            .collect()
    }
}

fn create_dark_theme() -> Theme {
    let bg = Color { r: 18, g: 22, b: 26, a: 255 };
    let fg = Color { r: 212, g: 214, b: 216, a: 255 };
    let comment = Color { r: 110, g: 120, b: 130, a: 255 };
    let string = Color { r: 120, g: 180, b: 110, a: 255 };
    let constant = Color { r: 200, g: 140, b: 220, a: 255 };
    let keyword = Color { r: 220, g: 130, b: 100, a: 255 };
    let definition = Color { r: 120, g: 170, b: 240, a: 255 };

    build_theme("Sidediff Dark", bg, fg, comment, string, constant, keyword, definition)
}

fn create_light_theme() -> Theme {
    let bg = Color { r: 250, g: 250, b: 248, a: 255 };
    let fg = Color { r: 30, g: 30, b: 30, a: 255 };
    let comment = Color { r: 130, g: 140, b: 145, a: 255 };
    let string = Color { r: 50, g: 120, b: 40, a: 255 };
    let constant = Color { r: 130, g: 60, b: 160, a: 255 };
    let keyword = Color { r: 170, g: 70, b: 40, a: 255 };
    let definition = Color { r: 40, g: 80, b: 180, a: 255 };

    build_theme("Sidediff Light", bg, fg, comment, string, constant, keyword, definition)
}

#[allow(clippy::too_many_arguments)]
fn build_theme(
    name: &str,
    bg: Color,
    fg: Color,
    comment: Color,
    string: Color,
    constant: Color,
    keyword: Color,
    definition: Color,
) -> Theme {
    let mut theme = Theme {
        name: Some(name.to_string()),
        author: None,
        settings: ThemeSettings::default(),
        scopes: Vec::new(),
    };

    theme.settings.background = Some(bg);
    theme.settings.foreground = Some(fg);

    let mut add_scope = |selector: &str, color: Color, font_style: FontStyle| {
        if let Ok(scope) = ScopeSelectors::from_str(selector) {
            theme.scopes.push(ThemeItem {
                scope,
                style: StyleModifier {
                    foreground: Some(color),
                    background: None,
                    font_style: Some(font_style),
                },
            });
        }
    };

    add_scope("comment", comment, FontStyle::default());
    add_scope("string", string, FontStyle::default());
    add_scope(
        "constant.numeric, constant.language, constant.character",
        constant,
        FontStyle::default(),
    );
    add_scope("keyword, storage.modifier, storage.type", keyword, FontStyle::default());
    add_scope(
        "entity.name, entity.name.function, entity.name.type",
        definition,
        FontStyle::default(),
    );
    add_scope("markup.heading, markup.bold", fg, FontStyle::BOLD);

    theme
}

use std::str::FromStr;

// syntect and crossterm color types are foreign to each other, so a
// plain conversion function instead of From/Into.
pub fn to_crossterm_color(c: Color) -> CrosstermColor {
    CrosstermColor::Rgb { r: c.r, g: c.g, b: c.b }
}
