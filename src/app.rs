use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::{execute, style::ResetColor, terminal};
use tracing::debug;

use crate::diff;
use crate::error::SidediffError;
use crate::file::SourceFile;
use crate::highlighting::SyntaxHighlighter;
use crate::render::{self, FALLBACK_WIDTH};
use crate::theme::Theme;

pub struct AppConfig {
    pub original: PathBuf,
    pub modified: PathBuf,
    pub theme: Theme,
}

/// Application context: all state for one diff-and-render pass.
/// Create with [`App::new`], display once with [`App::run`]; dropping
/// the context resets terminal colors.
pub struct App {
    original: SourceFile,
    modified: SourceFile,
    highlighter: SyntaxHighlighter,
    theme: Theme,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, SidediffError> {
        let original = SourceFile::load(&config.original)?;
        let modified = SourceFile::load(&config.modified)?;
        let highlighter = SyntaxHighlighter::new(config.theme.is_dark());

        Ok(App {
            original,
            modified,
            highlighter,
            theme: config.theme,
        })
    }

    /// One synchronous pass: align, highlight, render to stdout.
    pub fn run(&self) -> Result<(), SidediffError> {
        let aligned = diff::align(&self.original.content, &self.modified.content);
        debug!(rows = aligned.rows.len(), "aligned diff computed");

        let left_grammar = self
            .highlighter
            .detect_grammar(&self.original.name(), self.original.first_line());
        let right_grammar = self
            .highlighter
            .detect_grammar(&self.modified.name(), self.modified.first_line());

        let left_spans = self
            .highlighter
            .highlight_column(&aligned.left_text(), &left_grammar);
        let right_spans = self
            .highlighter
            .highlight_column(&aligned.right_text(), &right_grammar);

        let total_width = terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        render_diff_with(
            &mut out,
            &aligned,
            &left_spans,
            &right_spans,
            &self.original.name(),
            &self.modified.name(),
            self.theme,
            total_width,
        )?;
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn render_diff_with(
    out: &mut impl Write,
    aligned: &diff::AlignedDiff,
    left_spans: &render::ColumnSpans,
    right_spans: &render::ColumnSpans,
    left_title: &str,
    right_title: &str,
    theme: Theme,
    total_width: usize,
) -> io::Result<()> {
    let colors = theme.colors();
    render::render_diff(
        out,
        aligned,
        left_spans,
        right_spans,
        left_title,
        right_title,
        &colors,
        total_width,
    )
}

impl Drop for App {
    fn drop(&mut self) {
        // Leave the terminal in its default colors whatever happened
        let _ = execute!(io::stdout(), ResetColor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "{}", content).unwrap();
        tmp
    }

    #[test]
    fn test_new_loads_both_files() {
        let a = write_temp("fn main() {}\n");
        let b = write_temp("fn main() { println!(); }\n");
        let app = App::new(AppConfig {
            original: a.path().to_path_buf(),
            modified: b.path().to_path_buf(),
            theme: Theme::Dark,
        })
        .unwrap();
        assert_eq!(app.original.content, "fn main() {}\n");
        assert_eq!(app.modified.content, "fn main() { println!(); }\n");
    }

    #[test]
    fn test_new_fails_on_missing_original() {
        let b = write_temp("x\n");
        let result = App::new(AppConfig {
            original: PathBuf::from("/no/such/path"),
            modified: b.path().to_path_buf(),
            theme: Theme::Dark,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_full_pass_renders_to_buffer() {
        let aligned = diff::align("a\nb", "a\nc");
        let highlighter = SyntaxHighlighter::new(true);
        let grammar = highlighter.detect_grammar("x.txt", "");
        let left = highlighter.highlight_column(&aligned.left_text(), &grammar);
        let right = highlighter.highlight_column(&aligned.right_text(), &grammar);

        let mut buf = Vec::new();
        render_diff_with(&mut buf, &aligned, &left, &right, "a.txt", "b.txt", Theme::Light, 100)
            .unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.contains("a.txt"));
        assert!(rendered.contains("b.txt"));
    }
}
