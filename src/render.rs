//! Side-by-side rendering of an aligned diff to a terminal-style writer.

use crate::diff::{AlignedDiff, DiffRow, RowKind};
use crate::highlighting::to_crossterm_color;
use crate::theme::ColorScheme;
use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};
use syntect::highlighting::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width used when the output is not a terminal (pipes, tests).
pub const FALLBACK_WIDTH: usize = 160;

/// Highlighted spans for one column, one entry per diff row.
pub type ColumnSpans = Vec<Vec<(Style, String)>>;

/// Column positions computed once per render.
struct Layout {
    left_gutter: usize,
    right_gutter: usize,
    left_content: usize,
    right_content: usize,
}

impl Layout {
    fn compute(diff: &AlignedDiff, total_width: usize) -> Layout {
        let left_gutter = gutter_width(diff, |row| row.left.as_ref());
        let right_gutter = gutter_width(diff, |row| row.right.as_ref());

        // Three border columns: left edge, separator, right edge
        let content_total = total_width.saturating_sub(3);
        let left_pane = content_total / 2;
        let right_pane = content_total - left_pane;

        Layout {
            left_gutter,
            right_gutter,
            left_content: left_pane.saturating_sub(left_gutter),
            right_content: right_pane.saturating_sub(right_gutter),
        }
    }

    fn left_pane(&self) -> usize {
        self.left_gutter + self.left_content
    }

    fn right_pane(&self) -> usize {
        self.right_gutter + self.right_content
    }
}

fn gutter_width<'a, F>(diff: &'a AlignedDiff, side: F) -> usize
where
    F: Fn(&'a DiffRow) -> Option<&'a (usize, String)>,
{
    let max_line = diff
        .rows
        .iter()
        .filter_map(|row| side(row).map(|(n, _)| *n))
        .max()
        .unwrap_or(1);
    max_line.to_string().len() + 2
}

/// Render the whole two-pane view: title bar, one row per `DiffRow`,
/// bottom border. Output is sequential, no cursor addressing, so it
/// works on a scrollback terminal and in tests against a buffer.
pub fn render_diff(
    out: &mut impl Write,
    diff: &AlignedDiff,
    left_spans: &ColumnSpans,
    right_spans: &ColumnSpans,
    left_title: &str,
    right_title: &str,
    colors: &ColorScheme,
    total_width: usize,
) -> io::Result<()> {
    let layout = Layout::compute(diff, total_width);

    render_title_bar(out, left_title, right_title, &layout, colors)?;

    for (idx, row) in diff.rows.iter().enumerate() {
        queue!(out, SetForegroundColor(colors.border_fg), Print("│"), ResetColor)?;
        render_pane_row(
            out,
            row.left.as_ref(),
            row.kind,
            left_spans.get(idx),
            layout.left_gutter,
            layout.left_content,
            colors,
        )?;
        queue!(out, SetForegroundColor(colors.border_fg), Print("│"), ResetColor)?;
        render_pane_row(
            out,
            row.right.as_ref(),
            row.kind,
            right_spans.get(idx),
            layout.right_gutter,
            layout.right_content,
            colors,
        )?;
        queue!(out, SetForegroundColor(colors.border_fg), Print("│"), ResetColor)?;
        queue!(out, Print("\n"))?;
    }

    render_bottom_border(out, &layout, colors)?;
    out.flush()
}

fn render_title_bar(
    out: &mut impl Write,
    left_title: &str,
    right_title: &str,
    layout: &Layout,
    colors: &ColorScheme,
) -> io::Result<()> {
    queue!(out, SetForegroundColor(colors.border_fg), Print("┌"), ResetColor)?;
    render_title_section(out, left_title, layout.left_pane(), colors)?;
    queue!(out, SetForegroundColor(colors.border_fg), Print("┬"), ResetColor)?;
    render_title_section(out, right_title, layout.right_pane(), colors)?;
    queue!(out, SetForegroundColor(colors.border_fg), Print("┐"), ResetColor)?;
    queue!(out, Print("\n"))?;
    Ok(())
}

fn render_title_section(
    out: &mut impl Write,
    title: &str,
    section_width: usize,
    colors: &ColorScheme,
) -> io::Result<()> {
    let padded = format!(" {} ", title);
    let shown = truncate_to_width(&padded, section_width);
    let fill = "─".repeat(section_width.saturating_sub(shown.width()));
    queue!(
        out,
        SetBackgroundColor(colors.title_bg),
        SetForegroundColor(colors.title_fg),
        Print(&shown),
        ResetColor,
        SetForegroundColor(colors.border_fg),
        Print(&fill),
        ResetColor,
    )?;
    Ok(())
}

fn render_bottom_border(out: &mut impl Write, layout: &Layout, colors: &ColorScheme) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(colors.border_fg),
        Print("└"),
        Print("─".repeat(layout.left_pane())),
        Print("┴"),
        Print("─".repeat(layout.right_pane())),
        Print("┘"),
        ResetColor,
        Print("\n"),
    )?;
    Ok(())
}

/// One pane cell of one row: gutter plus highlighted, tinted content.
/// Rows absent on this side get a `~` gutter and a blank cell.
fn render_pane_row(
    out: &mut impl Write,
    line: Option<&(usize, String)>,
    kind: RowKind,
    spans: Option<&Vec<(Style, String)>>,
    gutter_width: usize,
    content_width: usize,
    colors: &ColorScheme,
) -> io::Result<()> {
    match line {
        Some((line_num, _)) => {
            let gutter = format!("{:>width$} ", line_num, width = gutter_width - 1);
            queue!(
                out,
                SetBackgroundColor(colors.bg),
                SetForegroundColor(colors.line_number_fg),
                Print(&gutter),
            )?;

            // Row tint comes from the aligner's row kind, never from the
            // text itself. A populated side on an Added row is always the
            // right pane, on a Removed row always the left.
            let line_bg = match kind {
                RowKind::Added => colors.added_bg,
                RowKind::Removed => colors.removed_bg,
                RowKind::Unchanged => colors.bg,
            };

            let mut used = 0;
            if let Some(spans) = spans {
                for (style, text) in spans {
                    if used >= content_width {
                        break;
                    }
                    let remaining = content_width - used;
                    let shown = truncate_to_width(text, remaining);
                    queue!(
                        out,
                        SetAttribute(Attribute::Reset),
                        SetBackgroundColor(line_bg),
                        SetForegroundColor(to_crossterm_color(style.foreground)),
                        Print(&shown),
                    )?;
                    used += shown.width();
                }
            }

            let padding = content_width.saturating_sub(used);
            if padding > 0 {
                queue!(
                    out,
                    SetAttribute(Attribute::Reset),
                    SetBackgroundColor(line_bg),
                    Print(format!("{:width$}", "", width = padding)),
                )?;
            }
            queue!(out, ResetColor)?;
        }
        None => {
            let gutter = format!("{:>width$} ", "~", width = gutter_width - 1);
            queue!(
                out,
                SetBackgroundColor(colors.bg),
                SetForegroundColor(colors.placeholder_fg),
                Print(&gutter),
                Print(format!("{:width$}", "", width = content_width)),
                ResetColor,
            )?;
        }
    }
    Ok(())
}

/// Truncate to a visual width without splitting wide characters.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if current + w > max_width {
            break;
        }
        result.push(ch);
        current += w;
    }
    result
}

#[cfg(test)]
mod truncate_tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_never_splits_wide_chars() {
        // "日" is two columns wide; width 3 fits one of them, not one and a half
        assert_eq!(truncate_to_width("日本", 3), "日");
        assert_eq!(truncate_to_width("日本", 4), "日本");
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::diff::align;
    use crate::highlighting::{GrammarChoice, SyntaxHighlighter};
    use crate::theme::Theme;

    fn render_to_string(original: &str, modified: &str) -> (AlignedDiff, String) {
        let diff = align(original, modified);
        let highlighter = SyntaxHighlighter::new(true);
        let left = highlighter.highlight_column(&diff.left_text(), &GrammarChoice::PlainText);
        let right = highlighter.highlight_column(&diff.right_text(), &GrammarChoice::PlainText);
        let colors = Theme::Dark.colors();
        let mut buf = Vec::new();
        render_diff(&mut buf, &diff, &left, &right, "old", "new", &colors, 80).unwrap();
        (diff, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_one_output_row_per_diff_row() {
        let (diff, rendered) = render_to_string("a\nb\nc", "a\nx\nc");
        let newlines = rendered.matches('\n').count();
        // title bar + rows + bottom border
        assert_eq!(newlines, diff.rows.len() + 2);
    }

    #[test]
    fn test_placeholder_rows_get_tilde_gutter() {
        let (_, rendered) = render_to_string("a\nb", "a");
        assert!(rendered.contains('~'));
    }

    #[test]
    fn test_identical_inputs_have_no_placeholders() {
        let (_, rendered) = render_to_string("a\nb", "a\nb");
        assert!(!rendered.contains('~'));
    }

    #[test]
    fn test_titles_appear_in_title_bar() {
        let (_, rendered) = render_to_string("a", "a");
        let first_line = rendered.lines().next().unwrap();
        assert!(first_line.contains("old"));
        assert!(first_line.contains("new"));
    }

    #[test]
    fn test_content_appears_in_output() {
        let (_, rendered) = render_to_string("alpha\nbeta", "alpha\ngamma");
        assert!(rendered.contains("alpha"));
        assert!(rendered.contains("beta"));
        assert!(rendered.contains("gamma"));
    }

    #[test]
    fn test_line_numbers_rendered_per_side() {
        let (_, rendered) = render_to_string("a\nb\nc", "a\nb\nc");
        assert!(rendered.contains('1'));
        assert!(rendered.contains('3'));
    }
}
