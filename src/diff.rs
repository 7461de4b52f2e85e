//! Line-level diff alignment: two texts in, two equal-length columns out.

use similar::{ChangeTag, TextDiff};

/// Origin of an aligned row, carried from the diff algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Unchanged,
    Added,
    Removed,
}

/// One aligned row of the side-by-side view.
///
/// Exactly one of three shapes: both sides present (`Unchanged`),
/// left only (`Removed`), right only (`Added`). Line numbers are
/// 1-indexed per side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    /// Original-side line: (line_number, content)
    pub left: Option<(usize, String)>,
    /// Modified-side line: (line_number, content)
    pub right: Option<(usize, String)>,
    pub kind: RowKind,
}

/// Result of aligning two texts. Row order follows the diff change stream.
#[derive(Debug, Clone)]
pub struct AlignedDiff {
    pub rows: Vec<DiffRow>,
}

impl AlignedDiff {
    /// Left column joined by newlines, with empty placeholders for added rows.
    pub fn left_text(&self) -> String {
        self.column_text(|row| row.left.as_ref())
    }

    /// Right column joined by newlines, with empty placeholders for removed rows.
    pub fn right_text(&self) -> String {
        self.column_text(|row| row.right.as_ref())
    }

    fn column_text<'a, F>(&'a self, side: F) -> String
    where
        F: Fn(&'a DiffRow) -> Option<&'a (usize, String)>,
    {
        self.rows
            .iter()
            .map(|row| side(row).map(|(_, content)| content.as_str()).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Align `original` against `modified` line by line.
///
/// Context lines land on both sides, deletions on the left only,
/// insertions on the right only, so both columns always have the
/// same row count.
pub fn align(original: &str, modified: &str) -> AlignedDiff {
    let original_lines: Vec<&str> = original.lines().collect();
    let modified_lines: Vec<&str> = modified.lines().collect();

    let diff = TextDiff::from_slices(&original_lines, &modified_lines);

    let mut rows = Vec::new();
    let mut left_line_num = 0usize;
    let mut right_line_num = 0usize;

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => {
                left_line_num += 1;
                right_line_num += 1;
                rows.push(DiffRow {
                    left: Some((left_line_num, change.value().to_string())),
                    right: Some((right_line_num, change.value().to_string())),
                    kind: RowKind::Unchanged,
                });
            }
            ChangeTag::Delete => {
                left_line_num += 1;
                rows.push(DiffRow {
                    left: Some((left_line_num, change.value().to_string())),
                    right: None,
                    kind: RowKind::Removed,
                });
            }
            ChangeTag::Insert => {
                right_line_num += 1;
                rows.push(DiffRow {
                    left: None,
                    right: Some((right_line_num, change.value().to_string())),
                    kind: RowKind::Added,
                });
            }
        }
    }

    AlignedDiff { rows }
}


#[cfg(test)]
mod column_tests {
    use super::*;

    #[test]
    fn test_columns_have_equal_line_counts() {
        let cases = [
            ("a\nb\nc", "a\nx\nc"),
            ("same", "same"),
            ("a\nb\nc\nd", "c\nd\ne"),
            ("", "a\nb"),
            ("a\nb", ""),
        ];
        for (original, modified) in cases {
            let diff = align(original, modified);
            let left = diff.left_text();
            let right = diff.right_text();
            // split('\n') keeps trailing placeholder rows that lines() would drop
            assert_eq!(
                left.split('\n').count(),
                right.split('\n').count(),
                "column counts differ for {:?} vs {:?}",
                original,
                modified
            );
        }
    }

    #[test]
    fn test_column_placeholders_are_empty() {
        let diff = align("a\nb", "a");
        assert_eq!(diff.left_text(), "a\nb");
        assert_eq!(diff.right_text(), "a\n");
    }

    #[test]
    fn test_columns_identical_for_identical_input() {
        let diff = align("x\ny", "x\ny");
        assert_eq!(diff.left_text(), diff.right_text());
        assert_eq!(diff.left_text(), "x\ny");
    }
}
