//! Traceback and three-line rendering of a local alignment.
//!
//! The traceback starts at the best-scoring cell and follows the first
//! recorded predecessor of each cell until it reaches a cell without one.
//! Each step produces one [`Column`]:
//!
//! ```text
//! top      ABx CD-
//! markers  ||　|| 
//! bottom   AB漢CDE
//! ```
//!
//! Columns are gathered right to left and reversed once the boundary is hit.
//! Inside a column the narrower glyph is padded with a trailing space so that
//! all three lines keep the same display width.

pub mod glyphs;

use std::fmt;

use crate::model::{Alignment, Direction};
use crate::width::DisplayWidth;

/// How the two sequences relate in one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Same code point on both lines.
    Match,
    /// Different code points on both lines.
    Mismatch,
    /// Gap on the top line, code point from the second sequence below.
    GapTop,
    /// Code point from the first sequence above, gap on the bottom line.
    GapBottom,
}

/// A glyph plus whether it needs a trailing space to fill its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub padded: bool,
}

impl Glyph {
    fn new(ch: char) -> Self {
        Self { ch, padded: false }
    }

    fn padded(ch: char) -> Self {
        Self { ch, padded: true }
    }

    fn write_to(self, out: &mut String) {
        out.push(self.ch);
        if self.padded {
            out.push(' ');
        }
    }
}

/// One aligned column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub kind: ColumnKind,
    pub top: Glyph,
    pub marker: Glyph,
    pub bottom: Glyph,
    /// Display width of the column (1 or 2)
    pub width: usize,
}

impl Column {
    /// Builds the column for one traceback step ending at `(x, y)`.
    fn at<W: DisplayWidth>(
        alignment: &Alignment<'_>,
        direction: Direction,
        x: usize,
        y: usize,
        width: &W,
    ) -> Self {
        match direction {
            Direction::Diag => {
                let a = alignment.seq1()[x - 1];
                let b = alignment.seq2()[y - 1];
                let (wa, wb) = (width.width(a), width.width(b));
                let glyphs = glyphs::select(width.is_wide(a) || width.is_wide(b));

                let (kind, marker) = if a == b {
                    (ColumnKind::Match, glyphs.matched)
                } else {
                    (ColumnKind::Mismatch, glyphs.blank)
                };

                Self {
                    kind,
                    top: if wa < wb { Glyph::padded(a) } else { Glyph::new(a) },
                    marker: Glyph::new(marker),
                    bottom: if wb < wa { Glyph::padded(b) } else { Glyph::new(b) },
                    width: wa.max(wb),
                }
            }
            Direction::Up => {
                let a = alignment.seq1()[x - 1];
                let w = width.width(a);
                let glyphs = glyphs::select(width.is_wide(a));
                Self {
                    kind: ColumnKind::GapBottom,
                    top: Glyph::new(a),
                    marker: Glyph::new(glyphs.blank),
                    bottom: Glyph::new(glyphs.gap),
                    width: w,
                }
            }
            Direction::Left => {
                let b = alignment.seq2()[y - 1];
                let w = width.width(b);
                let glyphs = glyphs::select(width.is_wide(b));
                Self {
                    kind: ColumnKind::GapTop,
                    top: Glyph::new(glyphs.gap),
                    marker: Glyph::new(glyphs.blank),
                    bottom: Glyph::new(b),
                    width: w,
                }
            }
        }
    }

    /// The column's top, marker and bottom cells as strings.
    pub fn cells(&self) -> [String; 3] {
        [self.top, self.marker, self.bottom].map(|glyph| {
            let mut out = String::with_capacity(2);
            glyph.write_to(&mut out);
            out
        })
    }
}

/// The rendered alignment: three lines of equal display width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub top: String,
    pub markers: String,
    pub bottom: String,
    columns: Vec<Column>,
}

impl Rendered {
    fn from_columns(columns: Vec<Column>) -> Self {
        let mut top = String::new();
        let mut markers = String::new();
        let mut bottom = String::new();

        for column in &columns {
            column.top.write_to(&mut top);
            column.marker.write_to(&mut markers);
            column.bottom.write_to(&mut bottom);
        }

        Self {
            top,
            markers,
            bottom,
            columns,
        }
    }

    /// Lines in print order: top, markers, bottom.
    pub fn lines(&self) -> [&str; 3] {
        [&self.top, &self.markers, &self.bottom]
    }

    /// Columns in reading order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Display width shared by the three lines.
    pub fn display_width(&self) -> usize {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Returns true when nothing aligned.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.top)?;
        writeln!(f, "{}", self.markers)?;
        write!(f, "{}", self.bottom)
    }
}

/// Walks the traceback from the best cell and renders the aligned region.
///
/// Only the first recorded predecessor of each cell is followed, so the
/// output is deterministic even when several optimal paths exist.
///
/// # Examples
///
/// ```
/// use swalign::engine::smith_waterman;
/// use swalign::model::Sequence;
/// use swalign::render::render;
/// use swalign::scoring::DefaultScore;
/// use swalign::width::UnicodeWidth;
///
/// let s1 = Sequence::from("ABCD");
/// let s2 = Sequence::from("ABXD");
/// let alignment = smith_waterman(&DefaultScore, &s1, &s2);
/// let rendered = render(&alignment, &UnicodeWidth::new());
/// assert_eq!(rendered.lines(), ["ABCD", "|| |", "ABXD"]);
/// ```
pub fn render<W: DisplayWidth>(alignment: &Alignment<'_>, width: &W) -> Rendered {
    let matrix = alignment.matrix();
    let mut pos = alignment.best();
    let mut columns = Vec::new();

    while let Some(direction) = matrix[pos].predecessors.first() {
        columns.push(Column::at(alignment, direction, pos.x, pos.y, width));
        pos = pos.step(direction);
    }

    log::trace!(
        "Traceback of {} columns stopped at ({}, {})",
        columns.len(),
        pos.x,
        pos.y
    );

    columns.reverse();
    Rendered::from_columns(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::smith_waterman;
    use crate::model::Sequence;
    use crate::scoring::DefaultScore;
    use crate::width::UnicodeWidth;

    fn render_pair(a: &str, b: &str) -> Rendered {
        let s1 = Sequence::from(a);
        let s2 = Sequence::from(b);
        let alignment = smith_waterman(&DefaultScore, &s1, &s2);
        render(&alignment, &UnicodeWidth::new())
    }

    fn line_width(line: &str) -> usize {
        let w = UnicodeWidth::new();
        line.chars().map(|c| w.width(c)).sum()
    }

    #[test]
    fn test_identical() {
        let rendered = render_pair("ABC", "ABC");
        assert_eq!(rendered.lines(), ["ABC", "|||", "ABC"]);
        assert!(rendered
            .columns()
            .iter()
            .all(|c| c.kind == ColumnKind::Match));
    }

    #[test]
    fn test_nothing_shared() {
        let rendered = render_pair("ABC", "XYZ");
        assert_eq!(rendered.lines(), ["", "", ""]);
        assert!(rendered.is_empty());
        assert_eq!(rendered.display_width(), 0);
    }

    #[test]
    fn test_mismatch_blank_marker() {
        let rendered = render_pair("ABCD", "ABXD");
        assert_eq!(rendered.lines(), ["ABCD", "|| |", "ABXD"]);
        assert_eq!(rendered.columns()[2].kind, ColumnKind::Mismatch);
    }

    #[test]
    fn test_gap_in_bottom() {
        let rendered = render_pair("ABCDEF", "ABCEF");
        assert_eq!(rendered.lines(), ["ABCDEF", "||| ||", "ABC-EF"]);
        assert_eq!(rendered.columns()[3].kind, ColumnKind::GapBottom);
    }

    #[test]
    fn test_gap_in_top() {
        let rendered = render_pair("ABCEF", "ABCDEF");
        assert_eq!(rendered.lines(), ["ABC-EF", "||| ||", "ABCDEF"]);
        assert_eq!(rendered.columns()[3].kind, ColumnKind::GapTop);
    }

    #[test]
    fn test_wide_match() {
        let rendered = render_pair("漢字", "漢字");
        assert_eq!(rendered.top, "漢字");
        assert_eq!(rendered.markers, "\u{FF5C}\u{FF5C}");
        assert_eq!(rendered.bottom, "漢字");
        assert_eq!(rendered.display_width(), 4);
    }

    #[test]
    fn test_wide_gap_glyph() {
        let rendered = render_pair("漢字かな", "漢字な");
        assert_eq!(rendered.top, "漢字かな");
        assert_eq!(rendered.markers, "\u{FF5C}\u{FF5C}\u{3000}\u{FF5C}");
        assert_eq!(rendered.bottom, "漢字\u{FF0D}な");
    }

    #[test]
    fn test_wide_gap_glyph_on_top_line() {
        let rendered = render_pair("漢字な", "漢字かな");
        assert_eq!(rendered.top, "漢字\u{FF0D}な");
        assert_eq!(rendered.markers, "\u{FF5C}\u{FF5C}\u{3000}\u{FF5C}");
        assert_eq!(rendered.bottom, "漢字かな");

        let column = rendered.columns()[2];
        assert_eq!(column.kind, ColumnKind::GapTop);
        assert_eq!(column.width, 2);
    }

    #[test]
    fn test_mixed_width_padding_on_bottom_line() {
        let rendered = render_pair("AB漢CD", "ABxCD");
        assert_eq!(rendered.top, "AB漢CD");
        assert_eq!(rendered.markers, "||\u{3000}||");
        assert_eq!(rendered.bottom, "ABx CD");

        let column = rendered.columns()[2];
        assert!(!column.top.padded);
        assert!(column.bottom.padded);
        assert_eq!(column.cells()[2], "x ");
    }

    /// Every code point two columns wide.
    struct AllWide;

    impl DisplayWidth for AllWide {
        fn width(&self, _c: char) -> usize {
            2
        }
    }

    #[test]
    fn test_custom_width_function() {
        let s1 = Sequence::from("ABCDEF");
        let s2 = Sequence::from("ABCEF");
        let alignment = smith_waterman(&DefaultScore, &s1, &s2);
        let rendered = render(&alignment, &AllWide);

        assert_eq!(rendered.top, "ABCDEF");
        assert_eq!(rendered.markers, "\u{FF5C}\u{FF5C}\u{FF5C}\u{3000}\u{FF5C}\u{FF5C}");
        assert_eq!(rendered.bottom, "ABC\u{FF0D}EF");
        assert_eq!(rendered.display_width(), 12);
        assert!(rendered.columns().iter().all(|c| c.width == 2));
        assert!(rendered
            .columns()
            .iter()
            .all(|c| !c.top.padded && !c.bottom.padded));
    }

    #[test]
    fn test_mixed_width_mismatch_padding() {
        let rendered = render_pair("ABxCD", "AB漢CD");
        assert_eq!(rendered.top, "ABx CD");
        assert_eq!(rendered.markers, "||\u{3000}||");
        assert_eq!(rendered.bottom, "AB漢CD");

        let column = rendered.columns()[2];
        assert!(column.top.padded);
        assert!(!column.bottom.padded);
        assert_eq!(column.width, 2);
        assert_eq!(column.cells()[0], "x ");
    }

    #[test]
    fn test_lines_share_display_width() {
        for (a, b) in [
            ("ABxCD", "AB漢CD"),
            ("漢字かな", "漢字な"),
            ("GATTACA", "GCATGCU"),
            ("ab漢cd字ef", "ab字cdxef"),
        ] {
            let rendered = render_pair(a, b);
            let expected = rendered.display_width();
            for line in rendered.lines() {
                assert_eq!(line_width(line), expected, "{} vs {}: {:?}", a, b, line);
            }
        }
    }

    #[test]
    fn test_display_prints_three_lines() {
        let rendered = render_pair("ABC", "ABC");
        assert_eq!(rendered.to_string(), "ABC\n|||\nABC");
    }
}
