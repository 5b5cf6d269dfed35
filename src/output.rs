//! Writing rendered alignments to a terminal or a plain stream.
//!
//! Plain output is the three lines exactly as rendered. Colored output wraps
//! each column in an ANSI foreground color chosen by a [`ColorScheme`].

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::render::{ColumnKind, Rendered};

/// Color scheme for alignment columns.
///
/// This trait allows for different color schemes to be implemented.
pub trait ColorScheme {
    fn get_color(&self, kind: ColumnKind) -> Option<Color>;
}

/// Matches green, mismatches red, gaps dimmed.
pub struct MatchColorScheme;

impl ColorScheme for MatchColorScheme {
    fn get_color(&self, kind: ColumnKind) -> Option<Color> {
        match kind {
            ColumnKind::Match => Some(Color::Green),
            ColumnKind::Mismatch => Some(Color::Red),
            ColumnKind::GapTop | ColumnKind::GapBottom => Some(Color::DarkGrey),
        }
    }
}

/// Writes the three lines without styling.
pub fn write_plain<W: Write>(out: &mut W, rendered: &Rendered) -> io::Result<()> {
    for line in rendered.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Writes the three lines, coloring every column according to `scheme`.
pub fn write_colored<W: Write, C: ColorScheme>(
    out: &mut W,
    rendered: &Rendered,
    scheme: &C,
) -> io::Result<()> {
    for row in 0..3 {
        for column in rendered.columns() {
            let cells = column.cells();
            match scheme.get_color(column.kind) {
                Some(color) => queue!(out, SetForegroundColor(color), Print(&cells[row]), ResetColor)?,
                None => queue!(out, Print(&cells[row]))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::smith_waterman;
    use crate::model::Sequence;
    use crate::render::render;
    use crate::scoring::DefaultScore;
    use crate::width::UnicodeWidth;

    fn rendered(a: &str, b: &str) -> Rendered {
        let s1 = Sequence::from(a);
        let s2 = Sequence::from(b);
        render(&smith_waterman(&DefaultScore, &s1, &s2), &UnicodeWidth::new())
    }

    struct NoColor;

    impl ColorScheme for NoColor {
        fn get_color(&self, _kind: ColumnKind) -> Option<Color> {
            None
        }
    }

    #[test]
    fn test_match_colors() {
        let scheme = MatchColorScheme;
        assert_eq!(scheme.get_color(ColumnKind::Match), Some(Color::Green));
        assert_eq!(scheme.get_color(ColumnKind::Mismatch), Some(Color::Red));
        assert_eq!(scheme.get_color(ColumnKind::GapTop), Some(Color::DarkGrey));
    }

    #[test]
    fn test_write_plain() {
        let mut buf = Vec::new();
        write_plain(&mut buf, &rendered("ABCD", "ABXD")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ABCD\n|| |\nABXD\n");
    }

    #[test]
    fn test_write_plain_empty_alignment() {
        let mut buf = Vec::new();
        write_plain(&mut buf, &rendered("ABC", "XYZ")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\n\n\n");
    }

    #[test]
    fn test_write_colored_without_colors_is_plain() {
        let mut plain = Vec::new();
        let mut colored = Vec::new();
        let r = rendered("ABxCD", "AB漢CD");
        write_plain(&mut plain, &r).unwrap();
        write_colored(&mut colored, &r, &NoColor).unwrap();
        assert_eq!(plain, colored);
    }

    #[test]
    fn test_write_colored_emits_escapes() {
        let mut buf = Vec::new();
        write_colored(&mut buf, &rendered("ABC", "ABC"), &MatchColorScheme).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\u{1b}'));
        assert_eq!(text.matches('\n').count(), 3);
        assert!(text.contains('|'));
    }
}
