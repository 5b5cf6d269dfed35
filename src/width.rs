//! Terminal display width of code points.
//!
//! The renderer only sees the [`DisplayWidth`] trait; [`UnicodeWidth`] is the
//! stock implementation backed by the East Asian Width table of the
//! `unicode-width` crate.

use unicode_width::UnicodeWidthChar;

/// Number of terminal columns a code point occupies, either 1 or 2.
pub trait DisplayWidth {
    fn width(&self, c: char) -> usize;

    /// Returns true for double-width code points.
    fn is_wide(&self, c: char) -> bool {
        self.width(c) != 1
    }
}

impl<W: DisplayWidth + ?Sized> DisplayWidth for &W {
    fn width(&self, c: char) -> usize {
        (**self).width(c)
    }
}

/// Width lookup from the Unicode East Asian Width property.
///
/// Control and zero-width characters are reported as one column. Combining
/// marks therefore take a column of their own in the marker and gap lines
/// while the terminal draws them on the previous glyph, so lines holding
/// them drift out of column: `"abc\u{301}d"` aligned to itself gives a
/// five-column marker line under four visible columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnicodeWidth {
    cjk: bool,
}

impl UnicodeWidth {
    /// Ambiguous-width characters are narrow.
    pub fn new() -> Self {
        Self { cjk: false }
    }

    /// Ambiguous-width characters are wide, as in CJK terminal locales.
    pub fn cjk() -> Self {
        Self { cjk: true }
    }
}

impl DisplayWidth for UnicodeWidth {
    fn width(&self, c: char) -> usize {
        let width = if self.cjk { c.width_cjk() } else { c.width() };
        match width {
            Some(2) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_narrow() {
        let w = UnicodeWidth::new();
        assert_eq!(w.width('A'), 1);
        assert_eq!(w.width('-'), 1);
        assert!(!w.is_wide('z'));
    }

    #[test]
    fn test_ideographs_wide() {
        let w = UnicodeWidth::new();
        assert_eq!(w.width('漢'), 2);
        assert_eq!(w.width('あ'), 2);
        assert_eq!(w.width('\u{FF0D}'), 2); // fullwidth hyphen-minus
        assert_eq!(w.width('\u{3000}'), 2); // ideographic space
    }

    #[test]
    fn test_control_and_zero_width_clamped() {
        let w = UnicodeWidth::new();
        assert_eq!(w.width('\u{0007}'), 1);
        assert_eq!(w.width('\u{200B}'), 1);
    }

    #[test]
    fn test_combining_mark_takes_a_column() {
        let w = UnicodeWidth::new();
        assert_eq!(w.width('\u{301}'), 1);
        assert!(!w.is_wide('\u{301}'));
    }

    #[test]
    fn test_ambiguous_width() {
        // GREEK SMALL LETTER ALPHA is East Asian Ambiguous.
        assert_eq!(UnicodeWidth::new().width('α'), 1);
        assert_eq!(UnicodeWidth::cjk().width('α'), 2);
    }
}
