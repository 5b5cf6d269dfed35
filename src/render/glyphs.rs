/// Symbols used to fill alignment columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub matched: char,
    pub blank: char,
    pub gap: char,
}

pub fn select(wide: bool) -> Glyphs {
    if wide {
        full_width()
    } else {
        half_width()
    }
}

fn half_width() -> Glyphs {
    Glyphs {
        matched: '|',
        blank: ' ',
        gap: '-',
    }
}

fn full_width() -> Glyphs {
    Glyphs {
        matched: '\u{FF5C}', // FULLWIDTH VERTICAL LINE
        blank: '\u{3000}',   // IDEOGRAPHIC SPACE
        gap: '\u{FF0D}',     // FULLWIDTH HYPHEN-MINUS
    }
}
