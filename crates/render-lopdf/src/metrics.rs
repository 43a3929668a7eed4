//! Advance widths of the standard Helvetica faces, in 1/1000 em, taken from
//! the Adobe Core 14 AFM files for the WinAnsi code points folio emits.

use folio_render_core::StandardFont;
use folio_render_core::utils::win_ansi_byte;

/// The euro sign (WinAnsi 0x80) has the same advance in both faces.
const EURO_WIDTH: u16 = 556;

/// Codes 32..=126.
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

/// Codes 160..=255.
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Advance width of one character in 1/1000 em.
///
/// Characters outside WinAnsi are measured as `?`, which is what `to_win_ansi`
/// substitutes for them.
pub fn glyph_width(font: StandardFont, c: char) -> u16 {
    let (ascii, latin1) = match font {
        StandardFont::Helvetica => (&HELVETICA_ASCII, &HELVETICA_LATIN1),
        StandardFont::HelveticaBold => (&HELVETICA_BOLD_ASCII, &HELVETICA_BOLD_LATIN1),
    };
    match win_ansi_byte(c).unwrap_or(b'?') {
        0x80 => EURO_WIDTH,
        code @ 32..=126 => ascii[code as usize - 32],
        code => latin1[code as usize - 160],
    }
}

/// Width of `text` in points at `size`.
pub fn text_width(font: StandardFont, text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(font, c) as u32).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_widths() {
        assert_eq!(glyph_width(StandardFont::Helvetica, ' '), 278);
        assert_eq!(glyph_width(StandardFont::Helvetica, 'W'), 944);
        assert_eq!(glyph_width(StandardFont::Helvetica, '~'), 584);
        assert_eq!(glyph_width(StandardFont::Helvetica, 'á'), 556);
        assert_eq!(glyph_width(StandardFont::HelveticaBold, 'b'), 611);
        assert_eq!(glyph_width(StandardFont::HelveticaBold, 'ÿ'), 556);
        assert_eq!(glyph_width(StandardFont::Helvetica, '€'), 556);
    }

    #[test]
    fn latin1_rows_follow_the_afm_files() {
        let regular = |c| glyph_width(StandardFont::Helvetica, c);
        let bold = |c| glyph_width(StandardFont::HelveticaBold, c);
        // brokenbar, mu, paragraph, multiply, AE, ccedilla, eth, thorn
        assert_eq!(regular('¦'), 260);
        assert_eq!(regular('µ'), 556);
        assert_eq!(regular('¶'), 537);
        assert_eq!(regular('×'), 584);
        assert_eq!(regular('Æ'), 1000);
        assert_eq!(regular('ç'), 500);
        assert_eq!(regular('ð'), 556);
        assert_eq!(regular('þ'), 556);
        assert_eq!(bold('¦'), 280);
        assert_eq!(bold('µ'), 611);
        assert_eq!(bold('¶'), 556);
        assert_eq!(bold('×'), 584);
        assert_eq!(bold('Æ'), 1000);
        assert_eq!(bold('ç'), 556);
        assert_eq!(bold('ð'), 611);
        assert_eq!(bold('þ'), 611);
        assert_eq!(bold('Á'), 722);
        assert_eq!(regular('Á'), 667);
    }

    #[test]
    fn unencodable_chars_measure_as_question_mark() {
        let q = glyph_width(StandardFont::Helvetica, '?');
        assert_eq!(glyph_width(StandardFont::Helvetica, '😀'), q);
        assert_eq!(glyph_width(StandardFont::Helvetica, '\u{90}'), q);
        assert_eq!(glyph_width(StandardFont::Helvetica, '\t'), q);
    }

    #[test]
    fn text_width_scales_with_size() {
        // H e l l o = 722 + 556 + 222 + 222 + 556
        let w = text_width(StandardFont::Helvetica, "Hello", 10.0);
        assert!((w - 22.78).abs() < 1e-3);
        let bold = text_width(StandardFont::HelveticaBold, "Hello", 20.0);
        // 722 + 556 + 278 + 278 + 611
        assert!((bold - 48.9).abs() < 1e-3);
    }
}
