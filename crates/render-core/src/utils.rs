use crate::types::FontWeight;

/// Get PDF font name with style suffix
pub fn get_styled_font_name(base_name: &str, weight: FontWeight) -> String {
    let mut name = base_name.to_string();
    if weight == FontWeight::Bold {
        name.push_str("-Bold");
    }
    name
}

/// Whether a character has a glyph under WinAnsi encoding in the standard fonts
/// and maps to the same byte value (printable ASCII and the Latin-1 supplement).
pub fn is_win_ansi_char(c: char) -> bool {
    matches!(c as u32, 32..=126 | 160..=255)
}

/// WinAnsi byte for a character: the identity ranges plus the euro sign at 0x80.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    match c {
        '\u{20AC}' => Some(0x80),
        c if is_win_ansi_char(c) => Some(c as u32 as u8),
        _ => None,
    }
}

/// Encodes text as WinAnsi bytes. Characters without a mapping become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| win_ansi_byte(c).unwrap_or(b'?')).collect()
}
