//! Text preparation shared by both compositors.

pub mod wrapper;

pub use self::wrapper::{truncate_to_width, wrap_words};

use folio_render_core::utils::is_win_ansi_char;

/// Drops every character the standard fonts cannot encode and trims the result.
///
/// Kept code points are 32..=126 and 160..=255. Applying it twice changes nothing.
pub fn sanitize(text: &str) -> String {
    let kept: String = text.chars().filter(|c| is_win_ansi_char(*c)).collect();
    kept.trim().to_string()
}

/// Removes inline Markdown emphasis and code markers.
pub fn strip_inline_markers(text: &str) -> String {
    text.replace("**", "")
        .replace("__", "")
        .chars()
        .filter(|c| !matches!(c, '*' | '`'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sanitize_keeps_latin1() {
        assert_eq!(sanitize("  Café ✅ listo 😀 "), "Café  listo");
        assert_eq!(sanitize("tab\there"), "tabhere");
        assert_eq!(sanitize("😀"), "");
    }

    #[test]
    fn strips_emphasis_and_code() {
        assert_eq!(strip_inline_markers("**Total** `neto` *hoy*"), "Total neto hoy");
        assert_eq!(strip_inline_markers("__nota__ snake_case"), "nota snake_case");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent_and_in_range(s in "\\PC*") {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once.clone());
            prop_assert!(once.chars().all(|c| matches!(c as u32, 32..=126 | 160..=255)));
        }
    }
}
