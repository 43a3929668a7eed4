/// Greedy word wrap.
///
/// Text that fits is returned as a single line. Otherwise words (split on
/// single spaces, empty fragments skipped) are accumulated while
/// `measure(buffer + word + " ")` stays within `max_width`; a line is flushed
/// with its trailing space trimmed. A word wider than `max_width` on its own
/// is emitted unsplit on its own line.
pub fn wrap_words<E>(
    text: &str,
    max_width: f32,
    mut measure: impl FnMut(&str) -> Result<f32, E>,
) -> Result<Vec<String>, E> {
    if measure(text)? <= max_width {
        return Ok(vec![text.to_string()]);
    }

    let mut lines = Vec::new();
    let mut buffer = String::new();
    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let candidate = format!("{buffer}{word} ");
        if !buffer.is_empty() && measure(&candidate)? > max_width {
            lines.push(buffer.trim_end().to_string());
            buffer.clear();
        }
        buffer.push_str(word);
        buffer.push(' ');
    }

    let rest = buffer.trim_end();
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }
    Ok(lines)
}

const ELLIPSIS: &str = "...";

/// Shortens `text` until it plus an ellipsis fits `max_width`.
///
/// Returns the text untouched when it already fits, and an empty string when
/// not even the ellipsis does.
pub fn truncate_to_width<E>(
    text: &str,
    max_width: f32,
    mut measure: impl FnMut(&str) -> Result<f32, E>,
) -> Result<String, E> {
    if measure(text)? <= max_width {
        return Ok(text.to_string());
    }
    let mut kept: String = text.to_string();
    while kept.pop().is_some() {
        let candidate = format!("{}{ELLIPSIS}", kept.trim_end());
        if measure(&candidate)? <= max_width {
            return Ok(candidate);
        }
    }
    if measure(ELLIPSIS)? <= max_width {
        Ok(ELLIPSIS.to_string())
    } else {
        Ok(String::new())
    }
}
