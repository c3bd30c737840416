//! String utilities for the domain layer.

/// Shorten `s` to at most `max_len` bytes, ending in `...` when cut.
///
/// Cuts only on UTF-8 character boundaries, so statements in any script can
/// be previewed in log lines and listings.
pub fn preview(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("I feel unheard", 40), "I feel unheard");
    }

    #[test]
    fn test_preview_cuts_long_text() {
        assert_eq!(preview("I feel dismissed", 9), "I feel...");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        // "é" is two bytes; a cut inside it must back off
        let text = "ééééé";
        let out = preview(text, 6);
        assert_eq!(out, "é...");
    }
}
