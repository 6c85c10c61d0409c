//! String utilities for the domain layer.

/// Truncate a speech to at most `max_len` bytes, appending an ellipsis
///
/// The cut always lands on a UTF-8 character boundary, so generated text
/// containing multi-byte characters is never split mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", s[..end].trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate("I support this bill.", 40), "I support this bill.");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate("I oppose this bill today", 12), "I oppose...");
    }

    #[test]
    fn test_multibyte_boundary() {
        // each 'é' is 2 bytes
        let s = "ééééé";
        assert_eq!(truncate(s, 8), "éé...");
    }
}
