//! Reusable answer filters.

use crate::ValidationError;

/// Rejects empty text with the given message, returning the text otherwise.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying `message` if `text` is empty.
pub fn require_non_empty(text: String, message: &str) -> Result<String, ValidationError> {
    if text.is_empty() {
        Err(ValidationError::new(message))
    } else {
        Ok(text)
    }
}

/// Turns `|`-separated pieces into separate lines.
///
/// Empty pieces are dropped and every kept piece is trimmed.
#[must_use]
pub fn break_lines(text: &str) -> String {
    text.split('|')
        .filter(|piece| !piece.is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_ok() {
        assert_eq!(require_non_empty("x".to_string(), "msg").unwrap(), "x");
    }

    #[test]
    fn test_require_non_empty_err() {
        let err = require_non_empty(String::new(), "scope is required").unwrap_err();
        assert_eq!(err.message(), "scope is required");
    }

    #[test]
    fn test_break_lines() {
        assert_eq!(break_lines("first | second|third"), "first\nsecond\nthird");
    }

    #[test]
    fn test_break_lines_without_separator() {
        assert_eq!(break_lines("see details"), "see details");
    }

    #[test]
    fn test_break_lines_drops_empty_pieces() {
        assert_eq!(break_lines("a||b|"), "a\nb");
        assert_eq!(break_lines(""), "");
    }
}
