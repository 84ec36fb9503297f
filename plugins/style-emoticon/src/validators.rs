//! Filters for the required text answers.

use emoticz_plugin::{ValidationError, break_lines, require_non_empty};

/// Trims surrounding whitespace and a single trailing period.
fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed).trim().to_string()
}

/// Normalizes the scope answer.
///
/// # Errors
///
/// Returns `scope is required` if nothing is left after normalization.
pub fn parse_scope(text: &str) -> Result<String, ValidationError> {
    require_non_empty(normalize(text), "scope is required")
}

/// Normalizes the subject answer.
///
/// # Errors
///
/// Returns `subject is required` if nothing is left after normalization.
pub fn parse_subject(text: &str) -> Result<String, ValidationError> {
    require_non_empty(normalize(text), "subject is required")
}

/// Splits the body answer into lines at `|`.
#[allow(clippy::unnecessary_wraps)] // must match the question filter signature
pub(crate) fn parse_body(text: &str) -> Result<String, ValidationError> {
    Ok(break_lines(text))
}
