//! Parsing of caller-supplied text into core values.
//!
//! Front ends collect alphabets, languages and numeric parameters as text.
//! These helpers split and convert that text; they never interpret it.

use super::error::InputError;

/// Split comma-separated text into trimmed tokens.
///
/// Empty tokens are kept, so `"a,,b"` yields `["a", "", "b"]` and an empty
/// string yields a single empty token. Callers decide whether an empty
/// token is meaningful.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',').map(|token| token.trim().to_string()).collect()
}

/// Parse a non-negative integer such as a closure length or a power.
///
/// # Example
///
/// ```rust
/// use finlang::core::{parse_count, InputError};
///
/// assert_eq!(parse_count(" 3 "), Ok(3));
/// assert!(matches!(parse_count("three"), Err(InputError::NotAnInteger { .. })));
/// assert_eq!(parse_count("-1"), Err(InputError::Negative { value: -1 }));
/// ```
pub fn parse_count(text: &str) -> Result<usize, InputError> {
    let trimmed = text.trim();
    let not_an_integer = || InputError::NotAnInteger {
        value: trimmed.to_string(),
    };

    let value: i64 = trimmed.parse().map_err(|_| not_an_integer())?;
    if value < 0 {
        return Err(InputError::Negative { value });
    }
    usize::try_from(value).map_err(|_| not_an_integer())
}
