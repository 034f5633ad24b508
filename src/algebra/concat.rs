//! Order-preserving operators: concatenation, power and reversal.
//!
//! These keep sequence order and duplicate multiplicity of their inputs.

use crate::core::{InputError, Language};
use itertools::Itertools;
use tracing::debug;

/// Every `s1 ‖ s2` for `s1` in `l1` and `s2` in `l2`, `l1`-major.
///
/// # Example
///
/// ```rust
/// use finlang::algebra::concatenate;
/// use finlang::core::Language;
///
/// let l1 = Language::new(["a", "b"]);
/// let l2 = Language::new(["c"]);
/// assert_eq!(concatenate(&l1, &l2).words(), &["ac", "bc"]);
/// ```
pub fn concatenate(l1: &Language, l2: &Language) -> Language {
    l1.iter()
        .cartesian_product(l2.iter())
        .map(|(s1, s2)| format!("{s1}{s2}"))
        .collect()
}

/// `language` concatenated with itself `k - 1` times, left-associatively.
///
/// `k = 0` is rejected with [`InputError::EmptyPowerNotSupported`].
///
/// # Example
///
/// ```rust
/// use finlang::algebra::power;
/// use finlang::core::{InputError, Language};
///
/// let language = Language::new(["a", "b"]);
/// assert_eq!(power(&language, 1).unwrap(), language);
/// assert_eq!(power(&language, 2).unwrap().words(), &["aa", "ab", "ba", "bb"]);
/// assert_eq!(power(&language, 0), Err(InputError::EmptyPowerNotSupported));
/// ```
pub fn power(language: &Language, k: usize) -> Result<Language, InputError> {
    if k == 0 {
        return Err(InputError::EmptyPowerNotSupported);
    }
    debug!(words = language.len(), k, "raising language to power");

    Ok((1..k).fold(language.clone(), |acc, _| concatenate(&acc, language)))
}

/// Each word reversed character by character; sequence order is kept.
pub fn reverse_language(language: &Language) -> Language {
    language
        .iter()
        .map(|word| word.chars().rev().collect::<String>())
        .collect()
}
