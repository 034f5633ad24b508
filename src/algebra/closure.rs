//! Bounded Kleene and positive closures.
//!
//! Closures are fully materialized and grow as |Σ|^n. There is no internal
//! cap: callers bound `max_length` and the alphabet size, using
//! [`closure_size`] to check a request before enumerating it.

use crate::core::{Alphabet, Language};
use itertools::Itertools;
use tracing::{debug, warn};

/// Closure sizes above this are logged as a warning.
const LARGE_CLOSURE: usize = 1 << 20;

/// Number of words in the Kleene closure of `symbols` symbols up to
/// `max_length`: Σ_{i=0}^{n} |Σ|^i. Returns `None` on overflow.
///
/// # Example
///
/// ```rust
/// use finlang::algebra::closure_size;
///
/// assert_eq!(closure_size(2, 3), Some(1 + 2 + 4 + 8));
/// assert_eq!(closure_size(0, 5), Some(1));
/// assert_eq!(closure_size(10, 40), None);
/// ```
pub fn closure_size(symbols: usize, max_length: usize) -> Option<usize> {
    let mut total: usize = 0;
    let mut layer: usize = 1;
    for i in 0..=max_length {
        total = total.checked_add(layer)?;
        if layer == 0 {
            break;
        }
        if i < max_length {
            layer = layer.checked_mul(symbols)?;
        }
    }
    Some(total)
}

/// All strings over `alphabet` of length `0..=max_length`.
///
/// Starts with the empty word, followed by each length in turn; within a
/// length, words follow the alphabet-major cartesian-product order.
///
/// # Example
///
/// ```rust
/// use finlang::algebra::kleene_closure;
/// use finlang::core::Alphabet;
///
/// let alphabet = Alphabet::new(["a", "b"]).unwrap();
/// let closure = kleene_closure(&alphabet, 2);
/// assert_eq!(
///     closure.words(),
///     &["", "a", "b", "aa", "ab", "ba", "bb"]
/// );
/// ```
pub fn kleene_closure(alphabet: &Alphabet, max_length: usize) -> Language {
    let expected = closure_size(alphabet.len(), max_length);
    debug!(
        symbols = alphabet.len(),
        max_length,
        ?expected,
        "enumerating kleene closure"
    );
    if expected.map_or(true, |size| size > LARGE_CLOSURE) {
        warn!(
            symbols = alphabet.len(),
            max_length,
            "closure exceeds {LARGE_CLOSURE} words and may exhaust memory"
        );
    }

    let mut words = Vec::with_capacity(expected.unwrap_or(0).min(LARGE_CLOSURE));
    words.push(String::new());
    if alphabet.is_empty() {
        return Language::from(words);
    }

    // Each length extends every word of the previous one by every symbol,
    // which reproduces the cartesian-product order.
    let mut layer_start = 0;
    for _ in 1..=max_length {
        let layer_end = words.len();
        let layer: Vec<String> = words[layer_start..layer_end]
            .iter()
            .cartesian_product(alphabet.symbols())
            .map(|(prefix, symbol)| format!("{prefix}{symbol}"))
            .collect();
        words.extend(layer);
        layer_start = layer_end;
    }
    Language::from(words)
}

/// The Kleene closure without its leading empty word.
pub fn positive_closure(alphabet: &Alphabet, max_length: usize) -> Language {
    kleene_closure(alphabet, max_length)
        .into_iter()
        .skip(1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab() -> Alphabet {
        Alphabet::new(["a", "b"]).unwrap()
    }

    #[test]
    fn kleene_starts_with_empty_word() {
        let closure = kleene_closure(&ab(), 1);
        assert_eq!(closure.words(), &["", "a", "b"]);
    }

    #[test]
    fn kleene_of_zero_length_is_empty_word_only() {
        assert_eq!(kleene_closure(&ab(), 0).words(), &[""]);
    }

    #[test]
    fn kleene_follows_alphabet_order() {
        let alphabet = Alphabet::new(["b", "a"]).unwrap();
        let closure = kleene_closure(&alphabet, 2);
        assert_eq!(closure.words(), &["", "b", "a", "bb", "ba", "ab", "aa"]);
    }

    #[test]
    fn kleene_joins_multi_character_symbols() {
        let alphabet = Alphabet::new(["ab", "c"]).unwrap();
        let closure = kleene_closure(&alphabet, 2);
        assert_eq!(
            closure.words(),
            &["", "ab", "c", "abab", "abc", "cab", "cc"]
        );
    }

    #[test]
    fn kleene_over_empty_alphabet() {
        let alphabet = Alphabet::new(Vec::<String>::new()).unwrap();
        assert_eq!(kleene_closure(&alphabet, 3).words(), &[""]);
        assert!(positive_closure(&alphabet, 3).is_empty());
    }

    #[test]
    fn kleene_over_empty_alphabet_ignores_huge_lengths() {
        let alphabet = Alphabet::new(Vec::<String>::new()).unwrap();
        assert_eq!(kleene_closure(&alphabet, 20_000_000).words(), &[""]);
        assert_eq!(closure_size(0, usize::MAX), Some(1));
    }

    #[test]
    fn kleene_size_matches_closure_size() {
        let alphabet = Alphabet::new(["a", "b", "c"]).unwrap();
        let closure = kleene_closure(&alphabet, 4);
        assert_eq!(Some(closure.len()), closure_size(3, 4));
        assert_eq!(closure.len(), 1 + 3 + 9 + 27 + 81);
    }

    #[test]
    fn positive_drops_only_the_empty_word() {
        let positive = positive_closure(&ab(), 2);
        assert_eq!(positive.words(), &["a", "b", "aa", "ab", "ba", "bb"]);
        assert!(!positive.contains(""));
    }

    #[test]
    fn closure_size_detects_overflow() {
        assert_eq!(closure_size(2, 0), Some(1));
        assert_eq!(closure_size(1, 5), Some(6));
        assert_eq!(closure_size(usize::MAX, 2), None);
    }
}
