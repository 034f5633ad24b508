//! Set operators over languages.
//!
//! Inputs are treated as sets, so duplicates collapse. Results are returned
//! as [`Language`] values whose order is unspecified: compare them with
//! [`Language::to_set`], never position by position. Currently words come
//! out in first-occurrence order, left operand first.

use super::closure::positive_closure;
use crate::core::{Alphabet, InputError, Language};
use itertools::Itertools;
use std::collections::HashSet;
use tracing::debug;

/// Words in `l1` or `l2`.
pub fn union_languages(l1: &Language, l2: &Language) -> Language {
    l1.iter().chain(l2.iter()).unique().cloned().collect()
}

/// Words in both `l1` and `l2`.
pub fn intersect_languages(l1: &Language, l2: &Language) -> Language {
    let right = l2.to_set();
    l1.iter()
        .filter(|word| right.contains(word.as_str()))
        .unique()
        .cloned()
        .collect()
}

/// Words in `l1` but not in `l2`.
pub fn difference_languages(l1: &Language, l2: &Language) -> Language {
    let right = l2.to_set();
    l1.iter()
        .filter(|word| !right.contains(word.as_str()))
        .unique()
        .cloned()
        .collect()
}

/// Non-empty words over `alphabet`, no longer than the longest word of
/// `language`, that are not in `language`.
///
/// Lengths are counted in characters: with multi-character symbols, a
/// generated word longer than the longest word of `language` is left out of
/// the universe. Unlike the Kleene closure, the universe here never
/// contains the empty word. An empty `language` has no longest word and is
/// rejected with [`InputError::EmptyLanguage`].
///
/// # Example
///
/// ```rust
/// use finlang::algebra::complement_language;
/// use finlang::core::{Alphabet, Language};
///
/// let alphabet = Alphabet::new(["a", "b"]).unwrap();
/// let complement = complement_language(&Language::new(["a"]), &alphabet).unwrap();
/// assert_eq!(complement.words(), &["b"]);
/// ```
pub fn complement_language(
    language: &Language,
    alphabet: &Alphabet,
) -> Result<Language, InputError> {
    let max_length = language
        .longest_word_len()
        .ok_or(InputError::EmptyLanguage)?;
    debug!(max_length, symbols = alphabet.len(), "computing complement");

    let excluded: HashSet<&str> = language.to_set();
    Ok(positive_closure(alphabet, max_length)
        .into_iter()
        .filter(|word| word.chars().count() <= max_length)
        .filter(|word| !excluded.contains(word.as_str()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn as_set(language: &Language) -> HashSet<String> {
        language.iter().cloned().collect()
    }

    #[test]
    fn union_collapses_duplicates() {
        let l1 = Language::new(["a", "b", "a"]);
        let l2 = Language::new(["b", "c"]);
        let union = union_languages(&l1, &l2);
        assert_eq!(union.len(), 3);
        assert_eq!(as_set(&union), set(&["a", "b", "c"]));
    }

    #[test]
    fn intersection_keeps_common_words() {
        let l1 = Language::new(["a", "ab", "ab", ""]);
        let l2 = Language::new(["ab", "", "b"]);
        let intersection = intersect_languages(&l1, &l2);
        assert_eq!(intersection.len(), 2);
        assert_eq!(as_set(&intersection), set(&["ab", ""]));
    }

    #[test]
    fn difference_removes_right_operand() {
        let l1 = Language::new(["a", "b", "c", "c"]);
        let l2 = Language::new(["b"]);
        let difference = difference_languages(&l1, &l2);
        assert_eq!(difference.len(), 2);
        assert_eq!(as_set(&difference), set(&["a", "c"]));
    }

    #[test]
    fn difference_with_itself_is_empty() {
        let language = Language::new(["a", "b"]);
        assert!(difference_languages(&language, &language).is_empty());
    }

    #[test]
    fn complement_over_single_length_universe() {
        let alphabet = Alphabet::new(["a", "b"]).unwrap();
        let complement = complement_language(&Language::new(["a"]), &alphabet).unwrap();
        assert_eq!(as_set(&complement), set(&["b"]));
    }

    #[test]
    fn complement_universe_excludes_empty_word() {
        let alphabet = Alphabet::new(["a", "b"]).unwrap();
        let language = Language::new(["", "ab"]);
        let complement = complement_language(&language, &alphabet).unwrap();
        assert_eq!(
            as_set(&complement),
            set(&["a", "b", "aa", "ba", "bb"])
        );
    }

    #[test]
    fn complement_of_only_empty_word_is_empty() {
        let alphabet = Alphabet::new(["a"]).unwrap();
        let complement = complement_language(&Language::new([""]), &alphabet).unwrap();
        assert!(complement.is_empty());
    }

    #[test]
    fn complement_universe_is_bounded_by_character_length() {
        let alphabet = Alphabet::new(["ab"]).unwrap();
        let complement = complement_language(&Language::new(["ab"]), &alphabet).unwrap();
        assert!(complement.is_empty());

        let alphabet = Alphabet::new(["a", "bc"]).unwrap();
        let complement = complement_language(&Language::new(["aa"]), &alphabet).unwrap();
        assert_eq!(as_set(&complement), set(&["a", "bc"]));
    }

    #[test]
    fn complement_of_empty_language_is_rejected() {
        let alphabet = Alphabet::new(["a"]).unwrap();
        assert_eq!(
            complement_language(&Language::empty(), &alphabet),
            Err(InputError::EmptyLanguage)
        );
    }
}
