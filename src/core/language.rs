//! Finite languages as ordered sequences of words.

use super::input::parse_list;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An ordered, finite sequence of words.
///
/// Duplicates are kept; only the set operators collapse them. The empty
/// word is a valid member and displays as `λ`.
///
/// # Example
///
/// ```rust
/// use finlang::core::Language;
///
/// let language = Language::new(["", "a", "a"]);
/// assert_eq!(language.len(), 3);
/// assert_eq!(language.to_string(), "{λ, a, a}");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language {
    words: Vec<String>,
}

impl Language {
    pub fn new<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The language with no words.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse comma-separated words. Empty tokens become the empty word.
    pub fn parse(text: &str) -> Self {
        Self::new(parse_list(text))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Length in characters of the longest word.
    pub fn longest_word_len(&self) -> Option<usize> {
        self.words.iter().map(|w| w.chars().count()).max()
    }

    /// The distinct words, for order-independent comparison.
    pub fn to_set(&self) -> HashSet<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

impl From<Vec<String>> for Language {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl FromIterator<String> for Language {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Language {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a Language {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if word.is_empty() {
                f.write_str("λ")?;
            } else {
                f.write_str(word)?;
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_duplicates() {
        let language = Language::new(["b", "a", "b"]);
        assert_eq!(language.words(), &["b", "a", "b"]);
        assert_eq!(language.to_set().len(), 2);
    }

    #[test]
    fn parse_keeps_empty_tokens_as_empty_word() {
        let language = Language::parse("a,,b");
        assert_eq!(language.words(), &["a", "", "b"]);
        assert!(language.contains(""));
    }

    #[test]
    fn longest_word_counts_characters() {
        assert_eq!(Language::new(["a", "ñññ", "bb"]).longest_word_len(), Some(3));
        assert_eq!(Language::empty().longest_word_len(), None);
    }

    #[test]
    fn display_renders_empty_word_as_lambda() {
        assert_eq!(Language::new(["", "ab"]).to_string(), "{λ, ab}");
        assert_eq!(Language::empty().to_string(), "{}");
    }

    #[test]
    fn serializes_as_plain_list() {
        let language = Language::new(["a", "b"]);
        let json = serde_json::to_string(&language).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, language);
    }
}
