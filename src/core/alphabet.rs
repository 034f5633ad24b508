//! Alphabets and alphabet membership checks.
//!
//! An [`Alphabet`] is an ordered set of distinct, non-empty symbols. The
//! order matters: closures enumerate strings in alphabet-major order.
//!
//! Membership is checked character by character, so a word belongs to an
//! alphabet when every one of its characters is itself a symbol. Symbols
//! longer than one character still take part in closure enumeration but
//! never match a single character.

use super::error::AlphabetError;
use super::input::parse_list;
use super::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// An ordered set of distinct symbols.
///
/// # Example
///
/// ```rust
/// use finlang::core::Alphabet;
///
/// let alphabet = Alphabet::new(["a", "b"]).unwrap();
/// assert!(alphabet.contains_char('a'));
/// assert!(!alphabet.contains_char('c'));
/// assert!(Alphabet::new(["a", "a"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Alphabet {
    symbols: Vec<String>,
}

impl Alphabet {
    /// Create an alphabet, rejecting empty and repeated symbols.
    pub fn new<I, T>(symbols: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(symbols.len());
        for symbol in &symbols {
            if symbol.is_empty() {
                return Err(AlphabetError::EmptySymbol);
            }
            if !seen.insert(symbol.as_str()) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(Self { symbols })
    }

    /// Parse comma-separated symbols such as `"a, b, c"`.
    pub fn parse(text: &str) -> Result<Self, AlphabetError> {
        Self::new(parse_list(text))
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Whether the single character `c` is one of the symbols.
    pub fn contains_char(&self, c: char) -> bool {
        self.symbols.iter().any(|s| {
            let mut chars = s.chars();
            chars.next() == Some(c) && chars.next().is_none()
        })
    }

    /// The first character of `word` that is not a symbol, if any.
    fn first_foreign(&self, word: &str) -> Option<char> {
        word.chars().find(|c| !self.contains_char(*c))
    }
}

impl TryFrom<Vec<String>> for Alphabet {
    type Error = AlphabetError;

    fn try_from(symbols: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<String> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.symbols.join(", "))
    }
}

/// Returns true iff every character of every word in `language` is a
/// symbol of `alphabet`.
///
/// Algebra operators do not call this themselves; callers run it before
/// operations that assume alphabet-conformant input.
pub fn verify_membership(alphabet: &Alphabet, language: &Language) -> bool {
    language
        .iter()
        .all(|word| alphabet.first_foreign(word).is_none())
}

/// Fail-fast membership check reporting the first foreign character.
pub fn check_membership(alphabet: &Alphabet, language: &Language) -> Result<(), AlphabetError> {
    for word in language.iter() {
        if let Some(symbol) = alphabet.first_foreign(word) {
            return Err(AlphabetError::InvalidSymbol {
                symbol,
                word: word.clone(),
            });
        }
    }
    Ok(())
}

/// Membership check that reports every foreign character of every word.
///
/// Each offending character is reported once per word it occurs in.
pub fn audit_membership(
    alphabet: &Alphabet,
    language: &Language,
) -> Validation<(), NonEmptyVec<AlphabetError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<AlphabetError>>> = Vec::new();

    for word in language.iter() {
        let mut reported = HashSet::new();
        for symbol in word.chars() {
            if !alphabet.contains_char(symbol) && reported.insert(symbol) {
                checks.push(Validation::fail(AlphabetError::InvalidSymbol {
                    symbol,
                    word: word.clone(),
                }));
            }
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab() -> Alphabet {
        Alphabet::new(["a", "b"]).unwrap()
    }

    #[test]
    fn rejects_empty_and_duplicate_symbols() {
        assert_eq!(Alphabet::new(["a", ""]), Err(AlphabetError::EmptySymbol));
        assert_eq!(
            Alphabet::new(["a", "b", "a"]),
            Err(AlphabetError::DuplicateSymbol {
                symbol: "a".to_string()
            })
        );
    }

    #[test]
    fn parse_trims_tokens() {
        let alphabet = Alphabet::parse("a, b ,c").unwrap();
        assert_eq!(alphabet.symbols(), &["a", "b", "c"]);
    }

    #[test]
    fn parse_rejects_trailing_comma() {
        assert_eq!(Alphabet::parse("a,b,"), Err(AlphabetError::EmptySymbol));
    }

    #[test]
    fn multi_character_symbols_never_match_a_char() {
        let alphabet = Alphabet::new(["ab", "c"]).unwrap();
        assert!(alphabet.contains("ab"));
        assert!(!alphabet.contains_char('a'));
        assert!(alphabet.contains_char('c'));
    }

    #[test]
    fn verify_membership_accepts_conformant_words() {
        let language = Language::new(["", "a", "abba"]);
        assert!(verify_membership(&ab(), &language));
    }

    #[test]
    fn verify_membership_rejects_foreign_characters() {
        let language = Language::new(["ab", "abc"]);
        assert!(!verify_membership(&ab(), &language));
    }

    #[test]
    fn check_membership_reports_first_foreign_character() {
        let language = Language::new(["ab", "axc", "d"]);
        assert_eq!(
            check_membership(&ab(), &language),
            Err(AlphabetError::InvalidSymbol {
                symbol: 'x',
                word: "axc".to_string()
            })
        );
    }

    #[test]
    fn audit_accumulates_all_foreign_characters() {
        let language = Language::new(["ab", "axc", "dd"]);

        match audit_membership(&ab(), &language) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                let symbols: Vec<char> = errors
                    .iter()
                    .map(|e| match e {
                        AlphabetError::InvalidSymbol { symbol, .. } => *symbol,
                        other => panic!("unexpected error {other:?}"),
                    })
                    .collect();
                assert_eq!(symbols, vec!['x', 'c', 'd']);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn audit_passes_conformant_language() {
        let language = Language::new(["a", "b", "ab"]);
        assert!(matches!(
            audit_membership(&ab(), &language),
            Validation::Success(())
        ));
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let alphabet: Alphabet = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(alphabet, ab());
        assert!(serde_json::from_str::<Alphabet>(r#"["a","a"]"#).is_err());
        assert_eq!(serde_json::to_string(&alphabet).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn display_lists_symbols() {
        assert_eq!(ab().to_string(), "{a, b}");
    }
}
