//! Input and alphabet errors.

use thiserror::Error;

/// Caller-correctable input problems: malformed numeric parameters and
/// violated operator preconditions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{value}' is not a valid integer")]
    NotAnInteger { value: String },

    #[error("{value} is negative, expected a non-negative integer")]
    Negative { value: i64 },

    #[error("Language power requires an exponent of at least 1")]
    EmptyPowerNotSupported,

    #[error("Operation requires a non-empty language")]
    EmptyLanguage,
}

/// Errors about alphabet shape and alphabet membership.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Alphabet symbols must not be empty")]
    EmptySymbol,

    #[error("Symbol '{symbol}' appears more than once in the alphabet")]
    DuplicateSymbol { symbol: String },

    /// A character of `word` is not a symbol of the alphabet.
    #[error("Character '{symbol}' in \"{word}\" does not belong to the alphabet")]
    InvalidSymbol { symbol: char, word: String },
}
