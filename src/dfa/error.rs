//! DFA construction, simulation and description errors.

use crate::core::State;
use thiserror::Error;

/// Errors that can occur when building a DFA.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}

/// Reasons a simulation stops before consuming its whole input.
///
/// Both carry the state the automaton was in and how many input characters
/// had been consumed. They are ordinary results: the caller may correct the
/// input or the table and run again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError<S: State> {
    #[error("Character '{symbol}' does not belong to the alphabet")]
    InvalidSymbol {
        symbol: char,
        state: S,
        consumed: usize,
    },

    #[error("No transition defined for state {} and symbol '{symbol}'", .state.name())]
    UndefinedTransition {
        state: S,
        symbol: char,
        consumed: usize,
    },
}

impl<S: State> RunError<S> {
    /// The state the automaton was in when the run stopped.
    pub fn state(&self) -> &S {
        match self {
            Self::InvalidSymbol { state, .. } | Self::UndefinedTransition { state, .. } => state,
        }
    }

    /// Number of input characters consumed before the run stopped.
    pub fn consumed(&self) -> usize {
        match self {
            Self::InvalidSymbol { consumed, .. } | Self::UndefinedTransition { consumed, .. } => {
                *consumed
            }
        }
    }
}

/// Errors converting a DFA to or from its JSON description.
#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
