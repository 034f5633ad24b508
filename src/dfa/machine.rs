//! A complete DFA description.

use super::engine::{validate_string, RunOutcome};
use super::error::{DescriptionError, RunError};
use super::table::TransitionTable;
use crate::core::{Alphabet, State};
use serde::{Deserialize, Serialize};

/// States, alphabet, transition table, initial state and accepting states.
///
/// Built with [`DfaBuilder`](super::DfaBuilder). A `Dfa` holds no run
/// state; every call to [`run`](Self::run) starts fresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Dfa<S: State> {
    pub(crate) alphabet: Alphabet,
    pub(crate) states: Vec<S>,
    pub(crate) transitions: TransitionTable<S>,
    pub(crate) initial: S,
    pub(crate) accepting: Vec<S>,
}

impl<S: State> Dfa<S> {
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn transitions(&self) -> &TransitionTable<S> {
        &self.transitions
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn accepting_states(&self) -> &[S] {
        &self.accepting
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    /// Simulate `input` from the initial state.
    pub fn run(&self, input: &str) -> Result<RunOutcome<S>, RunError<S>> {
        validate_string(
            &self.alphabet,
            &self.states,
            &self.transitions,
            &self.initial,
            &self.accepting,
            input,
        )
    }

    /// Whether `input` runs to completion in an accepting state.
    pub fn accepts(&self, input: &str) -> bool {
        self.run(input).is_ok_and(|outcome| outcome.is_accepted())
    }

    /// Pretty-printed JSON description.
    pub fn to_json(&self) -> Result<String, DescriptionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DescriptionError::SerializationFailed(e.to_string()))
    }

    /// Parse a JSON description. The alphabet is validated while parsing.
    pub fn from_json(json: &str) -> Result<Self, DescriptionError> {
        serde_json::from_str(json)
            .map_err(|e| DescriptionError::DeserializationFailed(e.to_string()))
    }
}
