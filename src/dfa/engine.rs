//! String acceptance simulation.

use super::error::RunError;
use super::history::{RunHistory, RunStep};
use super::table::TransitionTable;
use crate::core::{Alphabet, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Verdict of a run that consumed its whole input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum RunOutcome<S: State> {
    /// Input exhausted in an accepting state
    Accepted { final_state: S, history: RunHistory<S> },

    /// Input exhausted in a non-accepting state
    Rejected { final_state: S, history: RunHistory<S> },
}

impl<S: State> RunOutcome<S> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn final_state(&self) -> &S {
        match self {
            Self::Accepted { final_state, .. } | Self::Rejected { final_state, .. } => final_state,
        }
    }

    pub fn history(&self) -> &RunHistory<S> {
        match self {
            Self::Accepted { history, .. } | Self::Rejected { history, .. } => history,
        }
    }

    /// States visited, starting with the initial state.
    pub fn path(&self) -> Vec<&S> {
        self.history().get_path()
    }
}

/// Run `input` through the automaton described by the remaining arguments.
///
/// Characters are consumed in order. A character outside `alphabet` stops
/// the run with [`RunError::InvalidSymbol`]; a missing or unset cell stops
/// it with [`RunError::UndefinedTransition`]. Otherwise the run ends
/// accepted iff the final state is in `accepting_states`.
///
/// `states` is informational only: it is not cross-checked against the
/// table's rows or targets, so a transition may lead to an undeclared state.
///
/// # Example
///
/// ```rust
/// use finlang::core::Alphabet;
/// use finlang::dfa::{build_empty_transition_table, validate_string, RunError};
///
/// let alphabet = Alphabet::new(["a"]).unwrap();
/// let states = vec!["q0".to_string(), "q1".to_string()];
/// let mut table = build_empty_transition_table(&states, &alphabet);
/// table.set("q0".to_string(), "a", "q1".to_string());
///
/// let accepting = vec!["q1".to_string()];
/// let outcome = validate_string(&alphabet, &states, &table, &states[0], &accepting, "a").unwrap();
/// assert!(outcome.is_accepted());
///
/// let err = validate_string(&alphabet, &states, &table, &states[0], &accepting, "aa")
///     .unwrap_err();
/// assert!(matches!(err, RunError::UndefinedTransition { consumed: 1, .. }));
/// ```
pub fn validate_string<S: State>(
    alphabet: &Alphabet,
    states: &[S],
    transitions: &TransitionTable<S>,
    initial_state: &S,
    accepting_states: &[S],
    input: &str,
) -> Result<RunOutcome<S>, RunError<S>> {
    debug!(
        initial = initial_state.name(),
        declared_states = states.len(),
        input_len = input.chars().count(),
        "simulating dfa"
    );

    let mut current = initial_state.clone();
    let mut history = RunHistory::new(initial_state.clone());
    let mut buf = [0u8; 4];

    for (consumed, symbol) in input.chars().enumerate() {
        if !alphabet.contains_char(symbol) {
            debug!(%symbol, state = current.name(), consumed, "symbol outside alphabet");
            return Err(RunError::InvalidSymbol {
                symbol,
                state: current,
                consumed,
            });
        }

        let Some(next) = transitions.target(&current, symbol.encode_utf8(&mut buf)) else {
            debug!(%symbol, state = current.name(), consumed, "undefined transition");
            return Err(RunError::UndefinedTransition {
                state: current,
                symbol,
                consumed,
            });
        };

        trace!(from = current.name(), %symbol, to = next.name(), "step");
        history = history.record(RunStep {
            from: current,
            symbol,
            to: next.clone(),
        });
        current = next.clone();
    }

    if accepting_states.contains(&current) {
        Ok(RunOutcome::Accepted {
            final_state: current,
            history,
        })
    } else {
        Ok(RunOutcome::Rejected {
            final_state: current,
            history,
        })
    }
}
