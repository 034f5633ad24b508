//! Run history tracking.
//!
//! Records every step a simulation takes so callers can show the path an
//! input drove the automaton through.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single consumed character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunStep<S: State> {
    /// The state before consuming `symbol`
    pub from: S,
    /// The consumed input character
    pub symbol: char,
    /// The state after consuming `symbol`
    pub to: S,
}

/// Ordered history of the steps of one run.
///
/// # Example
///
/// ```rust
/// use finlang::dfa::{RunHistory, RunStep};
///
/// let history = RunHistory::new("S0".to_string())
///     .record(RunStep {
///         from: "S0".to_string(),
///         symbol: 'a',
///         to: "S1".to_string(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec!["S0", "S1"]);
/// assert_eq!(history.final_state(), "S1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunHistory<S: State> {
    initial: S,
    steps: Vec<RunStep<S>>,
}

impl<S: State> RunHistory<S> {
    /// Create a history positioned at `initial` with no steps.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Record a step, returning the extended history.
    pub fn record(mut self, step: RunStep<S>) -> Self {
        self.steps.push(step);
        self
    }

    /// States traversed: the initial state, then the target of each step.
    pub fn get_path(&self) -> Vec<&S> {
        std::iter::once(&self.initial)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// The state reached after the last step.
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.initial, |step| &step.to)
    }

    pub fn steps(&self) -> &[RunStep<S>] {
        &self.steps
    }

    /// Number of characters consumed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<S: State> fmt::Display for RunHistory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.initial.name())?;
        for step in &self.steps {
            write!(f, " -{}-> {}", step.symbol, step.to.name())?;
        }
        Ok(())
    }
}
