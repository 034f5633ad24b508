//! Builder for constructing DFAs.

use super::error::BuildError;
use super::machine::Dfa;
use super::table::{build_empty_transition_table, TransitionTable};
use crate::core::{Alphabet, State};

/// Caller-owned builder for a [`Dfa`] with a fluent API.
///
/// Supports the two-phase flow front ends use: declare states, fetch an
/// [`empty_table`](Self::empty_table) to present for editing, then hand the
/// filled table back with [`table`](Self::table). Individual cells can also
/// be set directly with [`transition`](Self::transition).
///
/// # Example
///
/// ```rust
/// use finlang::core::Alphabet;
/// use finlang::dfa::DfaBuilder;
///
/// let alphabet = Alphabet::new(["a", "b"]).unwrap();
/// let builder = DfaBuilder::<String>::new(alphabet)
///     .states(["S0", "S1"])
///     .initial("S0")
///     .accepting(["S1"]);
///
/// let mut table = builder.empty_table();
/// table.set("S0".to_string(), "a", "S1".to_string());
///
/// let dfa = builder.table(table).build().unwrap();
/// assert!(dfa.accepts("a"));
/// ```
pub struct DfaBuilder<S: State> {
    alphabet: Alphabet,
    states: Vec<S>,
    initial: Option<S>,
    accepting: Vec<S>,
    table: Option<TransitionTable<S>>,
}

impl<S: State> DfaBuilder<S> {
    /// Create a new builder over `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            states: Vec::new(),
            initial: None,
            accepting: Vec::new(),
            table: None,
        }
    }

    /// Declare states, in display order. Repeated labels are ignored.
    pub fn states<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        for state in states {
            let state = state.into();
            if !self.states.contains(&state) {
                self.states.push(state);
            }
        }
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add accepting states.
    pub fn accepting<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// An unset table for the states declared so far.
    pub fn empty_table(&self) -> TransitionTable<S> {
        build_empty_transition_table(&self.states, &self.alphabet)
    }

    /// Replace the transition table.
    pub fn table(mut self, table: TransitionTable<S>) -> Self {
        self.table = Some(table);
        self
    }

    /// Set a single cell, starting from an empty table if none is present.
    pub fn transition(
        mut self,
        from: impl Into<S>,
        symbol: impl Into<String>,
        to: impl Into<S>,
    ) -> Self {
        let mut table = match self.table.take() {
            Some(table) => table,
            None => self.empty_table(),
        };
        table.set(from.into(), symbol, to.into());
        self.table = Some(table);
        self
    }

    /// Build the DFA.
    /// Returns an error if the initial state is missing.
    ///
    /// Neither the initial state nor any target is checked against the
    /// declared states.
    pub fn build(self) -> Result<Dfa<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let transitions = match self.table {
            Some(table) => table,
            None => build_empty_transition_table(&self.states, &self.alphabet),
        };

        Ok(Dfa {
            alphabet: self.alphabet,
            states: self.states,
            transitions,
            initial,
            accepting: self.accepting,
        })
    }
}
