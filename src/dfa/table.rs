//! Transition tables.
//!
//! A table is filled in two phases: [`build_empty_transition_table`] lays
//! out one unset cell per (state, symbol) pair, then the caller fills the
//! cells it wants. Cells left unset, and pairs missing from the table
//! altogether, are undefined transitions at simulation time.
//!
//! Targets are not checked against any declared state set; a cell may
//! point to a state that has no row of its own.

use crate::core::{Alphabet, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One (symbol, target) cell of a row. `None` is an unset placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Cell<S: State> {
    pub symbol: String,
    pub target: Option<S>,
}

/// The outgoing cells of one state, in alphabet order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Row<S: State> {
    pub state: S,
    pub cells: Vec<Cell<S>>,
}

/// A possibly partial transition function, kept in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionTable<S: State> {
    rows: Vec<Row<S>>,
}

impl<S: State> Default for TransitionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionTable<S> {
    /// A table with no rows.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[Row<S>] {
        &self.rows
    }

    /// Set the target of `(from, symbol)`, adding the row or cell if needed.
    pub fn set(&mut self, from: S, symbol: impl Into<String>, to: S) {
        let symbol = symbol.into();
        let row = match self.rows.iter().position(|r| r.state == from) {
            Some(index) => &mut self.rows[index],
            None => {
                self.rows.push(Row {
                    state: from,
                    cells: Vec::new(),
                });
                let last = self.rows.len() - 1;
                &mut self.rows[last]
            }
        };

        match row.cells.iter_mut().find(|c| c.symbol == symbol) {
            Some(cell) => cell.target = Some(to),
            None => row.cells.push(Cell {
                symbol,
                target: Some(to),
            }),
        }
    }

    /// Reset `(from, symbol)` to an unset placeholder, if the cell exists.
    pub fn unset(&mut self, from: &S, symbol: &str) {
        if let Some(cell) = self.cell_mut(from, symbol) {
            cell.target = None;
        }
    }

    /// The target of `(from, symbol)`, or `None` if undefined or unset.
    pub fn target(&self, from: &S, symbol: &str) -> Option<&S> {
        self.rows
            .iter()
            .find(|r| r.state == *from)?
            .cells
            .iter()
            .find(|c| c.symbol == symbol)?
            .target
            .as_ref()
    }

    /// Cells still holding an unset placeholder, in table order.
    pub fn unset_cells(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.rows.iter().flat_map(|row| {
            row.cells
                .iter()
                .filter(|c| c.target.is_none())
                .map(move |c| (&row.state, c.symbol.as_str()))
        })
    }

    /// Whether every cell has a target.
    pub fn is_complete(&self) -> bool {
        self.unset_cells().next().is_none()
    }

    /// One line per state: `"<state>: <target>: <target> ..."`, targets in
    /// cell order and `-` for unset cells.
    pub fn render_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                std::iter::once(row.state.name())
                    .chain(
                        row.cells
                            .iter()
                            .map(|c| c.target.as_ref().map_or("-", |t| t.name())),
                    )
                    .collect::<Vec<_>>()
                    .join(": ")
            })
            .collect()
    }

    fn cell_mut(&mut self, from: &S, symbol: &str) -> Option<&mut Cell<S>> {
        self.rows
            .iter_mut()
            .find(|r| r.state == *from)?
            .cells
            .iter_mut()
            .find(|c| c.symbol == symbol)
    }
}

impl<S: State> fmt::Display for TransitionTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_rows() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A table with an unset cell for every (state, symbol) pair.
///
/// # Example
///
/// ```rust
/// use finlang::core::Alphabet;
/// use finlang::dfa::build_empty_transition_table;
///
/// let alphabet = Alphabet::new(["a", "b"]).unwrap();
/// let states = vec!["q0".to_string(), "q1".to_string()];
/// let mut table = build_empty_transition_table(&states, &alphabet);
/// assert_eq!(table.unset_cells().count(), 4);
///
/// table.set("q0".to_string(), "a", "q1".to_string());
/// assert_eq!(table.render_rows(), vec!["q0: q1: -", "q1: -: -"]);
/// ```
pub fn build_empty_transition_table<S: State>(
    states: &[S],
    alphabet: &Alphabet,
) -> TransitionTable<S> {
    let rows = states
        .iter()
        .map(|state| Row {
            state: state.clone(),
            cells: alphabet
                .symbols()
                .iter()
                .map(|symbol| Cell {
                    symbol: symbol.clone(),
                    target: None,
                })
                .collect(),
        })
        .collect();
    TransitionTable { rows }
}
