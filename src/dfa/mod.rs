//! Deterministic finite automata and string acceptance.
//!
//! # Key Concepts
//!
//! - **Transition tables**: possibly partial maps from (state, symbol) to a
//!   target state, laid out empty and then filled by the caller
//! - **Builder**: a caller-owned [`DfaBuilder`] assembles a [`Dfa`]; nothing
//!   is retained between calls
//! - **Simulation**: [`validate_string`] consumes an input character by
//!   character and reports acceptance, the final state and the path taken
//!
//! Simulation failures ([`RunError`]) are ordinary results, not faults; the
//! caller can correct the input or the table and run again.

mod builder;
mod engine;
mod error;
mod history;
mod machine;
mod table;

pub use builder::DfaBuilder;
pub use engine::{validate_string, RunOutcome};
pub use error::{BuildError, DescriptionError, RunError};
pub use history::{RunHistory, RunStep};
pub use machine::Dfa;
pub use table::{build_empty_transition_table, Cell, Row, TransitionTable};
