//! Core value types and validation.
//!
//! This module contains the values every operation works on:
//! - Alphabets and the membership checks guarding algebra operators
//! - Languages as ordered word sequences
//! - The `State` trait for automaton state labels
//! - Parsing of caller-supplied text
//!
//! All values are immutable once constructed; operations return new ones.

mod alphabet;
mod error;
mod input;
mod language;
mod state;

pub use alphabet::{audit_membership, check_membership, verify_membership, Alphabet};
pub use error::{AlphabetError, InputError};
pub use input::{parse_count, parse_list};
pub use language::Language;
pub use state::State;
