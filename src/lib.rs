//! Finlang: an algebra over finite languages and a DFA acceptance engine
//!
//! Finlang is a teaching library. Given an alphabet it enumerates bounded
//! closures, combines finite languages with set and concatenation operators,
//! and simulates string acceptance against a user-defined transition table.
//!
//! # Core Concepts
//!
//! - **Alphabet**: ordered set of distinct symbols, validated on construction
//! - **Language**: ordered sequence of words; duplicates kept unless an
//!   operator collapses them
//! - **Algebra**: pure operators returning new languages
//! - **DFA**: caller-owned description plus a stateless simulator
//!
//! Closures are fully materialized and grow as |Σ|^n. Nothing caps their
//! size, so callers must bound the alphabet and the maximum length.
//!
//! # Example
//!
//! ```rust
//! use finlang::algebra::{concatenate, kleene_closure};
//! use finlang::core::{verify_membership, Alphabet, Language};
//! use finlang::dfa::DfaBuilder;
//!
//! let alphabet = Alphabet::parse("a,b").unwrap();
//! assert_eq!(kleene_closure(&alphabet, 2).len(), 7);
//!
//! let l1 = Language::parse("a,b");
//! let l2 = Language::parse("c");
//! assert!(!verify_membership(&alphabet, &l2));
//! assert_eq!(concatenate(&l1, &l2).words(), &["ac", "bc"]);
//!
//! let dfa = DfaBuilder::<String>::new(alphabet)
//!     .states(["S0", "S1"])
//!     .initial("S0")
//!     .accepting(["S1"])
//!     .transition("S0", "a", "S1")
//!     .transition("S0", "b", "S0")
//!     .transition("S1", "a", "S1")
//!     .transition("S1", "b", "S0")
//!     .build()
//!     .unwrap();
//!
//! let outcome = dfa.run("aab").unwrap();
//! assert!(!outcome.is_accepted());
//! assert_eq!(outcome.path(), vec!["S0", "S1", "S1", "S0"]);
//! ```

pub mod algebra;
pub mod core;
pub mod dfa;

// Re-export commonly used types
pub use crate::core::{Alphabet, InputError, Language, State};
pub use crate::dfa::{Dfa, DfaBuilder, RunError, RunOutcome};
