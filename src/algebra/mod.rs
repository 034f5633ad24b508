//! Algebra over finite languages.
//!
//! Every operator is a pure function from fully materialized languages to a
//! newly allocated one:
//! - **Closures**: bounded Kleene and positive closures over an alphabet
//! - **Sequence operators**: concatenation, power and reversal, which keep
//!   order and duplicates
//! - **Set operators**: union, intersection, difference and complement,
//!   whose results have unspecified order
//!
//! Operators assume alphabet-conformant input and do not check it; run
//! [`verify_membership`](crate::core::verify_membership) first when it
//! matters.

mod closure;
mod concat;
mod sets;

pub use closure::{closure_size, kleene_closure, positive_closure};
pub use concat::{concatenate, power, reverse_language};
pub use sets::{complement_language, difference_languages, intersect_languages, union_languages};
