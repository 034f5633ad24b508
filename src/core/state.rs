//! State labels for deterministic finite automata.
//!
//! Automaton states are opaque labels. Any type implementing [`State`] can
//! label the states of a [`Dfa`](crate::dfa::Dfa); plain `String` labels
//! work out of the box.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton state labels.
///
/// # Required Traits
///
/// - `Clone`: labels are copied into run histories
/// - `Eq` + `Hash`: labels key the transition table
/// - `Debug`: labels appear in diagnostics
/// - `Serialize` + `Deserialize`: automata can be exchanged as JSON
///
/// # Example
///
/// ```rust
/// use finlang::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// impl State for Parity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///         }
///     }
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// assert_eq!("q0".to_string().name(), "q0");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The label shown in tables, logs and error messages.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
