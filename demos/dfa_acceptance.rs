//! DFA Acceptance
//!
//! This example builds an automaton in two phases and runs strings through
//! it, including inputs that stop the simulation early.
//!
//! Key concepts:
//! - Laying out an empty transition table for the declared states
//! - Filling the table as a form or prompt would
//! - Acceptance, rejection and the path a run takes
//! - Recoverable failures for foreign symbols and missing transitions
//!
//! Run with: cargo run --example dfa_acceptance
//! Set RUST_LOG=trace to see every simulation step.

use finlang::core::{parse_list, Alphabet};
use finlang::dfa::{build_empty_transition_table, validate_string};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== DFA Acceptance Example ===\n");

    let alphabet = Alphabet::parse("a,b").unwrap();
    let states = parse_list("S0,S1");
    let initial = "S0".to_string();
    let accepting = parse_list("S1");

    // Phase 1: one unset cell per (state, symbol)
    let mut table = build_empty_transition_table(&states, &alphabet);
    println!("Empty table:\n{table}");

    // Phase 2: the caller fills the cells
    table.set("S0".to_string(), "a", "S1".to_string());
    table.set("S0".to_string(), "b", "S0".to_string());
    table.set("S1".to_string(), "a", "S1".to_string());
    table.set("S1".to_string(), "b", "S0".to_string());
    println!("Filled table:\n{table}");

    for input in ["a", "ab", "aab", "c"] {
        match validate_string(&alphabet, &states, &table, &initial, &accepting, input) {
            Ok(outcome) => println!(
                "{input:>4}: {} in {} via {}",
                if outcome.is_accepted() { "accepted" } else { "rejected" },
                outcome.final_state(),
                outcome.history()
            ),
            Err(e) => println!("{input:>4}: {e}"),
        }
    }

    // A missing cell stops the run after the consumed prefix
    table.unset(&"S1".to_string(), "b");
    println!("\nAfter clearing S1 on 'b':");
    if let Err(e) = validate_string(&alphabet, &states, &table, &initial, &accepting, "ab") {
        println!("  ab: {e} (after {} characters)", e.consumed());
    }

    println!("\n=== Example Complete ===");
}
