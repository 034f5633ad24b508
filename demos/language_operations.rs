//! Language Operations
//!
//! This example walks through the language algebra the way a text front end
//! would drive it: every value starts as comma-separated text.
//!
//! Key concepts:
//! - Parsing alphabets, languages and counts from text
//! - Bounded Kleene and positive closures
//! - Concatenation and power, which keep order and duplicates
//! - Set operators, whose results are compared as sets
//! - Membership checks before operators that assume conformant input
//!
//! Run with: cargo run --example language_operations
//! Set RUST_LOG=debug to see the library's tracing events.

use finlang::algebra::{
    closure_size, complement_language, concatenate, difference_languages, intersect_languages,
    kleene_closure, positive_closure, power, reverse_language, union_languages,
};
use finlang::core::{audit_membership, parse_count, verify_membership, Alphabet, Language};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Language Operations Example ===\n");

    let alphabet = Alphabet::parse("a, b").unwrap();
    println!("Alphabet: {alphabet}");

    // Closures
    let n = parse_count("2").unwrap();
    println!("\nClosure size for n = {n}: {:?}", closure_size(alphabet.len(), n));
    println!("Kleene closure:   {}", kleene_closure(&alphabet, n));
    println!("Positive closure: {}", positive_closure(&alphabet, n));

    match parse_count("two") {
        Ok(n) => println!("Parsed {n}"),
        Err(e) => println!("Rejected count: {e}"),
    }

    // Concatenation guarded by membership
    let l1 = Language::parse("a, ab");
    let l2 = Language::parse("b, ");
    println!("\nL1 = {l1}");
    println!("L2 = {l2}");

    if verify_membership(&alphabet, &l1) && verify_membership(&alphabet, &l2) {
        println!("L1 · L2 = {}", concatenate(&l1, &l2));
    }

    let foreign = Language::parse("ac, xb");
    if let Validation::Failure(errors) = audit_membership(&alphabet, &foreign) {
        println!("\n{foreign} is not over {alphabet}:");
        for error in errors.iter() {
            println!("  - {error}");
        }
    }

    // Power and reversal
    println!("\nL1^2 = {}", power(&l1, 2).unwrap());
    match power(&l1, 0) {
        Ok(language) => println!("L1^0 = {language}"),
        Err(e) => println!("L1^0 rejected: {e}"),
    }
    println!("reverse(L1) = {}", reverse_language(&l1));

    // Set operators (order of the results is unspecified)
    println!("\nL1 ∪ L2 = {}", union_languages(&l1, &l2));
    println!("L1 ∩ L1 = {}", intersect_languages(&l1, &l1));
    println!("L1 - L2 = {}", difference_languages(&l1, &l2));
    println!(
        "complement(L1) = {}",
        complement_language(&l1, &alphabet).unwrap()
    );

    println!("\n=== Example Complete ===");
}
