//! End-to-end DFA scenarios, driven the way a front end would: parse the
//! text fields, lay out an empty table, fill it, then simulate.

use finlang::core::{parse_list, Alphabet};
use finlang::dfa::{build_empty_transition_table, validate_string, RunError, TransitionTable};

struct Scenario {
    alphabet: Alphabet,
    states: Vec<String>,
    table: TransitionTable<String>,
    initial: String,
    accepting: Vec<String>,
}

impl Scenario {
    fn run(&self, input: &str) -> Result<finlang::RunOutcome<String>, RunError<String>> {
        validate_string(
            &self.alphabet,
            &self.states,
            &self.table,
            &self.initial,
            &self.accepting,
            input,
        )
    }
}

fn s(label: &str) -> String {
    label.to_string()
}

fn ends_in_a() -> Scenario {
    let alphabet = Alphabet::parse("a,b").unwrap();
    let states = parse_list("S0,S1");
    let mut table = build_empty_transition_table(&states, &alphabet);
    table.set(s("S0"), "a", s("S1"));
    table.set(s("S0"), "b", s("S0"));
    table.set(s("S1"), "a", s("S1"));
    table.set(s("S1"), "b", s("S0"));

    Scenario {
        alphabet,
        states,
        table,
        initial: s("S0"),
        accepting: parse_list("S1"),
    }
}

#[test_log::test]
fn aab_is_rejected_in_s0() {
    let outcome = ends_in_a().run("aab").unwrap();

    assert!(!outcome.is_accepted());
    assert_eq!(outcome.final_state(), "S0");
    assert_eq!(outcome.path(), vec!["S0", "S1", "S1", "S0"]);
}

#[test]
fn ab_is_rejected() {
    let outcome = ends_in_a().run("ab").unwrap();

    assert!(!outcome.is_accepted());
    assert_eq!(outcome.path(), vec!["S0", "S1", "S0"]);
}

#[test]
fn a_is_accepted_in_s1() {
    let outcome = ends_in_a().run("a").unwrap();

    assert!(outcome.is_accepted());
    assert_eq!(outcome.final_state(), "S1");
    assert_eq!(outcome.path(), vec!["S0", "S1"]);
}

#[test]
fn foreign_symbol_fails_before_any_transition() {
    let err = ends_in_a().run("c").unwrap_err();

    assert_eq!(
        err,
        RunError::InvalidSymbol {
            symbol: 'c',
            state: s("S0"),
            consumed: 0
        }
    );
}

#[test_log::test]
fn missing_transition_fails_after_consuming_prefix() {
    let mut scenario = ends_in_a();
    scenario.table.unset(&s("S1"), "b");

    let err = scenario.run("ab").unwrap_err();

    assert_eq!(
        err,
        RunError::UndefinedTransition {
            state: s("S1"),
            symbol: 'b',
            consumed: 1
        }
    );
}

#[test]
fn corrected_input_can_be_rerun() {
    let scenario = ends_in_a();

    assert!(scenario.run("abc").is_err());
    assert!(scenario.run("aba").unwrap().is_accepted());
}

#[test]
fn table_presentation_matches_filled_cells() {
    let scenario = ends_in_a();
    assert_eq!(scenario.table.render_rows(), vec!["S0: S1: S0", "S1: S1: S0"]);
}
