//! Behavioral properties of the execution engine: ordered choice, effect
//! isolation on failure, repetition boundaries, sequence atomicity, forward
//! references, and the non-recoverable error conditions.

use pegkit::peg::testing::shape;
use pegkit::peg::{
    choice, literal, predicate, regex, repeat, required, rule, sequence, Grammar, ParseError,
    ParseState, Unit,
};
use proptest::prelude::*;
use rstest::rstest;
use std::sync::Arc;

#[test]
fn ordered_choice_is_deterministic() {
    // both alternatives match "aaa"; the first declared wins even though the
    // second would consume more input
    let mut grammar = Grammar::new();
    grammar.define("r", choice(vec![literal("a"), regex("a+").unwrap()]));
    let mut state = ParseState::from_text("aaa");
    assert_eq!(grammar.parse(&mut state), Ok(true));
    assert_eq!(state.position(), 1);
    assert_eq!(shape(&state.ast()[0]), r#"r("a")"#);

    // declaring them the other way around flips the outcome
    let mut grammar = Grammar::new();
    grammar.define("r", choice(vec![regex("a+").unwrap(), literal("a")]));
    let mut state = ParseState::from_text("aaa");
    assert_eq!(grammar.parse(&mut state), Ok(true));
    assert_eq!(shape(&state.ast()[0]), r#"r("aaa")"#);
}

#[test]
fn failed_branch_is_invisible_to_siblings() {
    // the first alternative consumes "ab" before failing; the second must
    // see the original position and a clean accumulator
    let mut grammar = Grammar::new();
    grammar.define(
        "r",
        choice(vec![
            sequence(vec![literal("a"), literal("b"), literal("X")]),
            literal("abc"),
        ]),
    );
    let mut state = ParseState::from_text("abc");
    assert_eq!(grammar.parse(&mut state), Ok(true));
    assert_eq!(state.position(), 3);
    assert_eq!(shape(&state.ast()[0]), r#"r("abc")"#);
}

#[rstest]
#[case("yyy", 0, true, 0)]
#[case("", 0, true, 0)]
#[case("xy", 2, false, 0)]
#[case("xxy", 2, true, 2)]
#[case("xxxx", 2, true, 4)]
fn repetition_boundaries(
    #[case] input: &str,
    #[case] minimum: usize,
    #[case] matched: bool,
    #[case] position: usize,
) {
    let mut grammar = Grammar::new();
    grammar.define("r", repeat(literal("x"), minimum));
    let mut state = ParseState::from_text(input);
    assert_eq!(grammar.parse(&mut state), Ok(matched));
    assert_eq!(state.position(), position);
}

#[test]
fn sequence_atomicity() {
    let mut grammar = Grammar::new();
    grammar.define("r", sequence(vec![literal("ab"), literal("cd")]));
    let mut state = ParseState::from_text("abXX");
    assert_eq!(grammar.parse(&mut state), Ok(false));
    assert_eq!(state.position(), 0);
    assert!(state.ast().is_empty());
}

#[test]
fn forward_reference_resolves_at_parse_time() {
    let mut grammar = Grammar::new();
    // "main" references "later" before it exists
    grammar.define("main", sequence(vec![literal("<"), rule("later"), literal(">")]));
    grammar.define("later", regex("[a-z]+").unwrap());

    let mut state = ParseState::from_text("<abc>");
    assert_eq!(grammar.parse(&mut state), Ok(true));
    assert_eq!(
        shape(&state.ast()[0]),
        r#"main("<" later("abc") ">")"#
    );
}

#[test]
fn recursive_rule_resolves_at_parse_time() {
    let mut grammar = Grammar::new();
    grammar.define(
        "value",
        choice(vec![
            literal("x"),
            sequence(vec![literal("("), rule("value"), literal(")")]),
        ]),
    );
    let mut state = ParseState::from_text("((x))");
    assert_eq!(grammar.parse(&mut state), Ok(true));
    assert!(state.is_exhausted());
    assert_eq!(
        shape(&state.ast()[0]),
        r#"value("(" value("(" value("x") ")") ")")"#
    );
}

#[test]
fn undefined_rule_aborts_despite_other_alternatives() {
    let mut grammar = Grammar::new();
    grammar.define("r", choice(vec![rule("missing"), literal("a")]));
    let mut state = ParseState::from_text("a");
    assert_eq!(
        grammar.parse(&mut state),
        Err(ParseError::UndefinedRule("missing".to_string()))
    );
}

#[test]
fn fatal_failure_is_not_recovered_by_choice() {
    let mut grammar = Grammar::new();
    grammar.define(
        "r",
        choice(vec![
            sequence(vec![
                literal("("),
                required(literal(")"), "missing closing parenthesis"),
            ]),
            literal("("),
        ]),
    );
    let mut state = ParseState::from_text("(");
    assert_eq!(
        grammar.parse(&mut state),
        Err(ParseError::FatalFailure {
            position: 1,
            reason: "missing closing parenthesis".to_string()
        })
    );
}

#[test]
fn grammar_is_shareable_across_threads() {
    let mut grammar = Grammar::new();
    grammar.define("word", regex("[a-z]+").unwrap());
    let grammar = Arc::new(grammar);

    let handles: Vec<_> = ["alpha", "beta"]
        .into_iter()
        .map(|input| {
            let grammar = Arc::clone(&grammar);
            std::thread::spawn(move || {
                let mut state = ParseState::from_text(input);
                assert_eq!(grammar.parse(&mut state), Ok(true));
                shape(&state.ast()[0])
            })
        })
        .collect();

    let mut results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    results.sort();
    assert_eq!(results, [r#"word("alpha")"#, r#"word("beta")"#]);
}

proptest! {
    /// Any failed parse leaves position and accumulator bit-identical to
    /// their pre-attempt values, no matter how much the attempt consumed
    /// before failing.
    #[test]
    fn failed_attempts_leave_no_trace(input in "[a-z]{0,16}") {
        let mut grammar = Grammar::new();
        grammar.define(
            "doomed",
            sequence(vec![
                repeat(
                    predicate("lower", |unit| {
                        matches!(unit, Unit::Char(c) if c.is_ascii_lowercase())
                    }),
                    0,
                ),
                // cannot appear in the generated input
                literal("!"),
            ]),
        );

        let mut state = ParseState::from_text(input);
        prop_assert_eq!(grammar.parse(&mut state), Ok(false));
        prop_assert_eq!(state.position(), 0);
        prop_assert!(state.ast().is_empty());
    }

    /// A successful parse of the whole input advances exactly to its end and
    /// captures exactly the input text.
    #[test]
    fn full_match_consumes_everything(input in "[0-9]{1,8}") {
        let mut grammar = Grammar::new();
        grammar.define("number", regex("[0-9]+").unwrap());

        let mut state = ParseState::from_text(input.clone());
        prop_assert_eq!(grammar.parse(&mut state), Ok(true));
        prop_assert!(state.is_exhausted());
        prop_assert_eq!(shape(&state.ast()[0]), format!("number(\"{}\")", input));
    }
}
