//! The recursive evaluator.
//!
//! Every evaluation — primitive or combinator — takes a checkpoint of the
//! parse state on entry and restores it exactly when the outcome is a
//! failure, so failed branches are invisible to siblings and ancestors. This
//! restore happens at *every* expression boundary, not only at named rules;
//! that is what makes ordered choice, optional, and repetition safe at
//! arbitrary nesting depth.
//!
//! Errors (`Err`) are not match failures: an undefined rule reference or a
//! `required` failure aborts the whole parse and is never caught by
//! backtracking — a choice propagates an error from one alternative instead
//! of trying the next.
//!
//! Known hazard, documented rather than enforced: an expression that can
//! succeed without consuming input (an optional, an empty literal) inside an
//! unbounded repetition loops forever. Bounding execution is the caller's
//! responsibility.

use super::error::ParseError;
use super::expression::Expression;
use super::grammar::Grammar;
use super::state::ParseState;

/// Evaluate `expression` against `state`. `Ok(true)` keeps the advanced
/// state; `Ok(false)` restores the state taken on entry, bit for bit.
pub(crate) fn evaluate(
    grammar: &Grammar,
    expression: &Expression,
    state: &mut ParseState,
) -> Result<bool, ParseError> {
    let checkpoint = state.checkpoint();
    let matched = attempt(grammar, expression, state)?;
    if !matched {
        state.restore(checkpoint);
    }
    Ok(matched)
}

fn attempt(
    grammar: &Grammar,
    expression: &Expression,
    state: &mut ParseState,
) -> Result<bool, ParseError> {
    match expression {
        Expression::Literal(text) => {
            let matched = state.match_literal(text);
            Ok(consume(state, matched))
        }
        Expression::Regex(matcher) => {
            let matched = state.match_regex(&matcher.compiled);
            Ok(consume(state, matched))
        }
        Expression::Predicate(matcher) => {
            let matched = state.match_predicate(|unit| (matcher.test)(unit));
            Ok(consume(state, matched))
        }
        Expression::Sequence(children) => {
            for child in children {
                if !evaluate(grammar, child, state)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Expression::Choice(children) => {
            for child in children {
                if evaluate(grammar, child, state)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Expression::Optional(child) => {
            evaluate(grammar, child, state)?;
            Ok(true)
        }
        Expression::Repeat { child, minimum } => {
            let mut count = 0usize;
            while evaluate(grammar, child, state)? {
                count += 1;
            }
            Ok(count >= *minimum)
        }
        Expression::Rule(name) => {
            let rule_expression = grammar.rule(name)?;
            let start = state.position();
            let mark = state.ast_len();
            if evaluate(grammar, rule_expression, state)? {
                state.group(name, mark, start..state.position());
                Ok(true)
            } else {
                Ok(false)
            }
        }
        Expression::Silent(child) => {
            let mark = state.ast_len();
            if evaluate(grammar, child, state)? {
                state.truncate_ast(mark);
                Ok(true)
            } else {
                Ok(false)
            }
        }
        Expression::Required { child, reason } => {
            if evaluate(grammar, child, state)? {
                Ok(true)
            } else {
                Err(ParseError::FatalFailure {
                    position: state.position(),
                    reason: reason.clone(),
                })
            }
        }
    }
}

/// Advance past a primitive match and record the capture as a terminal
fn consume(state: &mut ParseState, matched: Option<(String, usize)>) -> bool {
    match matched {
        Some((text, units)) => {
            let start = state.position();
            state.advance(units);
            state.push_terminal(text, start..state.position());
            true
        }
        None => false,
    }
}
