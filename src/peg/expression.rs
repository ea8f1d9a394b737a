//! The expression algebra and its builder functions.
//!
//! Expressions are built with explicit builders composed by ordinary function
//! application — there is no operator overloading and no implicit coercion of
//! bare strings into matchers. `rule("name")` may reference a rule before it
//! is defined; the name is resolved by registry lookup when the reference is
//! evaluated, which is what makes forward and mutually-recursive references
//! work.

use regex::Regex;
use std::fmt;
use std::sync::Arc;

use super::error::ParseError;
use super::state::Unit;

/// One node of an expression tree
#[derive(Debug, Clone)]
pub enum Expression {
    /// Match a literal at the current position
    Literal(String),
    /// Match a regex anchored at the current position
    Regex(RegexMatcher),
    /// Match the current unit against an arbitrary predicate
    Predicate(PredicateMatcher),
    /// All children in order; atomic on failure
    Sequence(Vec<Expression>),
    /// Ordered alternation; the first child that matches wins
    Choice(Vec<Expression>),
    /// Zero or one occurrence of the child
    Optional(Box<Expression>),
    /// Greedy repetition; succeeds iff at least `minimum` repetitions matched
    Repeat {
        child: Box<Expression>,
        minimum: usize,
    },
    /// Reference to a named rule, resolved at evaluation time
    Rule(String),
    /// Evaluate the child but discard any AST output it produced
    Silent(Box<Expression>),
    /// Escalate the child's failure to a fatal error
    Required {
        child: Box<Expression>,
        reason: String,
    },
}

/// A regex pattern compiled once at construction, anchored at the match
/// position
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    pub(crate) pattern: String,
    pub(crate) compiled: Regex,
}

/// A caller-supplied predicate over the current input unit
#[derive(Clone)]
pub struct PredicateMatcher {
    pub(crate) label: String,
    pub(crate) test: Arc<dyn Fn(&Unit<'_>) -> bool + Send + Sync>,
}

impl RegexMatcher {
    /// The source pattern, as given to the `regex` builder
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl PredicateMatcher {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for PredicateMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateMatcher")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Match `text` exactly at the current position (for token input: a token
/// whose text starts with `text`, consuming the whole token)
pub fn literal(text: impl Into<String>) -> Expression {
    Expression::Literal(text.into())
}

/// Match `pattern` anchored at the current position.
///
/// The pattern is compiled once, here; an invalid pattern is rejected with
/// [`ParseError::InvalidPattern`]. A zero-length match counts as failure, so
/// patterns like `" *"` cannot produce zero-width successes — wrap them in
/// [`optional`] instead.
pub fn regex(pattern: &str) -> Result<Expression, ParseError> {
    let compiled =
        Regex::new(&format!("^(?:{})", pattern)).map_err(|e| ParseError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
    Ok(Expression::Regex(RegexMatcher {
        pattern: pattern.to_string(),
        compiled,
    }))
}

/// Match the current unit (one char or one token) iff `test` returns true.
///
/// The label identifies the matcher in debug output.
pub fn predicate<F>(label: impl Into<String>, test: F) -> Expression
where
    F: Fn(&Unit<'_>) -> bool + Send + Sync + 'static,
{
    Expression::Predicate(PredicateMatcher {
        label: label.into(),
        test: Arc::new(test),
    })
}

/// Concatenation: every child must match, left to right
pub fn sequence(children: Vec<Expression>) -> Expression {
    Expression::Sequence(children)
}

/// Ordered alternation: the first child that matches wins, even when a later
/// child would consume more input
pub fn choice(children: Vec<Expression>) -> Expression {
    Expression::Choice(children)
}

/// Zero or one occurrence; always succeeds
pub fn optional(child: Expression) -> Expression {
    Expression::Optional(Box::new(child))
}

/// At least `minimum` occurrences, matched greedily. `repeat(expr, 0)` is
/// EBNF `{expr}` and always succeeds.
pub fn repeat(child: Expression, minimum: usize) -> Expression {
    Expression::Repeat {
        child: Box::new(child),
        minimum,
    }
}

/// Reference a named rule. The rule may be defined later, as long as it is
/// defined before the grammar is executed.
pub fn rule(name: impl Into<String>) -> Expression {
    Expression::Rule(name.into())
}

/// Evaluate `child` normally but discard the captures it produced. Position
/// advance is kept; use this for structural noise such as whitespace.
pub fn silent(child: Expression) -> Expression {
    Expression::Silent(Box::new(child))
}

/// Escalate the child's ordinary failure to [`ParseError::FatalFailure`],
/// aborting the whole parse. Use at "this must match or the parse is broken"
/// points, e.g. an unterminated fenced block.
pub fn required(child: Expression, reason: impl Into<String>) -> Expression {
    Expression::Required {
        child: Box::new(child),
        reason: reason.into(),
    }
}
