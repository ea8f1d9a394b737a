//! The rule registry.
//!
//! A [`Grammar`] maps rule names to expression trees. Names may be referenced
//! (via `rule("name")`) before their defining `define` call — references are
//! resolved by registry lookup at evaluation time, so late and circular
//! definitions are legal as long as every referenced name is defined before
//! the grammar is executed. No validation is performed at definition time;
//! an undefined reference surfaces as [`ParseError::UndefinedRule`] when it
//! is reached during a parse.
//!
//! Once fully defined, a grammar is read-only during execution and may be
//! shared across threads and reused by any number of independent parse
//! states.

use std::collections::HashMap;

use super::engine;
use super::error::ParseError;
use super::expression::Expression;
use super::state::ParseState;

/// A namespace of named rules; the first rule defined is the default entry
/// point
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: HashMap<String, Expression>,
    entry: Option<String>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `expression` under `name`.
    ///
    /// Redefining an existing name silently overwrites it (last write wins).
    /// The first name ever defined becomes the default entry rule.
    pub fn define(&mut self, name: impl Into<String>, expression: Expression) {
        let name = name.into();
        if self.entry.is_none() {
            self.entry = Some(name.clone());
        }
        self.rules.insert(name, expression);
    }

    /// The default entry rule, if any rule has been defined
    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub(crate) fn rule(&self, name: &str) -> Result<&Expression, ParseError> {
        self.rules
            .get(name)
            .ok_or_else(|| ParseError::UndefinedRule(name.to_string()))
    }

    /// Run the default entry rule against `state`.
    ///
    /// Returns `Ok(true)` on success, with the root node in the state's AST
    /// accumulator; `Ok(false)` on ordinary match failure, leaving the state
    /// untouched; `Err` for the non-recoverable conditions.
    pub fn parse(&self, state: &mut ParseState) -> Result<bool, ParseError> {
        let entry = self.entry.clone().ok_or(ParseError::EmptyGrammar)?;
        self.parse_rule(&entry, state)
    }

    /// Run a specific named rule against `state`
    pub fn parse_rule(&self, name: &str, state: &mut ParseState) -> Result<bool, ParseError> {
        engine::evaluate(self, &Expression::Rule(name.to_string()), state)
    }
}
