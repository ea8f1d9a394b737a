//! Error types for grammar construction and parse execution.
//!
//! Ordinary match failure is not an error: it is the `Ok(false)` outcome of
//! evaluation, and an enclosing choice, optional, or repetition recovers from
//! it by backtracking. The variants here are the conditions that reject an
//! expression at construction time or abort a parse outright; none of them is
//! ever recovered by backtracking.

use std::fmt;

/// Errors that reject an expression or abort a parse
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A rule name was referenced during evaluation but never defined
    UndefinedRule(String),
    /// `parse` was invoked on a grammar with no rules
    EmptyGrammar,
    /// The `regex` builder was given a pattern that does not compile
    InvalidPattern { pattern: String, message: String },
    /// A `required` expression failed; the parse is broken at `position`
    FatalFailure { position: usize, reason: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UndefinedRule(name) => write!(f, "Rule '{}' is not defined", name),
            ParseError::EmptyGrammar => write!(f, "Grammar has no rules"),
            ParseError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid pattern '{}': {}", pattern, message)
            }
            ParseError::FatalFailure { position, reason } => {
                write!(f, "Fatal failure at position {}: {}", position, reason)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_undefined_rule() {
        let error = ParseError::UndefinedRule("factor".to_string());
        assert_eq!(error.to_string(), "Rule 'factor' is not defined");
    }

    #[test]
    fn test_display_fatal_failure() {
        let error = ParseError::FatalFailure {
            position: 12,
            reason: "missing closing parenthesis".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Fatal failure at position 12: missing closing parenthesis"
        );
    }

    #[test]
    fn test_display_invalid_pattern() {
        let error = ParseError::InvalidPattern {
            pattern: "[".to_string(),
            message: "unclosed character class".to_string(),
        };
        assert!(error.to_string().starts_with("Invalid pattern '['"));
    }
}
