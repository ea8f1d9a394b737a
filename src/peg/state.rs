//! Parse input, cursor position, AST accumulator, and checkpoints.
//!
//! A [`ParseState`] is created once per parse invocation and mutated only by
//! the evaluator during that invocation. The position is a byte offset for
//! text input and a token index for token input; it is monotonically
//! non-decreasing across a successful parse. Whenever a sub-expression fails,
//! position and accumulator are restored to the checkpoint taken before the
//! attempt, so failed attempts leave no observable trace.
//!
//! A `ParseState` must not be shared across concurrent invocations; a fully
//! defined [`Grammar`](super::grammar::Grammar) may be.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::ast::{AstNode, ParseNode, Terminal};

/// A pre-classified input unit for token-stream parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Classification assigned by the tokenizer (e.g. "blank", "header")
    pub kind: String,
    /// The raw text of the token
    pub text: String,
}

impl Token {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

/// The input a parse runs against
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Raw text, matched byte-wise from the current position
    Text(String),
    /// A pre-built token sequence, matched one token per step
    Tokens(Vec<Token>),
}

/// The current input unit, as seen by a predicate matcher
#[derive(Debug, Clone, Copy)]
pub enum Unit<'a> {
    Char(char),
    Token(&'a Token),
}

impl Unit<'_> {
    /// The text this unit contributes when captured
    pub fn text(&self) -> String {
        match self {
            Unit::Char(c) => c.to_string(),
            Unit::Token(token) => token.text.clone(),
        }
    }
}

/// Snapshot of the mutable parse state, taken before a speculative attempt
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    position: usize,
    ast_len: usize,
}

/// The mutable state of one parse invocation
#[derive(Debug)]
pub struct ParseState {
    input: Input,
    position: usize,
    ast: Vec<ParseNode>,
}

impl ParseState {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            input: Input::Text(text.into()),
            position: 0,
            ast: Vec::new(),
        }
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            input: Input::Tokens(tokens),
            position: 0,
            ast: Vec::new(),
        }
    }

    /// Current cursor: a byte offset for text, a token index for tokens
    pub fn position(&self) -> usize {
        self.position
    }

    /// The nodes produced so far; after a top-level success this holds the
    /// single root node
    pub fn ast(&self) -> &[ParseNode] {
        &self.ast
    }

    pub fn into_ast(self) -> Vec<ParseNode> {
        self.ast
    }

    /// True when no input remains at the current position
    pub fn is_exhausted(&self) -> bool {
        match &self.input {
            Input::Text(text) => self.position >= text.len(),
            Input::Tokens(tokens) => self.position >= tokens.len(),
        }
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            ast_len: self.ast.len(),
        }
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.ast.truncate(checkpoint.ast_len);
    }

    pub(crate) fn ast_len(&self) -> usize {
        self.ast.len()
    }

    pub(crate) fn truncate_ast(&mut self, len: usize) {
        self.ast.truncate(len);
    }

    /// Group everything pushed since `mark` into a node named after a rule
    pub(crate) fn group(&mut self, name: &str, mark: usize, span: Range<usize>) {
        let children = self.ast.split_off(mark);
        self.ast
            .push(ParseNode::Node(AstNode::new(name, children, span)));
    }

    pub(crate) fn advance(&mut self, units: usize) {
        self.position += units;
    }

    pub(crate) fn push_terminal(&mut self, text: String, span: Range<usize>) {
        self.ast.push(ParseNode::Terminal(Terminal::new(text, span)));
    }

    /// Match `text` at the current position. Returns the capture and the
    /// number of position units consumed. Empty remaining input never
    /// matches, not even an empty literal.
    pub(crate) fn match_literal(&self, text: &str) -> Option<(String, usize)> {
        match &self.input {
            Input::Text(source) => {
                if self.position >= source.len() {
                    return None;
                }
                source[self.position..]
                    .starts_with(text)
                    .then(|| (text.to_string(), text.len()))
            }
            Input::Tokens(tokens) => {
                let token = tokens.get(self.position)?;
                token
                    .text
                    .starts_with(text)
                    .then(|| (token.text.clone(), 1))
            }
        }
    }

    /// Match an anchored regex at the current position. A zero-length match
    /// counts as failure. For token input the pattern is applied to the
    /// current token's text and the whole token is consumed.
    pub(crate) fn match_regex(&self, compiled: &Regex) -> Option<(String, usize)> {
        match &self.input {
            Input::Text(source) => {
                if self.position >= source.len() {
                    return None;
                }
                let found = compiled.find(&source[self.position..])?;
                if found.end() == 0 {
                    return None;
                }
                Some((found.as_str().to_string(), found.end()))
            }
            Input::Tokens(tokens) => {
                let token = tokens.get(self.position)?;
                let found = compiled.find(&token.text)?;
                if found.end() == found.start() {
                    return None;
                }
                Some((token.text.clone(), 1))
            }
        }
    }

    /// Apply a predicate to the current unit (one char or one token)
    pub(crate) fn match_predicate<F>(&self, test: F) -> Option<(String, usize)>
    where
        F: Fn(&Unit<'_>) -> bool,
    {
        match &self.input {
            Input::Text(source) => {
                let c = source[self.position..].chars().next()?;
                test(&Unit::Char(c)).then(|| (c.to_string(), c.len_utf8()))
            }
            Input::Tokens(tokens) => {
                let token = tokens.get(self.position)?;
                test(&Unit::Token(token)).then(|| (token.text.clone(), 1))
            }
        }
    }
}
