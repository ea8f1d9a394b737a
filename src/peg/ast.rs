//! The parse tree produced by successful named-rule matches.
//!
//! A node is created exactly when a *named* rule succeeds; anonymous
//! combinator successes contribute their captures as children of the nearest
//! enclosing named node. Nodes are immutable once constructed and owned by
//! their parent; the root node ends up in the parse state's AST accumulator
//! after a top-level success.
//!
//! Spans are byte ranges for text input and token-index ranges for token
//! input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Indentation width used by [`ParseNode::dump`]
const DUMP_INDENT: usize = 4;

/// One element of a parse tree: a named-rule node or a captured terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParseNode {
    Node(AstNode),
    Terminal(Terminal),
}

/// A successful named-rule match: the rule's name plus its ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstNode {
    pub name: String,
    pub children: Vec<ParseNode>,
    pub span: Range<usize>,
}

/// The text consumed by a single matching primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    pub text: String,
    pub span: Range<usize>,
}

impl AstNode {
    pub fn new(name: impl Into<String>, children: Vec<ParseNode>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            children,
            span,
        }
    }
}

impl Terminal {
    pub fn new(text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

impl ParseNode {
    /// The rule name for a node, `None` for a terminal
    pub fn name(&self) -> Option<&str> {
        match self {
            ParseNode::Node(node) => Some(&node.name),
            ParseNode::Terminal(_) => None,
        }
    }

    /// The input range this element covers
    pub fn span(&self) -> &Range<usize> {
        match self {
            ParseNode::Node(node) => &node.span,
            ParseNode::Terminal(terminal) => &terminal.span,
        }
    }

    pub fn as_node(&self) -> Option<&AstNode> {
        match self {
            ParseNode::Node(node) => Some(node),
            ParseNode::Terminal(_) => None,
        }
    }

    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            ParseNode::Node(_) => None,
            ParseNode::Terminal(terminal) => Some(terminal),
        }
    }

    /// Render the tree depth-first: each node as `name:` with its children
    /// indented one level further, terminals as the captured text in quotes.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, level: usize) {
        let indent = " ".repeat(level * DUMP_INDENT);
        match self {
            ParseNode::Node(node) => {
                out.push_str(&indent);
                out.push_str(&node.name);
                out.push_str(":\n");
                for child in &node.children {
                    child.dump_into(out, level + 1);
                }
            }
            ParseNode::Terminal(terminal) => {
                out.push_str(&indent);
                out.push('"');
                out.push_str(&terminal.text);
                out.push_str("\"\n");
            }
        }
    }

    /// Serialize the tree as a pretty-printed JSON snapshot
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
