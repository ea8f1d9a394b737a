//! Tree-shape assertion helpers.
//!
//! Asserting node counts or single attributes tells you little; what a
//! grammar test wants is assurance on the whole tree shape in one comparison.
//! [`shape`] renders a tree as a compact single line — a node as
//! `name(child child ...)`, a terminal as its quoted text — so a test can
//! compare the entire structure against one expected string:
//!
//! ```
//! use pegkit::peg::{literal, sequence, Grammar, ParseState};
//! use pegkit::peg::testing::shape;
//!
//! let mut grammar = Grammar::new();
//! grammar.define("pair", sequence(vec![literal("a"), literal("b")]));
//! let mut state = ParseState::from_text("ab");
//! assert_eq!(grammar.parse(&mut state), Ok(true));
//! assert_eq!(shape(&state.ast()[0]), r#"pair("a" "b")"#);
//! ```

use super::ast::ParseNode;

/// Render one tree as a compact single-line shape string
pub fn shape(node: &ParseNode) -> String {
    match node {
        ParseNode::Node(inner) => {
            let children: Vec<String> = inner.children.iter().map(shape).collect();
            format!("{}({})", inner.name, children.join(" "))
        }
        ParseNode::Terminal(terminal) => format!("\"{}\"", terminal.text),
    }
}

/// Render a slice of trees, space-separated
pub fn shapes(nodes: &[ParseNode]) -> String {
    let rendered: Vec<String> = nodes.iter().map(shape).collect();
    rendered.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peg::ast::{AstNode, Terminal};

    #[test]
    fn test_shape_rendering() {
        let tree = ParseNode::Node(AstNode::new(
            "number",
            vec![ParseNode::Terminal(Terminal::new("42", 0..2))],
            0..2,
        ));
        assert_eq!(shape(&tree), r#"number("42")"#);
    }

    #[test]
    fn test_shape_of_empty_node() {
        let tree = ParseNode::Node(AstNode::new("empty", vec![], 3..3));
        assert_eq!(shape(&tree), "empty()");
    }

    #[test]
    fn test_shapes_joins_roots() {
        let nodes = vec![
            ParseNode::Terminal(Terminal::new("a", 0..1)),
            ParseNode::Terminal(Terminal::new("b", 1..2)),
        ];
        assert_eq!(shapes(&nodes), r#""a" "b""#);
    }
}
