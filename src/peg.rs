//! The PEG engine: expressions, rule registry, parse state, and evaluator.
//!
//! ## Modules
//!
//! - `expression` - the expression algebra and the builder functions
//! - `grammar` - the rule registry with forward/recursive references
//! - `state` - parse input, position, AST accumulator, checkpoints
//! - `ast` - the parse tree produced by successful named rules
//! - `error` - the non-recoverable error conditions
//! - `testing` - tree-shape assertion helpers for tests
//!
//! ## EBNF equivalence
//!
//! | EBNF             | builder            |
//! |------------------|--------------------|
//! | concatenation    | `sequence(...)`    |
//! | `A \| B \| C`    | `choice(...)`      |
//! | `[A]`            | `optional(...)`    |
//! | `{A}`            | `repeat(expr, 0)`  |
//! | `'text'`         | `literal("text")`  |
//! | pattern string   | `regex("pattern")` |

pub mod ast;
mod engine;
pub mod error;
pub mod expression;
pub mod grammar;
pub mod state;
pub mod testing;

// Re-export the public API at the module root
pub use ast::{AstNode, ParseNode, Terminal};
pub use error::ParseError;
pub use expression::{
    choice, literal, optional, predicate, regex, repeat, required, rule, sequence, silent,
    Expression,
};
pub use grammar::Grammar;
pub use state::{Input, ParseState, Token, Unit};
