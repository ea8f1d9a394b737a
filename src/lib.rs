//! # pegkit
//!
//! A small parsing-expression-grammar (PEG) engine. Grammars are built
//! programmatically from matching primitives (literal, regex, predicate) and
//! combinators (sequence, ordered choice, optional, bounded repetition),
//! registered under rule names, and executed against either raw text or a
//! pre-tokenized stream to produce a parse tree.
//!
//! Alternation is ordered (first match wins) and every failed attempt is
//! fully backtracked: a failing sub-expression leaves the parse state exactly
//! as it found it.
//!
//! ## Example
//!
//! ```
//! use pegkit::peg::{choice, literal, sequence, Grammar, ParseState};
//!
//! let mut grammar = Grammar::new();
//! grammar.define(
//!     "greeting",
//!     sequence(vec![
//!         choice(vec![literal("hi"), literal("hello")]),
//!         literal("!"),
//!     ]),
//! );
//!
//! let mut state = ParseState::from_text("hello!");
//! assert_eq!(grammar.parse(&mut state), Ok(true));
//!
//! let root = &state.ast()[0];
//! assert_eq!(root.dump(), "greeting:\n    \"hello\"\n    \"!\"\n");
//! ```

pub mod peg;
