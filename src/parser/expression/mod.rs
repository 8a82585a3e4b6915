//! Pratt parser for filter expressions.
//!
//! Provides [`parse_expression`], a hand-rolled precedence-climbing parser
//! over the tokenizer's output. The implementation is split across
//! submodules: [`pratt`] hosts the core parser and entry point, [`prefix`]
//! handles literals, identifiers, parentheses, casts and unary operators,
//! [`infix`] folds binary, range and membership operators and [`membership`]
//! reads bracketed term lists.

mod infix;
mod membership;
mod pratt;
mod prefix;
mod token_stream;

pub use pratt::parse_expression;

pub(crate) use pratt::parse_token_slice;

use pratt::Pratt;
