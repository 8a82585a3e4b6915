//! Library crate for filterlang.
//!
//! Tokenises and parses typed filter expressions such as
//! `"age" >= 3 and "score" in [1, 2, 3]` into an [`ast::Expr`] tree.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod language;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use config::ParseOptions;
pub use error::{Error, Found, LexError, LexErrorKind, ParseError, ParseErrorKind};
pub use language::SyntaxKind;
pub use parser::{ast, parse, parse_tokens, parse_with_options};
pub use tokenizer::{Span, Token, tokenize, tokenize_with_trivia};
