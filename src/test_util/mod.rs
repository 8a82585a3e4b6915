//! Helpers for constructing expression nodes and asserting parser errors in
//! tests.
//!
//! These functions reduce boilerplate when asserting over [`Expr`] trees and
//! verifying that failures surface the right kind and offset.
//!
//! [`Expr`]: crate::parser::ast::Expr

mod assertions;
mod expressions;
mod literals;

pub use assertions::{assert_lex_error, assert_parse_error, assert_parses_to, assert_same_tree};
pub use expressions::{binary, cast, ident, membership, range, unary};
pub use literals::{boolean, float, int, lit_bool, lit_float, lit_int, lit_str, string};

use crate::{SyntaxKind, tokenize_with_trivia};

/// Tokenize `src` and return only the token kinds, trivia included.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use filterlang::{SyntaxKind, test_util::kinds};
/// assert_eq!(kinds("a b")[1], SyntaxKind::T_WHITESPACE);
/// # }
/// ```
///
/// # Panics
/// Panics if `src` does not tokenize.
#[must_use]
#[track_caller]
pub fn kinds(src: &str) -> Vec<SyntaxKind> {
    match tokenize_with_trivia(src) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("failed to tokenize {src:?}: {err}"),
    }
}

/// Typed wrapper for field names.
#[derive(Debug, Clone)]
pub struct Name(pub(crate) String);

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Expected fragment of a rendered error message.
#[derive(Debug, Clone)]
pub enum ErrorPattern {
    Custom(String),
}

impl From<&str> for ErrorPattern {
    fn from(s: &str) -> Self {
        Self::Custom(s.to_string())
    }
}

impl ErrorPattern {
    fn matches(&self, rendered: &str) -> bool {
        match self {
            Self::Custom(fragment) => rendered.contains(fragment.as_str()),
        }
    }
}
