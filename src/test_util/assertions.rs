//! Assertion helpers for verifying parse results in tests.

use super::ErrorPattern;
use crate::error::{Error, LexErrorKind};
use crate::parse;
use crate::parser::ast::Expr;

/// Assert that `src` parses to `expected`.
///
/// # Panics
/// Panics if parsing fails or the tree differs.
#[track_caller]
pub fn assert_parses_to(src: &str, expected: &Expr) {
    match parse(src) {
        Ok(expr) => assert_eq!(&expr, expected, "unexpected tree for {src:?}"),
        Err(err) => panic!("failed to parse {src:?}: {err}"),
    }
}

/// Assert that two sources parse to identical trees.
///
/// # Panics
/// Panics if either source fails to parse or the trees differ.
#[track_caller]
pub fn assert_same_tree(lhs: &str, rhs: &str) {
    match (parse(lhs), parse(rhs)) {
        (Ok(a), Ok(b)) => assert_eq!(a, b, "{lhs:?} and {rhs:?} differ"),
        (a, b) => panic!("expected both to parse: {lhs:?} -> {a:?}, {rhs:?} -> {b:?}"),
    }
}

/// Assert that parsing `src` fails in the parser at `offset` with a message
/// containing `expected_pattern`.
///
/// # Panics
/// Panics if parsing succeeds, fails in the tokenizer, reports a different
/// offset or renders a message without the pattern.
#[track_caller]
pub fn assert_parse_error(src: &str, offset: usize, expected_pattern: impl Into<ErrorPattern>) {
    let pattern: ErrorPattern = expected_pattern.into();
    match parse(src) {
        Err(Error::Parse(err)) => {
            let rendered = err.to_string();
            assert!(
                pattern.matches(&rendered),
                "expected error to contain pattern '{pattern:?}', got '{rendered}'",
            );
            assert_eq!(err.offset, offset, "wrong offset for {src:?}: {rendered}");
        }
        other => panic!("expected a parse error for {src:?}, got {other:?}"),
    }
}

/// Assert that tokenizing `src` fails with `kind` at `offset`.
///
/// # Panics
/// Panics if `src` parses or fails for another reason.
#[track_caller]
pub fn assert_lex_error(src: &str, offset: usize, kind: LexErrorKind) {
    match parse(src) {
        Err(Error::Lex(err)) => {
            assert_eq!(err.kind, kind, "wrong lex error for {src:?}");
            assert_eq!(err.offset, offset, "wrong offset for {src:?}");
        }
        other => panic!("expected a lex error for {src:?}, got {other:?}"),
    }
}
