//! Shared test utilities for integration tests.
//!
//! These helpers construct AST nodes and run the public entry points. They
//! mirror a subset of the `filterlang::test_util` module without requiring the
//! `test-support` feature, so integration tests compile against the published
//! library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use filterlang::{
    Error, SyntaxKind, parse, tokenize_with_trivia,
    ast::{BinaryOp, Expr, Literal, StringLiteral},
};

/// Construct an integer [`Expr::Literal`].
#[must_use]
pub fn int(text: &str) -> Expr {
    Expr::Literal(Literal::Integer(text.into()))
}

/// Construct a string [`Expr::Literal`] from its escaped body.
#[must_use]
pub fn string(body: &str) -> Expr {
    Expr::Literal(Literal::String(StringLiteral {
        prefix: None,
        body: body.into(),
    }))
}

/// Construct a field reference.
#[must_use]
pub fn ident(name: &str) -> Expr {
    Expr::Identifier(name.into())
}

/// Construct an infix operation.
#[must_use]
pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

/// Parse `src`, panicking with the rendered error on failure.
#[track_caller]
pub fn parse_ok(src: &str) -> Expr {
    parse(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

/// Parse `src`, panicking if it succeeds.
#[track_caller]
pub fn parse_err(src: &str) -> Error {
    match parse(src) {
        Ok(expr) => panic!("expected {src:?} to fail, parsed {}", expr.to_sexpr()),
        Err(err) => err,
    }
}

/// Token kinds of `src`, trivia included.
#[track_caller]
pub fn kinds_with_trivia(src: &str) -> Vec<SyntaxKind> {
    tokenize_with_trivia(src)
        .unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}
