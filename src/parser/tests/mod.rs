//! Tests for the filter expression parser.

mod operator_precedence;
mod prefix_forms;

use super::ast::Expr;
use super::parse;

/// Parse `src`, panicking with the rendered error on failure.
#[track_caller]
fn parse_ok(src: &str) -> Expr {
    match parse(src) {
        Ok(expr) => expr,
        Err(err) => panic!("failed to parse {src:?}: {err}"),
    }
}

/// Parse `src` and render the tree as an S-expression.
#[track_caller]
fn sexpr(src: &str) -> String {
    parse_ok(src).to_sexpr()
}
