//! Helpers for constructing literal nodes in tests.

use crate::parser::ast::{Expr, Literal, StringLiteral};

/// Integer literal with the given source text.
#[must_use]
pub fn lit_int(text: &str) -> Literal {
    Literal::Integer(text.to_string())
}

/// Floating literal with the given source text.
#[must_use]
pub fn lit_float(text: &str) -> Literal {
    Literal::Float(text.to_string())
}

/// Boolean literal.
#[must_use]
pub const fn lit_bool(value: bool) -> Literal {
    Literal::Bool(value)
}

/// Unprefixed string literal with `body` written between the quotes.
#[must_use]
pub fn lit_str(body: &str) -> Literal {
    Literal::String(StringLiteral {
        prefix: None,
        body: body.to_string(),
    })
}

/// Construct an integer [`Expr::Literal`].
#[must_use]
pub fn int(text: &str) -> Expr {
    Expr::Literal(lit_int(text))
}

/// Construct a floating [`Expr::Literal`].
#[must_use]
pub fn float(text: &str) -> Expr {
    Expr::Literal(lit_float(text))
}

/// Construct a boolean [`Expr::Literal`].
#[must_use]
pub const fn boolean(value: bool) -> Expr {
    Expr::Literal(lit_bool(value))
}

/// Construct a string [`Expr::Literal`] from its escaped body.
#[must_use]
pub fn string(body: &str) -> Expr {
    Expr::Literal(lit_str(body))
}
