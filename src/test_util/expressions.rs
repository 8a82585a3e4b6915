//! Helpers for constructing expression nodes in tests.

use super::Name;
use crate::parser::ast::{BinaryOp, Expr, Literal, RangeOp, TypeName, UnaryOp};

/// Construct a field reference [`Expr::Identifier`].
///
/// Accepts any type convertible into [`Name`].
#[must_use]
pub fn ident(name: impl Into<Name>) -> Expr {
    let name: Name = name.into();
    Expr::Identifier(name.0)
}

/// Construct a prefix operation [`Expr::Unary`].
#[must_use]
pub fn unary(op: UnaryOp, expr: Expr) -> Expr {
    Expr::Unary {
        op,
        expr: Box::new(expr),
    }
}

/// Construct an infix operation [`Expr::Binary`].
#[must_use]
pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

/// Construct a cast [`Expr::Cast`].
#[must_use]
pub fn cast(ty: TypeName, expr: Expr) -> Expr {
    Expr::Cast {
        ty,
        expr: Box::new(expr),
    }
}

/// Construct a chained comparison [`Expr::Range`].
#[must_use]
pub fn range(lower: Expr, lower_op: RangeOp, middle: Expr, upper_op: RangeOp, upper: Expr) -> Expr {
    Expr::Range {
        lower: Box::new(lower),
        lower_op,
        middle: Box::new(middle),
        upper_op,
        upper: Box::new(upper),
    }
}

/// Construct an `in` or, when `negated`, a `not in` [`Expr::Membership`].
#[must_use]
pub fn membership(negated: bool, expr: Expr, terms: Vec<Literal>) -> Expr {
    Expr::Membership {
        negated,
        expr: Box::new(expr),
        terms,
    }
}
