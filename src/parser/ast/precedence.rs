//! Operator precedence table for filter expressions.
//!
//! This module centralizes binding power definitions for prefix and infix
//! operators. Binding powers equal the precedence tier, so a left-associative
//! operator at tier `n` has `(n, n + 1)` and the right-associative power
//! operator has `(15, 15)`.

use crate::SyntaxKind;

use super::{BinaryOp, UnaryOp};

/// Minimum binding power for the operand of a unary prefix operator.
///
/// Sits between power and multiplication: `-a ** b` is `-(a ** b)` while
/// `-a * b` is `(-a) * b`.
pub(crate) const UNARY_OPERAND_BP: u8 = 14;

/// Minimum binding power for the operand of a cast.
pub(crate) const CAST_OPERAND_BP: u8 = 13;

/// Left binding power of `in` and `not in`.
pub(crate) const MEMBERSHIP_BP: u8 = 9;

/// Left binding power of a chained range.
pub(crate) const RANGE_BP: u8 = 8;

/// Minimum binding power for the middle and upper operands of a range.
pub(crate) const RANGE_OPERAND_BP: u8 = 9;

/// Left binding power of the relational operators.
pub(crate) const RELATIONAL_BP: u8 = 7;

#[derive(Debug, Clone, Copy)]
pub(super) struct InfixEntry {
    pub l_bp: u8,
    pub r_bp: u8,
    pub op: BinaryOp,
}

const PREFIX_TABLE: &[(SyntaxKind, UnaryOp)] = &[
    (SyntaxKind::T_PLUS, UnaryOp::Plus),
    (SyntaxKind::T_MINUS, UnaryOp::Neg),
    (SyntaxKind::T_TILDE, UnaryOp::BitNot),
    (SyntaxKind::K_NOT, UnaryOp::Not),
];

const fn left(tier: u8, op: BinaryOp) -> InfixEntry {
    InfixEntry {
        l_bp: tier,
        r_bp: tier + 1,
        op,
    }
}

// `<` and `<=` are offered to range parsing before this table is consulted.
const INFIX_TABLE: &[(SyntaxKind, InfixEntry)] = &[
    (
        SyntaxKind::T_POW,
        InfixEntry {
            l_bp: 15,
            r_bp: 15,
            op: BinaryOp::Pow,
        },
    ),
    (SyntaxKind::T_STAR, left(12, BinaryOp::Mul)),
    (SyntaxKind::T_SLASH, left(12, BinaryOp::Div)),
    (SyntaxKind::T_PERCENT, left(12, BinaryOp::Mod)),
    (SyntaxKind::T_PLUS, left(11, BinaryOp::Add)),
    (SyntaxKind::T_MINUS, left(11, BinaryOp::Sub)),
    (SyntaxKind::T_SHL, left(10, BinaryOp::Shl)),
    (SyntaxKind::T_SHR, left(10, BinaryOp::Shr)),
    (SyntaxKind::T_LT, left(RELATIONAL_BP, BinaryOp::Lt)),
    (SyntaxKind::T_LTE, left(RELATIONAL_BP, BinaryOp::Lte)),
    (SyntaxKind::T_GT, left(RELATIONAL_BP, BinaryOp::Gt)),
    (SyntaxKind::T_GTE, left(RELATIONAL_BP, BinaryOp::Gte)),
    (SyntaxKind::T_EQEQ, left(6, BinaryOp::Eq)),
    (SyntaxKind::T_NEQ, left(6, BinaryOp::Neq)),
    (SyntaxKind::T_AMP, left(5, BinaryOp::BitAnd)),
    (SyntaxKind::T_CARET, left(4, BinaryOp::BitXor)),
    (SyntaxKind::T_PIPE, left(3, BinaryOp::BitOr)),
    (SyntaxKind::K_AND, left(2, BinaryOp::And)),
    (SyntaxKind::K_OR, left(1, BinaryOp::Or)),
];

/// Lookup the operand binding power and [`UnaryOp`] for a prefix operator.
pub(crate) fn prefix_binding_power(kind: SyntaxKind) -> Option<(u8, UnaryOp)> {
    PREFIX_TABLE
        .iter()
        .find_map(|(k, op)| (kind == *k).then_some((UNARY_OPERAND_BP, *op)))
}

/// Lookup the binding power and [`BinaryOp`] for an infix operator.
///
/// Returns the left and right binding powers along with the operator variant.
pub(crate) fn infix_binding_power(kind: SyntaxKind) -> Option<(u8, u8, BinaryOp)> {
    INFIX_TABLE
        .iter()
        .find_map(|(k, entry)| (kind == *k).then_some((entry.l_bp, entry.r_bp, entry.op)))
}

/// Whether `kind` is a membership operator, and if so whether it negates.
pub(crate) const fn membership_negation(kind: SyntaxKind) -> Option<bool> {
    match kind {
        SyntaxKind::K_IN => Some(false),
        SyntaxKind::T_NOT_IN => Some(true),
        _ => None,
    }
}
