//! Expression AST for filter expressions.
//!
//! The tree is produced by the Pratt parser in [`crate::parser::expression`]
//! and handed to callers by value. Every node owns its children, so the tree
//! carries no shared or cyclic references.

mod display;
mod expr;
mod literal;
mod precedence;
mod string_literal;

pub use expr::{BinaryOp, Expr, RangeOp, TypeName, UnaryOp};
pub use literal::{IntBase, Literal, LiteralError};
pub use string_literal::{EncodingPrefix, StringLiteral, UnescapeError};

pub(crate) use precedence::{
    CAST_OPERAND_BP, MEMBERSHIP_BP, RANGE_BP, RANGE_OPERAND_BP, RELATIONAL_BP,
    infix_binding_power, membership_negation, prefix_binding_power,
};
