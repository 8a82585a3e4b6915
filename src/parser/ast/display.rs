//! Source rendering for expression trees.
//!
//! Every compound node is wrapped in parentheses, so the output re-parses to
//! the same tree regardless of the precedence table.

use std::fmt;

use super::{Expr, TypeName};

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::Identifier(name) => f.write_str(name),
            // `- -x` must not collapse into a token the lexer would merge.
            Self::Unary { op, expr } => write!(f, "{}({expr})", op.symbol()),
            Self::Cast { ty, expr } => write!(f, "({ty})({expr})"),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Self::Range {
                lower,
                lower_op,
                middle,
                upper_op,
                upper,
            } => write!(
                f,
                "({lower} {} {middle} {} {upper})",
                lower_op.symbol(),
                upper_op.symbol()
            ),
            Self::Membership {
                negated,
                expr,
                terms,
            } => {
                let op = if *negated { "not in" } else { "in" };
                write!(f, "({expr} {op} [")?;
                for (idx, term) in terms.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{term}")?;
                }
                f.write_str("])")
            }
        }
    }
}
