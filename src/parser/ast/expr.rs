//! Expression tree nodes and operator enums.
//!
//! Parentheses leave no trace in the tree: `(a + b)` and `a + b` produce the
//! same node. Membership terms are stored as resolved literals in source
//! order, duplicates included.

use crate::SyntaxKind;

use super::Literal;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Unary plus, `+`.
    Plus,
    /// Arithmetic negation, `-`.
    Neg,
    /// Bitwise complement, `~`.
    BitNot,
    /// Logical negation, `!` or `not`.
    Not,
}

impl UnaryOp {
    /// Canonical source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::BitNot => "~",
            Self::Not => "!",
        }
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Pow,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
    BitAnd,
    BitXor,
    BitOr,
    /// Logical conjunction, `and` or `&&`.
    And,
    /// Logical disjunction, `or` or `||`.
    Or,
}

impl BinaryOp {
    /// Canonical source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pow => "**",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Comparison operators allowed on either side of a chained range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOp {
    Lt,
    Lte,
}

impl RangeOp {
    /// Canonical source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }

    /// The range operator spelled by `kind`, if any.
    #[must_use]
    pub const fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::T_LT => Some(Self::Lt),
            SyntaxKind::T_LTE => Some(Self::Lte),
            _ => None,
        }
    }

    /// The equivalent relational operator.
    #[must_use]
    pub const fn as_binary(self) -> BinaryOp {
        match self {
            Self::Lt => BinaryOp::Lt,
            Self::Lte => BinaryOp::Lte,
        }
    }
}

/// Target types of a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
}

impl TypeName {
    /// The keyword naming this type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// The type named by a keyword token, if `kind` is one.
    #[must_use]
    pub const fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::K_BOOL => Some(Self::Bool),
            SyntaxKind::K_INT8 => Some(Self::Int8),
            SyntaxKind::K_INT16 => Some(Self::Int16),
            SyntaxKind::K_INT32 => Some(Self::Int32),
            SyntaxKind::K_INT64 => Some(Self::Int64),
            SyntaxKind::K_FLOAT => Some(Self::Float),
            SyntaxKind::K_DOUBLE => Some(Self::Double),
            _ => None,
        }
    }
}

/// Parsed filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),
    /// A field reference, resolved against a schema downstream.
    Identifier(String),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Cast {
        ty: TypeName,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Chained comparison `lower lower_op middle upper_op upper`.
    Range {
        lower: Box<Expr>,
        lower_op: RangeOp,
        middle: Box<Expr>,
        upper_op: RangeOp,
        upper: Box<Expr>,
    },
    /// `expr in [terms]`, or `expr not in [terms]` when `negated`.
    Membership {
        negated: bool,
        expr: Box<Expr>,
        terms: Vec<Literal>,
    },
}

impl Expr {
    /// Display the expression as a simple S-expression for tests.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Self::Literal(lit) => lit.to_sexpr(),
            Self::Identifier(name) => name.clone(),
            Self::Unary { op, expr } => format!("({} {})", op.symbol(), expr.to_sexpr()),
            Self::Cast { ty, expr } => format!("(cast {} {})", ty.keyword(), expr.to_sexpr()),
            Self::Binary { op, lhs, rhs } => {
                format!("({} {} {})", op.symbol(), lhs.to_sexpr(), rhs.to_sexpr())
            }
            Self::Range {
                lower,
                lower_op,
                middle,
                upper_op,
                upper,
            } => format!(
                "(range {} {} {} {} {})",
                lower.to_sexpr(),
                lower_op.symbol(),
                middle.to_sexpr(),
                upper_op.symbol(),
                upper.to_sexpr()
            ),
            Self::Membership {
                negated,
                expr,
                terms,
            } => {
                let op = if *negated { "not-in" } else { "in" };
                let terms = terms
                    .iter()
                    .map(Literal::to_sexpr)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("({op} {} [{terms}])", expr.to_sexpr())
            }
        }
    }

    /// Returns `true` when the tree references no field.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Literal(_) => true,
            Self::Identifier(_) => false,
            Self::Unary { expr, .. } | Self::Cast { expr, .. } | Self::Membership { expr, .. } => {
                expr.is_constant()
            }
            Self::Binary { lhs, rhs, .. } => lhs.is_constant() && rhs.is_constant(),
            Self::Range {
                lower,
                middle,
                upper,
                ..
            } => lower.is_constant() && middle.is_constant() && upper.is_constant(),
        }
    }
}
