//! Constant folding over expression trees.
//!
//! Membership lists only admit constants, but a term may be written as any
//! expression over literals: `-1`, `(int8) 300`, `1 << 4`. [`evaluate`] folds
//! such a tree into a [`Value`] and [`Value::into_literal`] turns the result
//! back into a [`Literal`] for the AST.
//!
//! Integers and floats promote the way most C-family languages do: an
//! operation with one float operand is carried out in `f64`, otherwise in
//! checked `i64`. Booleans take part in arithmetic as `0` and `1`.

use std::cmp::Ordering;
use std::num::FpCategory;

use crate::error::ParseErrorKind;
use crate::parser::ast::{
    BinaryOp, Expr, Literal, LiteralError, StringLiteral, TypeName, UnaryOp, UnescapeError,
};

/// Result of folding a constant expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Failure to fold an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstantError {
    /// The expression references a field.
    #[error("`{0}` is not a constant")]
    NotConstant(String),
    #[error(transparent)]
    Literal(#[from] LiteralError),
    #[error(transparent)]
    Unescape(#[from] UnescapeError),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in `{0}`")]
    Overflow(&'static str),
    #[error("operator `{op}` expects {expected}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
    },
    #[error("result is not a finite number")]
    NonFinite,
}

/// Numeric view of a non-string value.
#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i64),
    Float(f64),
}

const NUMERIC: &str = "numeric operands";
const INTEGRAL: &str = "integer or boolean operands";

impl Value {
    /// Render the value as a literal node.
    ///
    /// Integers and floats are written in canonical decimal form; strings are
    /// re-escaped.
    ///
    /// # Errors
    /// Returns [`ConstantError::NonFinite`] for infinite or NaN floats, which
    /// have no literal spelling.
    pub fn into_literal(self) -> Result<Literal, ConstantError> {
        Ok(match self {
            Self::Bool(b) => Literal::Bool(b),
            Self::Int(i) => Literal::Integer(i.to_string()),
            Self::Float(f) => Literal::Float(format!("{:?}", finite(f)?)),
            Self::Str(s) => Literal::String(StringLiteral::from_value(&s)),
        })
    }

    /// Truthiness: non-zero numbers and `true`.
    fn truthy(&self, op: &'static str) -> Result<bool, ConstantError> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Int(i) => Ok(*i != 0),
            Self::Float(f) => Ok(f.classify() != FpCategory::Zero),
            Self::Str(_) => Err(mismatch(op, NUMERIC)),
        }
    }

    fn num(&self, op: &'static str) -> Result<Num, ConstantError> {
        match self {
            Self::Bool(b) => Ok(Num::Int(i64::from(*b))),
            Self::Int(i) => Ok(Num::Int(*i)),
            Self::Float(f) => Ok(Num::Float(*f)),
            Self::Str(_) => Err(mismatch(op, NUMERIC)),
        }
    }

    /// Integer view rejecting floats, for bitwise and shift operators.
    fn integral(&self, op: &'static str) -> Result<i64, ConstantError> {
        match self.num(op) {
            Ok(Num::Int(i)) => Ok(i),
            _ => Err(mismatch(op, INTEGRAL)),
        }
    }

    const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

const fn mismatch(op: &'static str, expected: &'static str) -> ConstantError {
    ConstantError::TypeMismatch { op, expected }
}

fn finite(f: f64) -> Result<f64, ConstantError> {
    if f.is_finite() {
        Ok(f)
    } else {
        Err(ConstantError::NonFinite)
    }
}

#[expect(clippy::cast_precision_loss, reason = "int to float promotion")]
fn to_float(i: i64) -> f64 {
    i as f64
}

/// Fold `expr` into a value.
///
/// # Errors
/// Returns [`ConstantError::NotConstant`] on the first identifier found and
/// the matching variant for type errors, overflow and division by zero.
pub fn evaluate(expr: &Expr) -> Result<Value, ConstantError> {
    match expr {
        Expr::Literal(lit) => literal_value(lit),
        Expr::Identifier(name) => Err(ConstantError::NotConstant(name.clone())),
        Expr::Unary { op, expr } => match (op, &**expr) {
            // `-9223372036854775808` only fits once the sign is applied.
            (UnaryOp::Neg, Expr::Literal(lit @ Literal::Integer(_))) => {
                Ok(Value::Int(lit.negated_integer_value()?))
            }
            _ => unary(*op, evaluate(expr)?),
        },
        Expr::Cast { ty, expr } => cast(*ty, &evaluate(expr)?),
        Expr::Binary { op, lhs, rhs } => binary(*op, &evaluate(lhs)?, &evaluate(rhs)?),
        Expr::Range {
            lower,
            lower_op,
            middle,
            upper_op,
            upper,
        } => {
            let middle = evaluate(middle)?;
            let low = compare(lower_op.as_binary(), &evaluate(lower)?, &middle)?;
            let high = compare(upper_op.as_binary(), &middle, &evaluate(upper)?)?;
            Ok(Value::Bool(low && high))
        }
        Expr::Membership {
            negated,
            expr,
            terms,
        } => {
            let needle = evaluate(expr)?;
            let mut found = false;
            for term in terms {
                found |= compare(BinaryOp::Eq, &needle, &literal_value(term)?)?;
            }
            Ok(Value::Bool(found != *negated))
        }
    }
}

fn literal_value(lit: &Literal) -> Result<Value, ConstantError> {
    Ok(match lit {
        Literal::Integer(_) => Value::Int(lit.integer_value()?),
        Literal::Float(_) => Value::Float(finite(lit.float_value()?)?),
        Literal::Bool(b) => Value::Bool(*b),
        Literal::String(s) => Value::Str(s.value()?),
    })
}

#[expect(clippy::float_arithmetic, reason = "negating a float constant")]
fn unary(op: UnaryOp, value: Value) -> Result<Value, ConstantError> {
    let sym = op.symbol();
    match op {
        UnaryOp::Plus => match value {
            Value::Str(_) => Err(mismatch(sym, NUMERIC)),
            other => Ok(other),
        },
        UnaryOp::Neg => match value.num(sym)? {
            Num::Int(i) => i
                .checked_neg()
                .map(Value::Int)
                .ok_or(ConstantError::Overflow(sym)),
            Num::Float(f) => Ok(Value::Float(-f)),
        },
        UnaryOp::BitNot => Ok(Value::Int(!value.integral(sym)?)),
        UnaryOp::Not => Ok(Value::Bool(!value.truthy(sym)?)),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "casts wrap or round to the target width"
)]
fn cast(ty: TypeName, value: &Value) -> Result<Value, ConstantError> {
    let sym = ty.keyword();
    if ty == TypeName::Bool {
        return value.truthy(sym).map(Value::Bool);
    }
    let num = value.num(sym)?;
    let as_int = match num {
        Num::Int(i) => i,
        // Saturates at the `i64` bounds; NaN becomes zero.
        Num::Float(f) => f as i64,
    };
    let as_float = match num {
        Num::Int(i) => to_float(i),
        Num::Float(f) => f,
    };
    Ok(match ty {
        TypeName::Int8 => Value::Int(i64::from(as_int as i8)),
        TypeName::Int16 => Value::Int(i64::from(as_int as i16)),
        TypeName::Int32 => Value::Int(i64::from(as_int as i32)),
        TypeName::Int64 => Value::Int(as_int),
        TypeName::Float => Value::Float(finite(f64::from(as_float as f32))?),
        TypeName::Double | TypeName::Bool => Value::Float(as_float),
    })
}

#[expect(clippy::float_arithmetic, reason = "float operator closures")]
fn binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, ConstantError> {
    let sym = op.symbol();
    match op {
        BinaryOp::Add => arithmetic(sym, lhs, rhs, i64::checked_add, |a, b| a + b),
        BinaryOp::Sub => arithmetic(sym, lhs, rhs, i64::checked_sub, |a, b| a - b),
        BinaryOp::Mul => arithmetic(sym, lhs, rhs, i64::checked_mul, |a, b| a * b),
        BinaryOp::Div => divide(lhs, rhs),
        BinaryOp::Mod => {
            let (Value::Int(a), Value::Int(b)) = (lhs, rhs) else {
                return Err(mismatch(sym, "integer operands"));
            };
            if *b == 0 {
                return Err(ConstantError::DivisionByZero);
            }
            a.checked_rem(*b)
                .map(Value::Int)
                .ok_or(ConstantError::Overflow(sym))
        }
        BinaryOp::Pow => power(lhs, rhs),
        BinaryOp::Shl | BinaryOp::Shr => {
            let value = lhs.integral(sym)?;
            let amount = u32::try_from(rhs.integral(sym)?)
                .map_err(|_| ConstantError::Overflow(sym))?;
            let shifted = if op == BinaryOp::Shl {
                value.checked_shl(amount)
            } else {
                value.checked_shr(amount)
            };
            shifted.map(Value::Int).ok_or(ConstantError::Overflow(sym))
        }
        BinaryOp::BitAnd | BinaryOp::BitXor | BinaryOp::BitOr => bitwise(op, lhs, rhs),
        BinaryOp::And | BinaryOp::Or => {
            if lhs.is_float() || rhs.is_float() {
                return Err(mismatch(sym, INTEGRAL));
            }
            let (a, b) = (lhs.truthy(sym)?, rhs.truthy(sym)?);
            Ok(Value::Bool(if op == BinaryOp::And { a && b } else { a || b }))
        }
        BinaryOp::Lt
        | BinaryOp::Lte
        | BinaryOp::Gt
        | BinaryOp::Gte
        | BinaryOp::Eq
        | BinaryOp::Neq => compare(op, lhs, rhs).map(Value::Bool),
    }
}

#[expect(clippy::float_arithmetic, reason = "float arithmetic is the point")]
fn arithmetic(
    sym: &'static str,
    lhs: &Value,
    rhs: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, ConstantError> {
    match (lhs.num(sym)?, rhs.num(sym)?) {
        (Num::Int(a), Num::Int(b)) => int_op(a, b)
            .map(Value::Int)
            .ok_or(ConstantError::Overflow(sym)),
        (a, b) => finite(float_op(promote(a), promote(b))).map(Value::Float),
    }
}

fn promote(num: Num) -> f64 {
    match num {
        Num::Int(i) => to_float(i),
        Num::Float(f) => f,
    }
}

#[expect(clippy::float_arithmetic, reason = "float division")]
fn divide(lhs: &Value, rhs: &Value) -> Result<Value, ConstantError> {
    match (lhs.num("/")?, rhs.num("/")?) {
        (Num::Int(_), Num::Int(0)) => Err(ConstantError::DivisionByZero),
        (Num::Int(a), Num::Int(b)) => a
            .checked_div(b)
            .map(Value::Int)
            .ok_or(ConstantError::Overflow("/")),
        (a, b) => {
            let (a, b) = (promote(a), promote(b));
            if a.classify() == FpCategory::Zero && b.classify() == FpCategory::Zero {
                return Err(ConstantError::DivisionByZero);
            }
            finite(a / b).map(Value::Float)
        }
    }
}

fn power(lhs: &Value, rhs: &Value) -> Result<Value, ConstantError> {
    match (lhs.num("**")?, rhs.num("**")?) {
        (Num::Int(base), Num::Int(exp)) => int_pow(base, exp).map(Value::Int),
        (a, b) => finite(promote(a).powf(promote(b))).map(Value::Float),
    }
}

/// Integer power; negative exponents truncate towards zero.
fn int_pow(base: i64, exp: i64) -> Result<i64, ConstantError> {
    match (base, exp) {
        (_, 0) | (1, _) => Ok(1),
        (0, e) if e < 0 => Err(ConstantError::DivisionByZero),
        (-1, e) => Ok(if e & 1 == 0 { 1 } else { -1 }),
        (_, e) if e < 0 => Ok(0),
        (b, e) => u32::try_from(e)
            .ok()
            .and_then(|e| b.checked_pow(e))
            .ok_or(ConstantError::Overflow("**")),
    }
}

fn bitwise(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, ConstantError> {
    let sym = op.symbol();
    if let (Value::Bool(a), Value::Bool(b)) = (lhs, rhs) {
        return Ok(Value::Bool(match op {
            BinaryOp::BitAnd => a & b,
            BinaryOp::BitXor => a ^ b,
            _ => a | b,
        }));
    }
    let (a, b) = (lhs.integral(sym)?, rhs.integral(sym)?);
    Ok(Value::Int(match op {
        BinaryOp::BitAnd => a & b,
        BinaryOp::BitXor => a ^ b,
        _ => a | b,
    }))
}

/// Evaluate a comparison operator. Strings compare lexicographically with
/// each other; everything else compares numerically.
fn compare(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<bool, ConstantError> {
    let sym = op.symbol();
    let ordering = match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => {
            return Err(mismatch(sym, "operands of the same kind"));
        }
        _ => match (lhs.num(sym)?, rhs.num(sym)?) {
            (Num::Int(a), Num::Int(b)) => Some(a.cmp(&b)),
            (a, b) => promote(a).partial_cmp(&promote(b)),
        },
    };
    Ok(match op {
        BinaryOp::Lt => ordering == Some(Ordering::Less),
        BinaryOp::Lte => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Gt => ordering == Some(Ordering::Greater),
        BinaryOp::Gte => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        BinaryOp::Eq => ordering == Some(Ordering::Equal),
        _ => ordering != Some(Ordering::Equal),
    })
}

/// Resolve one membership list entry into a literal.
///
/// A bare literal is kept as written; any other constant expression is
/// folded and rendered canonically.
pub(crate) fn resolve_term(expr: Expr) -> Result<Literal, ParseErrorKind> {
    if let Expr::Literal(lit) = expr {
        return Ok(lit);
    }
    if !expr.is_constant() {
        return Err(ParseErrorKind::NonConstantTerm);
    }
    evaluate(&expr)
        .and_then(Value::into_literal)
        .map_err(ParseErrorKind::InvalidTerm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{binary, boolean, cast, float, ident, int, string, unary};
    use rstest::rstest;

    #[rstest]
    #[case(binary(BinaryOp::Add, int("1"), int("2")), Value::Int(3))]
    #[case(binary(BinaryOp::Div, int("7"), int("2")), Value::Int(3))]
    #[case(binary(BinaryOp::Mod, int("7"), int("4")), Value::Int(3))]
    #[case(binary(BinaryOp::Div, int("7"), float("2.0")), Value::Float(3.5))]
    #[case(binary(BinaryOp::Pow, int("2"), int("10")), Value::Int(1024))]
    #[case(binary(BinaryOp::Pow, int("2"), unary(UnaryOp::Neg, int("1"))), Value::Int(0))]
    #[case(binary(BinaryOp::Shl, int("1"), int("4")), Value::Int(16))]
    #[case(binary(BinaryOp::BitXor, int("0xf0"), int("0xff")), Value::Int(0x0f))]
    #[case(binary(BinaryOp::Gte, int("3"), int("3")), Value::Bool(true))]
    #[case(binary(BinaryOp::Lt, float("2.5"), int("3")), Value::Bool(true))]
    #[case(binary(BinaryOp::Neq, string("a"), string("b")), Value::Bool(true))]
    #[case(binary(BinaryOp::And, int("1"), int("0")), Value::Bool(false))]
    #[case(unary(UnaryOp::Neg, int("9223372036854775808")), Value::Int(i64::MIN))]
    #[case(unary(UnaryOp::Neg, unary(UnaryOp::Neg, int("5"))), Value::Int(5))]
    #[case(unary(UnaryOp::BitNot, int("0")), Value::Int(-1))]
    #[case(unary(UnaryOp::Not, int("0")), Value::Bool(true))]
    #[case(cast(TypeName::Int8, int("300")), Value::Int(44))]
    #[case(cast(TypeName::Int64, float("-2.9")), Value::Int(-2))]
    #[case(cast(TypeName::Bool, float("0.5")), Value::Bool(true))]
    #[case(cast(TypeName::Double, int("3")), Value::Float(3.0))]
    fn folds_constants(#[case] expr: Expr, #[case] expected: Value) {
        assert_eq!(evaluate(&expr), Ok(expected));
    }

    #[rstest]
    #[case(binary(BinaryOp::Div, int("1"), int("0")), ConstantError::DivisionByZero)]
    #[case(binary(BinaryOp::Mod, int("1"), int("0")), ConstantError::DivisionByZero)]
    #[case(binary(BinaryOp::Div, float("0.0"), int("0")), ConstantError::DivisionByZero)]
    #[case(binary(BinaryOp::Div, float("1.0"), float("0.0")), ConstantError::NonFinite)]
    #[case(
        binary(BinaryOp::Mul, int("9223372036854775807"), int("2")),
        ConstantError::Overflow("*")
    )]
    #[case(
        binary(BinaryOp::Mod, float("1.5"), int("2")),
        ConstantError::TypeMismatch { op: "%", expected: "integer operands" }
    )]
    #[case(
        binary(BinaryOp::BitAnd, float("1.5"), int("2")),
        ConstantError::TypeMismatch { op: "&", expected: INTEGRAL }
    )]
    #[case(
        binary(BinaryOp::Add, string("a"), int("2")),
        ConstantError::TypeMismatch { op: "+", expected: NUMERIC }
    )]
    #[case(binary(BinaryOp::Add, int("1"), ident("x")), ConstantError::NotConstant("x".into()))]
    #[case(
        unary(UnaryOp::Neg, int("9223372036854775809")),
        ConstantError::Literal(LiteralError::IntegerOutOfRange("-9223372036854775809".into()))
    )]
    fn reports_folding_failures(#[case] expr: Expr, #[case] expected: ConstantError) {
        assert_eq!(evaluate(&expr), Err(expected));
    }

    #[test]
    fn bitwise_on_booleans_stays_boolean() {
        let expr = binary(BinaryOp::BitOr, boolean(false), boolean(true));
        assert_eq!(evaluate(&expr), Ok(Value::Bool(true)));
    }

    #[rstest]
    #[case(Value::Int(-3), Literal::Integer("-3".into()))]
    #[case(Value::Float(0.5), Literal::Float("0.5".into()))]
    #[case(Value::Float(2.0), Literal::Float("2.0".into()))]
    #[case(Value::Bool(true), Literal::Bool(true))]
    fn renders_values_as_literals(#[case] value: Value, #[case] expected: Literal) {
        assert_eq!(value.into_literal(), Ok(expected));
    }

    #[test]
    fn non_finite_values_have_no_literal() {
        assert_eq!(
            Value::Float(f64::INFINITY).into_literal(),
            Err(ConstantError::NonFinite)
        );
    }

    #[test]
    fn bare_literal_terms_keep_their_spelling() {
        assert_eq!(resolve_term(int("0x10")), Ok(Literal::Integer("0x10".into())));
        assert_eq!(
            resolve_term(unary(UnaryOp::Neg, int("0x10"))),
            Ok(Literal::Integer("-16".into()))
        );
    }

    #[test]
    fn identifier_terms_are_rejected() {
        assert_eq!(
            resolve_term(unary(UnaryOp::Neg, ident("x"))),
            Err(ParseErrorKind::NonConstantTerm)
        );
    }
}
