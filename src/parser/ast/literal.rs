//! Literal constants appearing in filter expressions.
//!
//! Numeric literals keep their lexical form. Width, signedness and promotion
//! are decided by whoever consumes the tree; this module only offers decoding
//! into `i64`/`f64` for constant folding and inspection.

use std::fmt;

use crate::SyntaxKind;

use super::StringLiteral;

/// Base used by integer literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntBase {
    /// Binary integer literal, `0b101`.
    Binary,
    /// Octal integer literal, `017`.
    Octal,
    /// Decimal integer literal.
    Decimal,
    /// Hexadecimal integer literal, `0x1f`.
    Hex,
}

impl IntBase {
    /// Radix associated with the base.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    /// Detect the base of an integer lexeme and return it with the bare
    /// digits, prefix and suffix letters removed.
    #[must_use]
    pub fn split(text: &str) -> (Self, &str) {
        let text = text.trim_end_matches(['u', 'U', 'l', 'L']);
        if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            (Self::Hex, digits)
        } else if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
            (Self::Binary, digits)
        } else if text.len() > 1 && text.starts_with('0') {
            (Self::Octal, text.get(1..).unwrap_or(""))
        } else {
            (Self::Decimal, text)
        }
    }
}

/// Failure to decode a numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntegerOutOfRange(String),
    #[error("invalid floating literal `{0}`")]
    InvalidFloat(String),
    #[error("literal is not numeric")]
    NotNumeric,
}

/// A literal constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Integer literal in source form, suffix included.
    Integer(String),
    /// Floating literal in source form.
    Float(String),
    Bool(bool),
    String(StringLiteral),
}

impl Literal {
    /// Build a literal from a literal token.
    ///
    /// Returns `None` when `kind` is not a literal kind or the text does not
    /// match it.
    #[must_use]
    pub fn from_token(kind: SyntaxKind, text: &str) -> Option<Self> {
        match kind {
            SyntaxKind::T_INTEGER => Some(Self::Integer(text.to_owned())),
            SyntaxKind::T_FLOAT => Some(Self::Float(text.to_owned())),
            SyntaxKind::T_BOOLEAN => match text {
                "true" => Some(Self::Bool(true)),
                "false" => Some(Self::Bool(false)),
                _ => None,
            },
            SyntaxKind::T_STRING => StringLiteral::from_lexeme(text).map(Self::String),
            _ => None,
        }
    }

    /// Base of an integer literal.
    #[must_use]
    pub fn int_base(&self) -> Option<IntBase> {
        match self {
            Self::Integer(text) => Some(IntBase::split(text).0),
            _ => None,
        }
    }

    /// Decode an integer literal, ignoring suffix letters.
    ///
    /// # Errors
    /// Returns [`LiteralError::IntegerOutOfRange`] when the value exceeds
    /// `i64::MAX` and [`LiteralError::NotNumeric`] for non-integer literals.
    pub fn integer_value(&self) -> Result<i64, LiteralError> {
        let Self::Integer(text) = self else {
            return Err(LiteralError::NotNumeric);
        };
        let (base, digits) = IntBase::split(text);
        i64::from_str_radix(digits, base.radix())
            .map_err(|_| LiteralError::IntegerOutOfRange(text.clone()))
    }

    /// Decode the negation of an integer literal.
    ///
    /// The magnitude is read as unsigned so `-9223372036854775808` decodes to
    /// `i64::MIN` even though its digits alone do not fit in an `i64`.
    ///
    /// # Errors
    /// Returns [`LiteralError::IntegerOutOfRange`] when the negated value is
    /// below `i64::MIN` and [`LiteralError::NotNumeric`] for non-integer
    /// literals.
    pub fn negated_integer_value(&self) -> Result<i64, LiteralError> {
        let Self::Integer(text) = self else {
            return Err(LiteralError::NotNumeric);
        };
        let (base, digits) = IntBase::split(text);
        u64::from_str_radix(digits, base.radix())
            .ok()
            .and_then(|magnitude| 0_i64.checked_sub_unsigned(magnitude))
            .ok_or_else(|| LiteralError::IntegerOutOfRange(format!("-{text}")))
    }

    /// Decode a floating literal, including hexadecimal floating forms.
    ///
    /// # Errors
    /// Returns [`LiteralError::InvalidFloat`] when the text is not a floating
    /// literal and [`LiteralError::NotNumeric`] for non-floating literals.
    pub fn float_value(&self) -> Result<f64, LiteralError> {
        let Self::Float(text) = self else {
            return Err(LiteralError::NotNumeric);
        };
        let invalid = || LiteralError::InvalidFloat(text.clone());
        match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => hex_float(hex).ok_or_else(invalid),
            None => text.parse::<f64>().map_err(|_| invalid()),
        }
    }

    /// Render the literal for `Expr::to_sexpr` output.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Self::String(lit) => lit.to_sexpr(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(text) | Self::Float(text) => f.write_str(text),
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(lit) => write!(f, "{lit}"),
        }
    }
}

/// Decode `mantissa[.fraction]p[+-]exponent` with a hexadecimal mantissa.
#[expect(clippy::float_arithmetic, reason = "assembling the mantissa")]
fn hex_float(text: &str) -> Option<f64> {
    let (mantissa, exponent) = text.split_once(['p', 'P'])?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let mut value = 0.0_f64;
    for ch in whole.chars().chain(fraction.chars()) {
        value = value * 16.0 + f64::from(ch.to_digit(16)?);
    }
    let exponent: i64 = exponent.parse().ok()?;
    let shift = i64::try_from(fraction.len()).ok()?.checked_mul(4)?;
    let scale = exponent.saturating_sub(shift).clamp(-2200, 2200);
    // Split the scale so neither factor overflows before the product.
    let half = scale.div_euclid(2);
    let rest = scale - half;
    let half = i32::try_from(half).ok()?;
    let rest = i32::try_from(rest).ok()?;
    Some(value * 2.0_f64.powi(half) * 2.0_f64.powi(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", IntBase::Decimal, "0")]
    #[case("42u", IntBase::Decimal, "42")]
    #[case("017", IntBase::Octal, "17")]
    #[case("0x1fUL", IntBase::Hex, "1f")]
    #[case("0B101", IntBase::Binary, "101")]
    fn splits_integer_bases(#[case] text: &str, #[case] base: IntBase, #[case] digits: &str) {
        assert_eq!(IntBase::split(text), (base, digits));
    }

    #[rstest]
    #[case("0", 0)]
    #[case("1234", 1234)]
    #[case("017", 15)]
    #[case("0xffL", 255)]
    #[case("0b1010", 10)]
    #[case("9223372036854775807", i64::MAX)]
    fn decodes_integers(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(Literal::Integer(text.into()).integer_value(), Ok(expected));
    }

    #[rstest]
    #[case("5", -5)]
    #[case("0", 0)]
    #[case("9223372036854775808", i64::MIN)]
    #[case("0x8000000000000000", i64::MIN)]
    fn decodes_negated_integers(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(
            Literal::Integer(text.into()).negated_integer_value(),
            Ok(expected)
        );
    }

    #[test]
    fn negated_overflow_is_reported() {
        let lit = Literal::Integer("9223372036854775809".into());
        assert_eq!(
            lit.negated_integer_value(),
            Err(LiteralError::IntegerOutOfRange("-9223372036854775809".into()))
        );
    }

    #[rstest]
    #[case("0b11", IntBase::Binary)]
    #[case("0755", IntBase::Octal)]
    #[case("0", IntBase::Decimal)]
    #[case("0XffU", IntBase::Hex)]
    fn reports_integer_base(#[case] text: &str, #[case] base: IntBase) {
        assert_eq!(Literal::Integer(text.into()).int_base(), Some(base));
        assert_eq!(Literal::Float("1.5".into()).int_base(), None);
    }

    #[test]
    fn integer_overflow_is_reported() {
        let lit = Literal::Integer("0xffffffffffffffff".into());
        assert_eq!(
            lit.integer_value(),
            Err(LiteralError::IntegerOutOfRange("0xffffffffffffffff".into()))
        );
    }

    #[rstest]
    #[case("1.5", 1.5)]
    #[case(".25", 0.25)]
    #[case("3.", 3.0)]
    #[case("1e3", 1000.0)]
    #[case("2.5E-1", 0.25)]
    #[case("0x1.8p3", 12.0)]
    #[case("0xAp0", 10.0)]
    #[case("0x.8p1", 1.0)]
    #[case("0x1p-2", 0.25)]
    #[expect(
        clippy::expect_used,
        clippy::float_arithmetic,
        reason = "test compares decoded floats"
    )]
    fn decodes_floats(#[case] text: &str, #[case] expected: f64) {
        let value = Literal::Float(text.into()).float_value().expect("valid float");
        assert!((value - expected).abs() < 1e-12, "{text} decoded to {value}");
    }

    #[rstest]
    #[case(SyntaxKind::T_BOOLEAN, "true", Some(Literal::Bool(true)))]
    #[case(SyntaxKind::T_INTEGER, "7", Some(Literal::Integer("7".into())))]
    #[case(SyntaxKind::T_IDENT, "x", None)]
    fn builds_from_tokens(
        #[case] kind: SyntaxKind,
        #[case] text: &str,
        #[case] expected: Option<Literal>,
    ) {
        assert_eq!(Literal::from_token(kind, text), expected);
    }
}
