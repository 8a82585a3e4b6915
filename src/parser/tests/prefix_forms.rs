//! Primary expressions, literals and casts.

use super::{parse_ok, sexpr};
use crate::parser::ast::{BinaryOp, Expr, Literal, StringLiteral, TypeName};
use crate::test_util::{assert_parses_to, binary, boolean, cast, float, ident, int, string};
use rstest::rstest;

#[rstest]
#[case("42", int("42"))]
#[case("0x1F", int("0x1F"))]
#[case("0b101", int("0b101"))]
#[case("017", int("017"))]
#[case("10ul", int("10ul"))]
#[case("1.5", float("1.5"))]
#[case(".5e-3", float(".5e-3"))]
#[case("0x1.8p3", float("0x1.8p3"))]
#[case("true", boolean(true))]
#[case("false", boolean(false))]
#[case(r#""a\tb""#, string(r"a\tb"))]
#[case("field_1", ident("field_1"))]
fn primaries_keep_their_spelling(#[case] src: &str, #[case] expected: Expr) {
    assert_parses_to(src, &expected);
}

#[test]
fn prefixed_strings_keep_the_prefix() {
    let expr = parse_ok(r#"u8"café""#);
    let Expr::Literal(Literal::String(lit)) = expr else {
        panic!("expected a string literal, got {expr:?}");
    };
    assert_eq!(lit.to_string(), r#"u8"café""#);
    assert_eq!(lit.value(), Ok(String::from("café")));
}

#[test]
fn string_literals_compare_by_body() {
    assert_eq!(
        parse_ok(r#""x""#),
        Expr::Literal(Literal::String(StringLiteral {
            prefix: None,
            body: String::from("x"),
        }))
    );
}

#[rstest]
#[case("(bool) x", TypeName::Bool)]
#[case("(int8) x", TypeName::Int8)]
#[case("(int16) x", TypeName::Int16)]
#[case("(int32) x", TypeName::Int32)]
#[case("(int64) x", TypeName::Int64)]
#[case("(float) x", TypeName::Float)]
#[case("(double) x", TypeName::Double)]
fn every_type_keyword_casts(#[case] src: &str, #[case] ty: TypeName) {
    assert_parses_to(src, &cast(ty, ident("x")));
}

#[test]
fn cast_binds_tighter_than_addition() {
    assert_parses_to(
        "(int64) 1 + 2",
        &binary(BinaryOp::Add, cast(TypeName::Int64, int("1")), int("2")),
    );
}

#[rstest]
#[case("(int64) a ** b", "(cast int64 (** a b))")]
#[case("(int64) a * b", "(* (cast int64 a) b)")]
#[case("(double) -a", "(cast double (- a))")]
#[case("(int8)(int16) a", "(cast int8 (cast int16 a))")]
#[case("-(float) a", "(- (cast float a))")]
#[case("(double)(a + b)", "(cast double (+ a b))")]
fn cast_operand_reaches_power_only(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(sexpr(src), expected);
}

#[test]
fn parenthesised_identifier_is_not_a_cast() {
    assert_eq!(sexpr("(a) - b"), "(- a b)");
}
