//! Precedence and associativity of infix and prefix operators.

use super::sexpr;
use crate::parser::ast::{BinaryOp, UnaryOp};
use crate::test_util::{assert_parses_to, assert_same_tree, binary, ident, int, unary};
use rstest::rstest;

#[rstest]
#[case("1 + 2 * 3", "(+ 1 (* 2 3))")]
#[case("1 * 2 + 3", "(+ (* 1 2) 3)")]
#[case("8 - 4 - 2", "(- (- 8 4) 2)")]
#[case("8 / 4 % 3", "(% (/ 8 4) 3)")]
#[case("2 ** 3 ** 2", "(** 2 (** 3 2))")]
#[case("2 * 3 ** 2", "(* 2 (** 3 2))")]
#[case("a << 1 + 2", "(<< a (+ 1 2))")]
#[case("a << b >> c", "(>> (<< a b) c)")]
#[case("a >> 1 > b", "(> (>> a 1) b)")]
#[case("a > b >= c", "(>= (> a b) c)")]
#[case("a < b == c", "(== (< a b) c)")]
#[case("a == b < c", "(== a (< b c))")]
#[case("a != b == c", "(== (!= a b) c)")]
#[case("a == b & c", "(& (== a b) c)")]
#[case("a & b ^ c | d", "(| (^ (& a b) c) d)")]
#[case("a | b and c", "(and (| a b) c)")]
#[case("a or b and c", "(or a (and b c))")]
#[case("a and b or c and d", "(or (and a b) (and c d))")]
#[case("a or b or c", "(or (or a b) c)")]
fn binary_operators_follow_the_table(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(sexpr(src), expected);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_parses_to(
        "1 + 2 * 3",
        &binary(
            BinaryOp::Add,
            int("1"),
            binary(BinaryOp::Mul, int("2"), int("3")),
        ),
    );
}

#[test]
fn power_is_right_associative() {
    assert_parses_to(
        "2 ** 3 ** 2",
        &binary(
            BinaryOp::Pow,
            int("2"),
            binary(BinaryOp::Pow, int("3"), int("2")),
        ),
    );
}

#[rstest]
#[case("-2 ** 2", "(- (** 2 2))")]
#[case("-2 * 2", "(* (- 2) 2)")]
#[case("~a + 1", "(+ (~ a) 1)")]
#[case("!a and b", "(and (! a) b)")]
#[case("not a or b", "(or (! a) b)")]
#[case("- -a", "(- (- a))")]
#[case("+a ** -b", "(+ (** a (- b)))")]
fn unary_operand_stops_below_power(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(sexpr(src), expected);
}

#[test]
fn negated_power_wraps_the_power() {
    assert_parses_to(
        "-2 ** 2",
        &unary(UnaryOp::Neg, binary(BinaryOp::Pow, int("2"), int("2"))),
    );
}

#[rstest]
#[case("a && b", "a and b")]
#[case("a || b", "a or b")]
#[case("a && b || c && d", "a and b or c and d")]
#[case("!a", "not a")]
#[case("!(a || b) && c", "not (a or b) and c")]
fn logical_spellings_are_interchangeable(#[case] symbolic: &str, #[case] worded: &str) {
    assert_same_tree(symbolic, worded);
}

#[rstest]
#[case("(1 + 2) * 3", "(* (+ 1 2) 3)")]
#[case("((a))", "a")]
#[case("2 ** (3 ** 2)", "(** 2 (** 3 2))")]
#[case("(2 ** 3) ** 2", "(** (** 2 3) 2)")]
#[case("-(a * b)", "(- (* a b))")]
fn parentheses_leave_no_node(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(sexpr(src), expected);
}

#[test]
fn grouping_is_transparent() {
    assert_parses_to("(x)", &ident("x"));
}
