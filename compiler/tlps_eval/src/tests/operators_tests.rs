//! Tests for binary operator implementations.

use pretty_assertions::assert_eq;
use tlps_ir::BinaryOp;

use crate::errors::EvalErrorKind;
use crate::operators::evaluate_binary;
use crate::Value;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn eval(left: &Value, op: BinaryOp, right: &Value) -> Value {
    evaluate_binary(left, right, op).unwrap()
}

fn eval_err(left: &Value, op: BinaryOp, right: &Value) -> EvalErrorKind {
    evaluate_binary(left, right, op).unwrap_err().kind
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval(&num(2.0), BinaryOp::Add, &num(3.0)), num(5.0));
    assert_eq!(eval(&num(5.0), BinaryOp::Sub, &num(3.0)), num(2.0));
    assert_eq!(eval(&num(2.0), BinaryOp::Mul, &num(3.5)), num(7.0));
    assert_eq!(eval(&num(7.0), BinaryOp::Div, &num(2.0)), num(3.5));
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(eval(&num(1.0), BinaryOp::Div, &num(0.0)), num(f64::INFINITY));
    assert_eq!(eval(&num(-1.0), BinaryOp::Div, &num(0.0)), num(f64::NEG_INFINITY));
    let nan = eval(&num(0.0), BinaryOp::Div, &num(0.0));
    assert!(nan.as_number().is_some_and(f64::is_nan));
    assert_eq!(nan.to_string(), "NaN");
}

#[test]
fn test_comparisons() {
    let cases = [
        (1.0, BinaryOp::Lt, 2.0, true),
        (2.0, BinaryOp::Lt, 2.0, false),
        (2.0, BinaryOp::LtEq, 2.0, true),
        (3.0, BinaryOp::Gt, 2.0, true),
        (2.0, BinaryOp::Gt, 2.0, false),
        (2.0, BinaryOp::GtEq, 2.0, true),
        (1.0, BinaryOp::GtEq, 2.0, false),
    ];
    for (a, op, b, expected) in cases {
        assert_eq!(
            eval(&num(a), op, &num(b)),
            Value::Bool(expected),
            "{a} {} {b}",
            op.as_symbol()
        );
    }
}

#[test]
fn test_string_concatenation() {
    assert_eq!(
        eval(&Value::string("hello"), BinaryOp::Add, &Value::string(" world")),
        Value::string("hello world")
    );
    assert_eq!(
        eval(&Value::string(""), BinaryOp::Add, &Value::string("")),
        Value::string("")
    );
}

#[test]
fn test_add_requires_matching_operands() {
    let mismatched = [
        (num(1.0), Value::string("a")),
        (Value::string("a"), num(1.0)),
        (Value::Nil, Value::Nil),
        (Value::Bool(true), num(1.0)),
    ];
    for (left, right) in &mismatched {
        assert_eq!(
            eval_err(left, BinaryOp::Add, right),
            EvalErrorKind::InvalidAddOperands
        );
    }
}

#[test]
fn test_numeric_operators_reject_non_numbers() {
    for op in [
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
    ] {
        assert_eq!(
            eval_err(&Value::string("3"), op, &num(1.0)),
            EvalErrorKind::OperandsNotNumbers
        );
        assert_eq!(
            eval_err(&num(1.0), op, &Value::Nil),
            EvalErrorKind::OperandsNotNumbers
        );
    }
}

#[test]
fn test_equality_never_fails() {
    assert_eq!(eval(&num(1.0), BinaryOp::Eq, &num(1.0)), Value::Bool(true));
    assert_eq!(eval(&num(1.0), BinaryOp::Eq, &Value::string("1")), Value::Bool(false));
    assert_eq!(eval(&Value::Nil, BinaryOp::Eq, &Value::Nil), Value::Bool(true));
    assert_eq!(eval(&Value::Nil, BinaryOp::Eq, &Value::Bool(false)), Value::Bool(false));
    assert_eq!(
        eval(&Value::string("a"), BinaryOp::NotEq, &Value::string("b")),
        Value::Bool(true)
    );
    assert_eq!(
        eval(&Value::Bool(true), BinaryOp::NotEq, &Value::Bool(true)),
        Value::Bool(false)
    );
}
