//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operator and value sets are closed, so a
//! `match` gives exhaustiveness checking for free.
//!
//! Errors returned here carry no location; the interpreter attributes them
//! to the operator token.

use std::rc::Rc;

use tlps_ir::BinaryOp;

use crate::errors::{invalid_add_operands, operands_not_numbers, EvalError};
use crate::Value;

/// Evaluate `left op right` on already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Sub => numeric(left, right, |a, b| Value::Number(a - b)),
        BinaryOp::Mul => numeric(left, right, |a, b| Value::Number(a * b)),
        // IEEE-754: division by zero yields an infinity or NaN, not an error.
        BinaryOp::Div => numeric(left, right, |a, b| Value::Number(a / b)),
        BinaryOp::Lt => numeric(left, right, |a, b| Value::Bool(a < b)),
        BinaryOp::LtEq => numeric(left, right, |a, b| Value::Bool(a <= b)),
        BinaryOp::Gt => numeric(left, right, |a, b| Value::Bool(a > b)),
        BinaryOp::GtEq => numeric(left, right, |a, b| Value::Bool(a >= b)),
    }
}

/// `+` adds two numbers or concatenates two strings. No implicit conversion.
fn eval_add(left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Rc::from(joined)))
        }
        _ => Err(invalid_add_operands()),
    }
}

/// Apply a numeric-only operator.
#[inline]
fn numeric(left: &Value, right: &Value, op: fn(f64, f64) -> Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(op(*a, *b)),
        _ => Err(operands_not_numbers()),
    }
}
