//! Unary operator implementations for the evaluator.

use tlps_ir::UnaryOp;

use crate::errors::{operand_not_number, EvalError};
use crate::Value;

/// Evaluate a unary operation on an already-evaluated operand.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Result<Value, EvalError> {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (_, UnaryOp::Neg) => Err(operand_not_number()),
        // Any value has a truthiness, so `!` never fails.
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;

    #[test]
    fn test_negate_number() {
        assert_eq!(
            evaluate_unary(&Value::Number(3.0), UnaryOp::Neg).unwrap(),
            Value::Number(-3.0)
        );
        assert_eq!(
            evaluate_unary(&Value::Number(-0.5), UnaryOp::Neg).unwrap(),
            Value::Number(0.5)
        );
    }

    #[test]
    fn test_negate_non_number() {
        for value in [Value::string("3"), Value::Bool(true), Value::Nil] {
            let err = evaluate_unary(&value, UnaryOp::Neg).unwrap_err();
            assert_eq!(err.kind, EvalErrorKind::OperandNotNumber);
        }
    }

    #[test]
    fn test_not_uses_truthiness() {
        let cases = [
            (Value::Nil, true),
            (Value::Bool(false), true),
            (Value::Bool(true), false),
            (Value::Number(0.0), false),
            (Value::string(""), false),
        ];
        for (value, expected) in cases {
            assert_eq!(
                evaluate_unary(&value, UnaryOp::Not).unwrap(),
                Value::Bool(expected),
                "!{value:?}"
            );
        }
    }
}
