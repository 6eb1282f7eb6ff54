//! Expression evaluation.

use smallvec::SmallVec;

use tlps_ir::{ExprId, ExprKind, ExprRange, Literal, LogicalOp, Token};

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable, EvalResult};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;
use crate::Value;

/// Inline capacity for call arguments.
type Args = SmallVec<[Value; 4]>;

impl Interpreter<'_> {
    /// Evaluate one expression of the current arena.
    pub(crate) fn evaluate(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(id))
    }

    fn evaluate_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Literal(literal) => Ok(self.eval_literal(literal)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary {
                op,
                operator,
                operand,
            } => {
                let operand = self.evaluate(operand)?;
                evaluate_unary(&operand, op).map_err(|err| self.locate(err, operator))
            }
            ExprKind::Binary {
                left,
                op,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(&left, &right, op).map_err(|err| self.locate(err, operator))
            }
            ExprKind::Logical {
                left, op, right, ..
            } => {
                let left = self.evaluate(left)?;
                // Short-circuit yields the deciding operand itself, not a bool.
                match op {
                    LogicalOp::Or if left.is_truthy() => Ok(left),
                    LogicalOp::And if !left.is_truthy() => Ok(left),
                    LogicalOp::Or | LogicalOp::And => self.evaluate(right),
                }
            }
            ExprKind::Variable { name } => self.env.get(name, self.interner).map_err(Into::into),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.assign(name, value.clone(), self.interner)?;
                Ok(value)
            }
            ExprKind::Call {
                callee,
                paren,
                args,
            } => self.eval_call(callee, paren, args),
        }
    }

    fn eval_literal(&self, literal: Literal) -> Value {
        match literal {
            Literal::Number(n) => Value::Number(n),
            Literal::Str(name) => Value::string(self.interner.lookup(name)),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Nil => Value::Nil,
        }
    }

    /// Callee first, then arguments left to right, then the callable and
    /// arity checks, both blamed on the closing paren.
    fn eval_call(&mut self, callee: ExprId, paren: Token, args: ExprRange) -> EvalResult {
        let callee = self.evaluate(callee)?;

        let arena = self.arena.clone();
        let mut values = Args::with_capacity(args.len());
        for &arg in arena.get_expr_list(args) {
            values.push(self.evaluate(arg)?);
        }

        let callable = match callee {
            Value::Callable(callable) => callable,
            other => return Err(self.locate(not_callable(other.type_name()), paren)),
        };
        if values.len() != callable.arity() {
            return Err(self.locate(arity_mismatch(callable.arity(), values.len()), paren));
        }

        callable.invoke(self, &values, paren)
    }
}
