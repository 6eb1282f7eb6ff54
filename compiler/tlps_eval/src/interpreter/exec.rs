//! Statement execution.
//!
//! Every statement yields a completion value: an expression statement its
//! value, an `if` the completion of the branch it ran, anything else `nil`.
//! Only the top level looks at it.

use std::rc::Rc;

use tlps_ir::{ExprId, FunctionId, StmtId, StmtKind, StmtRange, Token};

use super::Interpreter;
use crate::errors::{return_outside_function, ControlAction, EvalResult};
use crate::stack::ensure_sufficient_stack;
use crate::{Callable, UserFunction, Value};

impl Interpreter<'_> {
    /// Execute one statement of the current arena.
    pub(crate) fn execute(&mut self, id: StmtId) -> EvalResult {
        ensure_sufficient_stack(|| self.execute_inner(id))
    }

    fn execute_inner(&mut self, id: StmtId) -> EvalResult {
        let stmt = *self.arena.get_stmt(id);
        match stmt.kind {
            StmtKind::Expression(expr) => self.evaluate(expr),
            StmtKind::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(Value::Nil)
            }
            StmtKind::Var { name, init } => {
                let value = match init {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Nil,
                };
                self.env.define(name.lexeme, value);
                Ok(Value::Nil)
            }
            StmtKind::Block(body) => {
                self.execute_block(body)?;
                Ok(Value::Nil)
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Value::Nil)
                }
            }
            StmtKind::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(Value::Nil)
            }
            StmtKind::Function(decl) => {
                self.declare_function(decl);
                Ok(Value::Nil)
            }
            StmtKind::Return { keyword, value } => self.exec_return(keyword, value),
        }
    }

    /// Run `body` in a fresh child scope.
    pub(crate) fn execute_block(&mut self, body: StmtRange) -> EvalResult<()> {
        self.with_env_scope(|scoped| scoped.execute_statements(body))
    }

    /// Run `body` in the current scope, stopping at the first error or return.
    pub(crate) fn execute_statements(&mut self, body: StmtRange) -> EvalResult<()> {
        // Own a handle: a nested call swaps `self.arena` while we iterate.
        let arena = self.arena.clone();
        for &stmt in arena.get_stmt_list(body) {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Bind a function value closing over the current scope.
    fn declare_function(&mut self, decl: FunctionId) {
        let name = self.arena.get_function(decl).name.lexeme;
        tracing::debug!(name = self.interner.lookup(name), "declaring function");
        let function = UserFunction::new(
            decl,
            self.arena.clone(),
            self.env.current_scope(),
            self.interner.lookup(name),
        );
        self.env
            .define(name, Value::Callable(Callable::User(Rc::new(function))));
    }

    fn exec_return(&mut self, keyword: Token, value: Option<ExprId>) -> EvalResult {
        if self.call_stack.is_empty() {
            return Err(self.locate(return_outside_function(), keyword));
        }
        let value = match value {
            Some(value) => self.evaluate(value)?,
            None => Value::Nil,
        };
        Err(ControlAction::Return(value))
    }
}
