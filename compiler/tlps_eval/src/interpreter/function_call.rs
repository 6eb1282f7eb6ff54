//! User function invocation.

use std::rc::Rc;

use tlps_ir::Token;

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::environment::{LocalScope, Scope};
use crate::errors::{ControlAction, EvalResult};
use crate::stack::ensure_sufficient_stack;
use crate::{UserFunction, Value};

impl Interpreter<'_> {
    /// Run `function`'s body with `args` bound to its parameters.
    ///
    /// Parameters live in a fresh scope whose parent is the function's
    /// closure, not the caller's scope. A `return` inside the body becomes
    /// the call's value; falling off the end yields `nil`.
    #[tracing::instrument(level = "trace", skip_all, fields(function = function.name()))]
    pub(crate) fn call_user_function(
        &mut self,
        function: &Rc<UserFunction>,
        args: &[Value],
        call_site: Token,
    ) -> EvalResult {
        self.call_stack
            .push(CallFrame {
                name: function.shared_name(),
                call_line: call_site.line,
            })
            .map_err(|err| self.locate(err, call_site))?;

        let decl = function.decl();
        let scope = LocalScope::new(Scope::with_parent(function.closure().clone()));
        {
            let mut params = scope.borrow_mut();
            for (param, arg) in decl.params.iter().zip(args) {
                params.define(param.lexeme, arg.clone());
            }
        }

        let body = decl.body;
        let arena = function.arena().clone();
        let outcome = ensure_sufficient_stack(|| {
            self.with_call_scope(scope, arena, |scoped| scoped.execute_statements(body))
        });

        let result = match outcome {
            Ok(()) => Ok(Value::Nil),
            Err(ControlAction::Return(value)) => Ok(value),
            Err(ControlAction::Error(err)) => {
                Err(self.call_stack.attach_backtrace(*err).into())
            }
        };
        self.call_stack.pop();
        result
    }
}
