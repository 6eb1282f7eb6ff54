//! Tree-walking interpreter.
//!
//! # Module Structure
//!
//! - `builder`: `InterpreterBuilder` for configuration
//! - `scope_guard`: RAII scope and arena management
//! - `exec`: statement execution
//! - `eval`: expression evaluation
//! - `function_call`: user function invocation
//!
//! # Arena Threading
//!
//! Nodes are addressed by ids into the arena of the program that contains
//! them. `arena` always names the arena the running code came from: it is
//! set per `interpret` call and swapped for the callee's arena for the
//! duration of each user-function call.

mod builder;
mod eval;
mod exec;
mod function_call;
mod scope_guard;

use std::rc::Rc;

use tlps_ir::{Program, SharedArena, StringInterner, Token};

use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::error_sink::SharedErrorSink;
use crate::errors::{ControlAction, EvalError};
use crate::print_handler::SharedPrintHandler;
use crate::{Callable, NativeFunction, Value};

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

/// Outcome of running one program.
#[derive(Clone, Debug)]
pub struct Interpretation {
    /// Completion value of the last top-level statement. `nil` if it failed.
    pub value: Value,
    /// Every error reported while running, in order.
    pub errors: Vec<EvalError>,
}

impl Interpretation {
    /// Display form of the completion value.
    pub fn display(&self) -> String {
        self.value.to_string()
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&EvalError> {
        self.errors.first()
    }

    /// The display string, or the first error if any statement failed.
    pub fn into_result(self) -> Result<String, EvalError> {
        let display = self.display();
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(display),
        }
    }
}

/// The evaluator.
///
/// Global bindings persist across `interpret` calls, so one interpreter can
/// serve a whole REPL session.
pub struct Interpreter<'a> {
    pub interner: &'a StringInterner,
    pub env: Environment,
    /// Arena of the code currently executing.
    pub(crate) arena: SharedArena,
    print_handler: SharedPrintHandler,
    error_sink: SharedErrorSink,
    call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with stdout output, stderr error reports, `clock`, and
    /// no call depth limit.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Run every top-level statement of `program` in order.
    ///
    /// A failing statement is reported to the error sink and execution
    /// continues with the next one.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements().len()))]
    pub fn interpret(&mut self, program: &Program) -> Interpretation {
        self.arena = program.arena.clone();
        let mut value = Value::Nil;
        let mut errors = Vec::new();

        for &stmt in program.statements() {
            match self.execute(stmt) {
                Ok(completion) => value = completion,
                Err(action) => {
                    let err = action.into_eval_error();
                    tracing::debug!(error = %err, "top-level statement failed");
                    self.error_sink.report(&err);
                    errors.push(err);
                    value = Value::Nil;
                }
            }
        }

        Interpretation { value, errors }
    }

    /// Bind a host function in the global scope, replacing any binding of
    /// the same name.
    pub fn define_native(
        &mut self,
        name: &str,
        arity: usize,
        func: impl Fn(&[Value]) -> Result<Value, EvalError> + 'static,
    ) {
        self.install_native(NativeFunction::new(name, arity, func));
    }

    pub(crate) fn install_native(&mut self, native: NativeFunction) {
        tracing::debug!(name = native.name(), arity = native.arity(), "defining native");
        let name = self.interner.intern(native.name());
        self.env
            .define_global(name, Value::Callable(Callable::Native(Rc::new(native))));
    }

    /// Current value of the global `name`, if bound.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.env.global().borrow().lookup(self.interner.intern(name))
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn error_sink(&self) -> &SharedErrorSink {
        &self.error_sink
    }

    /// Number of user-function calls in progress.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Attribute `err` to `token` and wrap it for propagation.
    #[cold]
    pub(crate) fn locate(&self, err: EvalError, token: Token) -> ControlAction {
        err.at(token, self.interner).into()
    }
}
