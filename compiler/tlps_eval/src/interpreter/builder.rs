//! `InterpreterBuilder` for creating interpreters with various configurations.

use tlps_ir::{SharedArena, StringInterner};

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::error_sink::{stderr_sink, SharedErrorSink};
use crate::errors::EvalError;
use crate::natives::default_natives;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{NativeFunction, Value};

/// Builder for [`Interpreter`].
///
/// ```text
/// let interpreter = InterpreterBuilder::new(&interner)
///     .print_handler(buffer_handler())
///     .max_call_depth(256)
///     .build();
/// ```
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    error_sink: Option<SharedErrorSink>,
    max_call_depth: Option<usize>,
    default_natives: bool,
    natives: Vec<NativeFunction>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            error_sink: None,
            max_call_depth: None,
            default_natives: true,
            natives: Vec::new(),
        }
    }

    /// Destination for `print`. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Destination for runtime error reports. Defaults to stderr.
    #[must_use]
    pub fn error_sink(mut self, sink: SharedErrorSink) -> Self {
        self.error_sink = Some(sink);
        self
    }

    /// Fail calls nested deeper than `depth` with a stack overflow error
    /// instead of exhausting the host stack.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    /// Register an extra global host function.
    #[must_use]
    pub fn native(
        mut self,
        name: &str,
        arity: usize,
        func: impl Fn(&[Value]) -> Result<Value, EvalError> + 'static,
    ) -> Self {
        self.natives.push(NativeFunction::new(name, arity, func));
        self
    }

    /// Start with an empty global scope (no `clock`).
    #[must_use]
    pub fn without_default_natives(mut self) -> Self {
        self.default_natives = false;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let mut interpreter = Interpreter {
            interner: self.interner,
            env: Environment::new(),
            arena: SharedArena::default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            error_sink: self.error_sink.unwrap_or_else(stderr_sink),
            call_stack: CallStack::new(self.max_call_depth),
        };

        if self.default_natives {
            for native in default_natives() {
                interpreter.install_native(native);
            }
        }
        // Host natives go last so they can replace a default of the same name.
        for native in self.natives {
            interpreter.install_native(native);
        }

        interpreter
    }
}
