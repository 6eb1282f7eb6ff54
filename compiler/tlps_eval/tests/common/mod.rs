//! Shared harness for whole-program tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use tlps_eval::{
    buffer_handler, buffer_sink, EvalError, Interpreter, InterpreterBuilder, SharedErrorSink,
    SharedPrintHandler,
};
use tlps_ir::{AstBuilder, ExprId, Program, StringInterner};

/// What one `interpret` call produced.
pub struct Outcome {
    pub display: String,
    pub output: Vec<String>,
    pub errors: Vec<String>,
    pub raw_errors: Vec<EvalError>,
}

/// An interpreter wired to capturing output and error buffers.
pub struct Session<'a> {
    pub interp: Interpreter<'a>,
    output: SharedPrintHandler,
    errors: SharedErrorSink,
}

impl<'a> Session<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self::with_builder(InterpreterBuilder::new(interner))
    }

    pub fn with_builder(builder: InterpreterBuilder<'a>) -> Self {
        let output = buffer_handler();
        let errors = buffer_sink();
        let interp = builder
            .print_handler(output.clone())
            .error_sink(errors.clone())
            .build();
        Session {
            interp,
            output,
            errors,
        }
    }

    pub fn run(&mut self, program: &Program) -> Outcome {
        let result = self.interp.interpret(program);
        let outcome = Outcome {
            display: result.display(),
            output: self.output.lines(),
            errors: self.errors.messages(),
            raw_errors: result.errors,
        };
        self.output.clear();
        self.errors.clear();
        outcome
    }
}

/// Run `program` in a fresh session.
pub fn run(interner: &StringInterner, program: &Program) -> Outcome {
    Session::new(interner).run(program)
}

/// `name(args...)`
pub fn call(
    b: &mut AstBuilder<'_>,
    name: &str,
    args: impl IntoIterator<Item = ExprId>,
) -> ExprId {
    let callee = b.variable(name);
    b.call(callee, args)
}
