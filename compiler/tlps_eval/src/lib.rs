//! tlps eval - tree-walking evaluator for tlps programs.
//!
//! Executes a [`tlps_ir::Program`] produced by a parser or by
//! [`tlps_ir::AstBuilder`].
//!
//! # Architecture
//!
//! - `Value`: dynamically-typed runtime values, including function values
//! - `Environment`: lexical scope chain plus the interpreter's scope stack
//! - `Interpreter`: statement execution and expression evaluation, with
//!   RAII scope guards so every exit path restores the scope stack
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `EvalError` / `ControlAction`: runtime errors and `return` unwinding
//!
//! Output goes through a [`PrintHandlerImpl`]; errors that reach the top
//! level go through an [`ErrorSinkImpl`]. Both default to the process's
//! standard streams and can be swapped for buffers.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod diagnostics;
mod environment;
pub mod error_sink;
pub mod errors;
mod interpreter;
mod natives;
mod operators;
pub mod print_handler;
mod stack;
mod unary_operators;
mod value;

use std::sync::Once;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{Environment, LocalScope, Scope, Unbound};
pub use error_sink::{buffer_sink, silent_sink, stderr_sink, ErrorSinkImpl, SharedErrorSink};
pub use errors::{
    BacktraceFrame, ControlAction, ErrorCategory, ErrorLocation, EvalBacktrace, EvalError,
    EvalErrorKind, EvalResult,
};
pub use interpreter::{Interpretation, Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use natives::{clock, default_natives};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;
pub use value::{Callable, NativeFn, NativeFunction, UserFunction, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=tlps_eval=debug` for statement failures and native
/// registration, `RUST_LOG=tlps_eval=trace` for every function call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host may already have installed a subscriber; keep theirs.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests;
