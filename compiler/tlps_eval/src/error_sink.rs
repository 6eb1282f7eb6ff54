//! Destination for runtime error reports.
//!
//! Every error that reaches the top level is reported here before execution
//! moves on to the next statement. Mirrors [`crate::print_handler`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::EvalError;

pub enum ErrorSinkImpl {
    /// Writes the rendered error, and its backtrace if any, to stderr.
    Stderr,
    /// Keeps every reported error for later inspection.
    Buffer(Mutex<Vec<EvalError>>),
    Silent,
}

impl ErrorSinkImpl {
    pub fn report(&self, err: &EvalError) {
        match self {
            Self::Stderr => {
                eprintln!("{err}");
                if let Some(backtrace) = &err.backtrace {
                    eprint!("{backtrace}");
                }
            }
            Self::Buffer(errors) => errors.lock().push(err.clone()),
            Self::Silent => {}
        }
    }

    /// Errors reported so far, oldest first. Empty unless buffering.
    pub fn errors(&self) -> Vec<EvalError> {
        match self {
            Self::Buffer(errors) => errors.lock().clone(),
            Self::Stderr | Self::Silent => Vec::new(),
        }
    }

    /// Reported errors rendered as `[line L] Error at 'x': message`.
    pub fn messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }

    pub fn clear(&self) {
        if let Self::Buffer(errors) = self {
            errors.lock().clear();
        }
    }
}

/// Error sink shared between the interpreter and its host.
pub type SharedErrorSink = Arc<ErrorSinkImpl>;

pub fn stderr_sink() -> SharedErrorSink {
    Arc::new(ErrorSinkImpl::Stderr)
}

/// Sink that collects errors for later inspection.
pub fn buffer_sink() -> SharedErrorSink {
    Arc::new(ErrorSinkImpl::Buffer(Mutex::new(Vec::new())))
}

pub fn silent_sink() -> SharedErrorSink {
    Arc::new(ErrorSinkImpl::Silent)
}
