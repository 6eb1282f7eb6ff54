//! Runtime errors and control-flow signals.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the typed category of a failure. Factory functions
//! (e.g. `operands_not_numbers()`) are the public way to build errors; the
//! interpreter then pins them to the offending token with [`EvalError::at`].
//!
//! # Return Is Not An Error
//!
//! `return` unwinds through the same `Err` channel as failures, but as a
//! distinct [`ControlAction::Return`] variant. Function-call boundaries match
//! on the variant, so a genuine error can never be mistaken for a return.

use std::fmt;

use tlps_ir::{Span, StringLookup, Token};

use crate::Value;

/// Result of evaluating an expression or executing a statement.
pub type EvalResult<T = Value> = Result<T, ControlAction>;

/// Typed error category.
///
/// The `Display` output is the human-readable description shown to users.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Type
    #[error("Operand must be a number.")]
    OperandNotNumber,
    #[error("Operands must be a number.")]
    OperandsNotNumbers,
    #[error("Operands must be two numbers or two strings.")]
    InvalidAddOperands,
    #[error("Can only call functions and classes.")]
    NotCallable { type_name: &'static str },
    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },

    // Access
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },

    // Control
    #[error("Cannot return from top-level code.")]
    ReturnOutsideFunction,

    // Resource
    #[error("Maximum call depth exceeded (limit: {depth}).")]
    StackOverflow { depth: usize },

    /// Failure raised by a host-provided native function.
    #[error("{message}")]
    Native { message: String },
}

/// Coarse grouping of error kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Operand, argument or arity mismatch.
    Type,
    /// Name not bound anywhere in the scope chain.
    UndefinedVariable,
    /// Misplaced control flow.
    Control,
    /// Configured resource limit hit.
    Resource,
    /// Reported by a native function.
    Native,
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OperandNotNumber
            | Self::OperandsNotNumbers
            | Self::InvalidAddOperands
            | Self::NotCallable { .. }
            | Self::ArityMismatch { .. } => ErrorCategory::Type,
            Self::UndefinedVariable { .. } => ErrorCategory::UndefinedVariable,
            Self::ReturnOutsideFunction => ErrorCategory::Control,
            Self::StackOverflow { .. } => ErrorCategory::Resource,
            Self::Native { .. } => ErrorCategory::Native,
        }
    }
}

/// Where an error happened: the blamed token, resolved for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorLocation {
    pub lexeme: String,
    pub line: u32,
    pub span: Span,
}

impl ErrorLocation {
    pub fn from_token(token: Token, interner: &impl StringLookup) -> Self {
        ErrorLocation {
            lexeme: interner.lookup(token.lexeme).to_string(),
            line: token.line,
            span: token.span,
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Function name.
    pub name: String,
    /// Line of the call site.
    pub line: u32,
}

/// Snapshot of the call stack at an error site, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {} called at line {}", frame.name, frame.line)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Offending token, once the interpreter has attributed the error.
    pub location: Option<ErrorLocation>,
    /// Call stack at the error site, attached when the error leaves a function.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            location: None,
            backtrace: None,
        }
    }

    /// Attribute the error to `token`, unless it is already located.
    ///
    /// The innermost attribution wins: an error raised deep inside a call
    /// keeps its original location when it passes the call's paren.
    #[must_use]
    pub fn at(mut self, token: Token, interner: &impl StringLookup) -> Self {
        if self.location.is_none() {
            self.location = Some(ErrorLocation::from_token(token, interner));
        }
        self
    }

    /// Attach a backtrace, unless one is already present.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() && !backtrace.is_empty() {
            self.backtrace = Some(backtrace);
        }
        self
    }

    /// The human-readable description, without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    #[inline]
    pub fn is_type_error(&self) -> bool {
        self.category() == ErrorCategory::Type
    }

    /// Source line of the offending token, if located.
    pub fn line(&self) -> Option<u32> {
        self.location.as_ref().map(|loc| loc.line)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(
                f,
                "[line {}] Error at '{}': {}",
                loc.line, loc.lexeme, self.kind
            ),
            None => write!(f, "Error: {}", self.kind),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Non-local exit from evaluation.
///
/// Propagated through `Err` so `?` unwinds both, but only `Error` is a
/// failure. `Return` is caught by the nearest function-call boundary.
#[derive(Clone, Debug)]
pub enum ControlAction {
    /// A runtime error.
    Error(Box<EvalError>),
    /// `return` unwinding to the nearest function invocation.
    Return(Value),
}

impl ControlAction {
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Convert into an error.
    ///
    /// A `Return` that escapes every function becomes `ReturnOutsideFunction`.
    pub fn into_eval_error(self) -> EvalError {
        match self {
            Self::Error(err) => *err,
            Self::Return(_) => return_outside_function(),
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        Self::Error(Box::new(err))
    }
}

// Type Errors

/// Unary operand is not a number.
#[cold]
pub fn operand_not_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandNotNumber)
}

/// Binary operands are not both numbers.
#[cold]
pub fn operands_not_numbers() -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandsNotNumbers)
}

/// `+` applied to anything but two numbers or two strings.
#[cold]
pub fn invalid_add_operands() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAddOperands)
}

/// Call target is not a function.
#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

/// Wrong number of arguments.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

// Access Errors

/// Name not found in any enclosing scope.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

// Control Errors

/// `return` executed outside any function body.
#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnOutsideFunction)
}

// Resource Errors

/// Configured call depth limit exceeded.
#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

// Native Errors

/// Failure reported by a native function.
#[cold]
pub fn native_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Native {
        message: message.into(),
    })
}
