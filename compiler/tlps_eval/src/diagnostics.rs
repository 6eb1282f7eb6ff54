//! Call stack tracking for the evaluator.
//!
//! Each user-function call pushes a [`CallFrame`]; returning pops it. The
//! optional depth limit is checked on push, and errors leaving a function
//! get a snapshot of the stack as an [`EvalBacktrace`].

use std::rc::Rc;

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// A single frame in the live call stack.
#[derive(Clone, Debug)]
pub struct CallFrame {
    /// Callee name.
    pub name: Rc<str>,
    /// Line of the call site, not the definition.
    pub call_line: u32,
}

/// Live call stack for the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means unlimited: runaway recursion then exhausts the host stack.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Snapshot the stack, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f.name.to_string(),
                line: f.call_line,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a snapshot of this stack to `err`, unless it already has one.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{undefined_variable, EvalErrorKind};

    fn frame(name: &str, line: u32) -> CallFrame {
        CallFrame {
            name: Rc::from(name),
            call_line: line,
        }
    }

    #[test]
    fn test_push_pop_depth() {
        let mut stack = CallStack::default();
        assert!(stack.is_empty());
        stack.push(frame("a", 1)).unwrap();
        stack.push(frame("b", 2)).unwrap();
        assert_eq!(stack.depth(), 2);
        stack.pop();
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_limit_rejects_without_pushing() {
        let mut stack = CallStack::new(Some(2));
        stack.push(frame("f", 1)).unwrap();
        stack.push(frame("f", 1)).unwrap();
        let err = stack.push(frame("f", 1)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 2 });
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_capture_most_recent_first() {
        let mut stack = CallStack::default();
        stack.push(frame("outer", 10)).unwrap();
        stack.push(frame("inner", 3)).unwrap();

        let backtrace = stack.capture();
        let names: Vec<_> = backtrace.frames().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["inner", "outer"]);
        assert_eq!(backtrace.frames()[0].line, 3);
    }

    #[test]
    fn test_attach_backtrace() {
        let empty = CallStack::default();
        assert!(empty.attach_backtrace(undefined_variable("x")).backtrace.is_none());

        let mut stack = CallStack::default();
        stack.push(frame("f", 5)).unwrap();
        let err = stack.attach_backtrace(undefined_variable("x"));
        assert_eq!(err.backtrace.as_ref().map(EvalBacktrace::len), Some(1));

        // Innermost snapshot wins.
        stack.push(frame("g", 6)).unwrap();
        let err = stack.attach_backtrace(err);
        assert_eq!(err.backtrace.as_ref().map(EvalBacktrace::len), Some(1));
    }
}
