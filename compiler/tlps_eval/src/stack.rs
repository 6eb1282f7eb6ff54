//! Stack growth for deeply recursive programs.
//!
//! Each call in the evaluated program costs several native frames
//! (`evaluate` -> call -> `execute_statements` -> `execute` -> ...), so a
//! few thousand levels of user recursion would exhaust a default thread
//! stack. Recursive entry points run through [`ensure_sufficient_stack`],
//! which moves onto a fresh segment when the current one runs low.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
