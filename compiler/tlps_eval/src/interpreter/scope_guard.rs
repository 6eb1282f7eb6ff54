//! RAII scope guards for the interpreter's environment.
//!
//! [`ScopedInterpreter`] pops the scope it pushed when dropped, whether the
//! body finished normally, unwound with an error or `return`, or panicked.
//! A call guard additionally restores the arena that was current before the
//! callee's arena was swapped in.
//!
//! ```text
//! interpreter.with_env_scope(|scoped| scoped.execute_statements(body))
//! ```

use std::ops::{Deref, DerefMut};

use tlps_ir::SharedArena;

use super::Interpreter;
use crate::environment::{LocalScope, Scope};

/// Guard that undoes a scope push on drop.
///
/// Derefs to the interpreter, so it can be used exactly like one.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    /// Arena to reinstate on drop, set when entering a call.
    restore_arena: Option<SharedArena>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
        if let Some(arena) = self.restore_arena.take() {
            self.interpreter.arena = arena;
        }
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a fresh child of the current scope until the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.push_scope();
        ScopedInterpreter {
            interpreter: self,
            restore_arena: None,
        }
    }

    /// Make `scope` current until the guard drops.
    pub fn scoped_in(&mut self, scope: LocalScope<Scope>) -> ScopedInterpreter<'_, 'a> {
        self.env.push_existing(scope);
        ScopedInterpreter {
            interpreter: self,
            restore_arena: None,
        }
    }

    /// Run `f` inside a new block scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` with `scope` current and `arena` as the node source.
    ///
    /// Used for function bodies, which live in the arena of the program that
    /// declared them, not necessarily the one running now.
    pub fn with_call_scope<T, F>(&mut self, scope: LocalScope<Scope>, arena: SharedArena, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let previous = std::mem::replace(&mut self.arena, arena);
        let mut scoped = self.scoped_in(scope);
        scoped.restore_arena = Some(previous);
        f(&mut scoped)
    }
}

#[cfg(test)]
mod tests;
