//! Lexical scopes and the interpreter's scope stack.
//!
//! Scopes form a parent-linked chain. A closure keeps a handle to the scope
//! it was declared in, so a scope lives as long as any block, call or
//! function value still refers to it, and writes through one handle are
//! visible through every other.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tlps_ir::{Name, StringLookup, Token};

use crate::errors::{undefined_variable, EvalError};
use crate::Value;

/// Error returned by `Scope::assign` when no scope in the chain binds the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unbound;

/// A single-threaded shared handle with interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. Not `Send`: the
/// evaluator runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &LocalScope<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope: name-to-value bindings plus an optional enclosing scope.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create an empty root scope.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any existing binding here.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Find `name` in this scope or the nearest enclosing scope that binds it.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Never creates a binding.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), Unbound> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(Unbound)
    }

    /// Whether `name` is bound directly in this scope.
    pub fn contains_local(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }
}

/// Scope stack for the interpreter.
///
/// The bottom entry is always the global scope. Blocks push a fresh child of
/// the current scope; function calls push a scope whose parent is the
/// callee's closure, which need not be anywhere on the stack.
pub struct Environment {
    /// Stack of scopes, with current scope at the top.
    scopes: Vec<LocalScope<Scope>>,
    global: LocalScope<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    /// Number of scopes on the stack, globals included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a new child of the current scope.
    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Make an already-built scope current.
    #[inline]
    pub fn push_existing(&mut self, scope: LocalScope<Scope>) {
        self.scopes.push(scope);
    }

    /// Pop the current scope. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Handle to the current scope.
    #[inline]
    pub fn current_scope(&self) -> LocalScope<Scope> {
        self.current().clone()
    }

    #[inline]
    fn current(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    pub fn global(&self) -> &LocalScope<Scope> {
        &self.global
    }

    /// Define a variable in the current scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.current().borrow_mut().define(name, value);
    }

    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global.borrow_mut().define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current().borrow().lookup(name)
    }

    /// Read the variable named by `name`.
    pub fn get(&self, name: Token, interner: &impl StringLookup) -> Result<Value, EvalError> {
        self.lookup(name.lexeme)
            .ok_or_else(|| undefined_variable(interner.lookup(name.lexeme)).at(name, interner))
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn assign(
        &mut self,
        name: Token,
        value: Value,
        interner: &impl StringLookup,
    ) -> Result<(), EvalError> {
        self.current()
            .borrow_mut()
            .assign(name.lexeme, value)
            .map_err(|Unbound| undefined_variable(interner.lookup(name.lexeme)).at(name, interner))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
