//! Function values: host natives and user-declared functions.

use std::fmt;
use std::rc::Rc;

use tlps_ir::{FunctionDecl, FunctionId, SharedArena, Token};

use super::Value;
use crate::environment::{LocalScope, Scope};
use crate::errors::{EvalError, EvalResult};
use crate::interpreter::Interpreter;

/// Signature of a host-provided function body.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value, EvalError>;

/// A function implemented by the host.
pub struct NativeFunction {
    name: Rc<str>,
    arity: usize,
    func: Box<NativeFn>,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<Rc<str>>,
        arity: usize,
        func: impl Fn(&[Value]) -> Result<Value, EvalError> + 'static,
    ) -> Self {
        NativeFunction {
            name: name.into(),
            arity,
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Run the host body. Arity has already been checked by the caller.
    pub fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A function declared by a program.
///
/// Holds the arena its declaration lives in, so the body stays reachable
/// after the declaring program has finished, and the scope that was current
/// when the declaration executed.
pub struct UserFunction {
    decl: FunctionId,
    arena: SharedArena,
    closure: LocalScope<Scope>,
    name: Rc<str>,
    arity: usize,
}

impl UserFunction {
    pub fn new(
        decl: FunctionId,
        arena: SharedArena,
        closure: LocalScope<Scope>,
        name: impl Into<Rc<str>>,
    ) -> Self {
        let arity = arena.get_function(decl).arity();
        UserFunction {
            decl,
            arena,
            closure,
            name: name.into(),
            arity,
        }
    }

    /// The declaration node.
    pub fn decl(&self) -> &FunctionDecl {
        self.arena.get_function(self.decl)
    }

    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    /// Scope captured at declaration.
    pub fn closure(&self) -> &LocalScope<Scope> {
        &self.closure
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Rc<str> {
        Rc::clone(&self.name)
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

// Closure scopes usually contain the function itself; never print them.
impl fmt::Debug for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFunction")
            .field("name", &self.name)
            .field("decl", &self.decl)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Anything that can be the target of a call expression.
#[derive(Clone, Debug)]
pub enum Callable {
    Native(Rc<NativeFunction>),
    User(Rc<UserFunction>),
}

impl Callable {
    /// Number of parameters this callable requires.
    pub fn arity(&self) -> usize {
        match self {
            Callable::Native(f) => f.arity(),
            Callable::User(f) => f.arity(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Callable::Native(f) => f.name(),
            Callable::User(f) => f.name(),
        }
    }

    /// Identity comparison: the same function object, not the same code.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::Native(a), Callable::Native(b)) => Rc::ptr_eq(a, b),
            (Callable::User(a), Callable::User(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Invoke with already-evaluated, arity-checked arguments.
    ///
    /// `call_site` is the closing paren of the call, used to attribute
    /// errors raised by natives.
    pub fn invoke(
        &self,
        interpreter: &mut Interpreter<'_>,
        args: &[Value],
        call_site: Token,
    ) -> EvalResult {
        match self {
            Callable::Native(f) => f
                .call(args)
                .map_err(|err| interpreter.locate(err, call_site)),
            Callable::User(f) => interpreter.call_user_function(f, args, call_site),
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Native(native) => write!(f, "<native fn {}>", native.name()),
            Callable::User(user) => write!(f, "<fn {}>", user.name()),
        }
    }
}
