use std::panic::{catch_unwind, AssertUnwindSafe};

use tlps_ir::{ExprArena, StringInterner};

use super::*;
use crate::Value;

fn interpreter(interner: &StringInterner) -> Interpreter<'_> {
    Interpreter::new(interner)
}

#[test]
fn test_scoped_pops_on_normal_exit() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner);
    assert_eq!(interp.env.depth(), 1);

    {
        let scoped = interp.scoped();
        assert_eq!(scoped.env.depth(), 2);
    }

    assert_eq!(interp.env.depth(), 1);
}

#[test]
fn test_scoped_pops_on_panic() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner);

    let result = catch_unwind(AssertUnwindSafe(|| {
        let scoped = interp.scoped();
        assert_eq!(scoped.env.depth(), 2);
        panic!("test panic");
    }));

    assert!(result.is_err());
    assert_eq!(interp.env.depth(), 1);
}

#[test]
fn test_nested_scopes_unwind_fully() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner);

    let result = catch_unwind(AssertUnwindSafe(|| {
        interp.with_env_scope(|outer| {
            outer.with_env_scope(|inner| {
                assert_eq!(inner.env.depth(), 3);
                panic!("deep panic");
            })
        })
    }));

    assert!(result.is_err());
    assert_eq!(interp.env.depth(), 1);
}

#[test]
fn test_with_env_scope_returns_value_and_hides_bindings() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner);
    let x = interner.intern("x");

    let seen = interp.with_env_scope(|scoped| {
        scoped.env.define(x, Value::Number(1.0));
        scoped.env.lookup(x)
    });

    assert_eq!(seen, Some(Value::Number(1.0)));
    assert_eq!(interp.env.lookup(x), None);
}

#[test]
fn test_scoped_in_uses_given_scope() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner);
    let y = interner.intern("y");

    let detached = LocalScope::new(Scope::new());
    detached.borrow_mut().define(y, Value::Bool(true));

    {
        let scoped = interp.scoped_in(detached.clone());
        assert_eq!(scoped.env.lookup(y), Some(Value::Bool(true)));
        assert!(scoped.env.current_scope().ptr_eq(&detached));
    }
    assert_eq!(interp.env.lookup(y), None);
}

#[test]
fn test_call_scope_restores_arena() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner);
    let original = interp.arena.clone();
    let callee_arena = SharedArena::new(ExprArena::new());

    interp.with_call_scope(LocalScope::new(Scope::new()), callee_arena.clone(), |scoped| {
        assert!(scoped.arena.ptr_eq(&callee_arena));
        assert_eq!(scoped.env.depth(), 2);
    });

    assert!(interp.arena.ptr_eq(&original));
    assert_eq!(interp.env.depth(), 1);
}

#[test]
fn test_call_scope_restores_arena_on_panic() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner);
    let original = interp.arena.clone();

    let result = catch_unwind(AssertUnwindSafe(|| {
        interp.with_call_scope(LocalScope::new(Scope::new()), SharedArena::default(), |_| {
            panic!("body panicked");
        })
    }));

    assert!(result.is_err());
    assert!(interp.arena.ptr_eq(&original));
    assert_eq!(interp.env.depth(), 1);
}
