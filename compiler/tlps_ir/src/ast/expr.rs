//! Expression nodes.

use std::fmt;

use crate::{BinaryOp, ExprId, ExprRange, LogicalOp, Name, Span, Token, UnaryOp};

/// Literal value as written in source.
///
/// String literals are interned; the evaluator materializes them into runtime
/// strings on evaluation.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Literal {
    Number(f64),
    Str(Name),
    Bool(bool),
    Nil,
}

/// Expression node.
#[derive(Copy, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
///
/// Every node that can fail at runtime carries the token to blame.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(Literal),

    /// Parenthesized expression: `(expr)`
    Grouping(ExprId),

    Unary {
        op: UnaryOp,
        operator: Token,
        operand: ExprId,
    },

    Binary {
        left: ExprId,
        op: BinaryOp,
        operator: Token,
        right: ExprId,
    },

    /// `and`/`or`, evaluated with short-circuiting.
    Logical {
        left: ExprId,
        op: LogicalOp,
        operator: Token,
        right: ExprId,
    },

    Variable {
        name: Token,
    },

    /// `name = value`; an expression yielding the assigned value.
    Assign {
        name: Token,
        value: ExprId,
    },

    /// `callee(args)`. `paren` is the closing parenthesis.
    Call {
        callee: ExprId,
        paren: Token,
        args: ExprRange,
    },
}
