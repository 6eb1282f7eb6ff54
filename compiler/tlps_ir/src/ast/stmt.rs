//! Statement nodes and function declarations.

use std::fmt;

use crate::{ExprId, FunctionId, Span, StmtId, StmtRange, Token};

/// Statement node.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its effect.
    Expression(ExprId),

    Print(ExprId),

    /// `var name = init;` (initializer optional, defaults to nil)
    Var {
        name: Token,
        init: Option<ExprId>,
    },

    Block(StmtRange),

    If {
        condition: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },

    While {
        condition: ExprId,
        body: StmtId,
    },

    Function(FunctionId),

    Return {
        keyword: Token,
        value: Option<ExprId>,
    },
}

/// A named function declaration: `fun name(params) { body }`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: StmtRange,
    pub span: Span,
}

impl FunctionDecl {
    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
