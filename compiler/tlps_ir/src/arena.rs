//! Arena storage for AST nodes.
//!
//! An `ExprArena` owns every node of one program. Once built it is frozen
//! behind a [`SharedArena`] so that function values can keep their
//! declaring arena alive after the program that declared them has finished.

use std::ops::Index;
use std::sync::Arc;

use crate::{
    Expr, ExprId, ExprRange, FunctionDecl, FunctionId, Stmt, StmtId, StmtRange,
};

/// Arena holding the expression, statement and function nodes of a program.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    functions: Vec<FunctionDecl>,
    /// Flattened call argument lists, addressed by `ExprRange`.
    expr_lists: Vec<ExprId>,
    /// Flattened block/function bodies, addressed by `StmtRange`.
    stmt_lists: Vec<StmtId>,
}

/// Convert a vector length into an arena index.
///
/// # Panics
/// Panics if the arena grows beyond `u32::MAX` entries.
fn to_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST arena exceeded u32::MAX entries"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression node.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Allocate a statement node.
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// Allocate a function declaration.
    pub fn alloc_function(&mut self, function: FunctionDecl) -> FunctionId {
        let id = FunctionId::new(to_index(self.functions.len()));
        self.functions.push(function);
        id
    }

    /// Allocate a contiguous list of expressions.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_index(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        let len = to_index(self.expr_lists.len()) - start;
        ExprRange::new(start, len)
    }

    /// Allocate a contiguous list of statements.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_index(self.stmt_lists.len());
        self.stmt_lists.extend(stmts);
        let len = to_index(self.stmt_lists.len()) - start;
        StmtRange::new(start, len)
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn get_function(&self, id: FunctionId) -> &FunctionDecl {
        &self.functions[id.index()]
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.bounds()]
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.bounds()]
    }

    /// Number of expression nodes.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Number of statement nodes.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

impl Index<ExprId> for ExprArena {
    type Output = Expr;

    fn index(&self, id: ExprId) -> &Expr {
        self.get_expr(id)
    }
}

impl Index<StmtId> for ExprArena {
    type Output = Stmt;

    fn index(&self, id: StmtId) -> &Stmt {
        self.get_stmt(id)
    }
}

/// Frozen, shared arena.
///
/// Cloning is a reference-count bump. Function values hold one so their body
/// stays readable for as long as the function is reachable.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// Whether two handles refer to the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SharedArena {
    fn default() -> Self {
        SharedArena::new(ExprArena::new())
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A complete program: a frozen arena plus its top-level statements in order.
#[derive(Clone, Debug)]
pub struct Program {
    pub arena: SharedArena,
    pub statements: StmtRange,
}

impl Program {
    pub fn new(arena: SharedArena, statements: StmtRange) -> Self {
        Program { arena, statements }
    }

    /// Top-level statements in execution order.
    pub fn statements(&self) -> &[StmtId] {
        self.arena.get_stmt_list(self.statements)
    }
}
