//! Flat AST types using arena allocation.
//!
//! - No `Box<Expr>`, nodes reference children through `ExprId`/`StmtId`
//! - Nodes are `Copy`: the evaluator copies a node out of the arena and
//!   dispatches on it without holding a borrow
//!
//! # Module Structure
//!
//! - `expr`: Expression nodes (`Expr`, `ExprKind`, `Literal`)
//! - `operators`: Binary, logical and unary operators
//! - `stmt`: Statement nodes and `FunctionDecl`

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, Literal};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{FunctionDecl, Stmt, StmtKind};
