//! tlps IR - syntax tree types for the tlps evaluator.
//!
//! This crate contains the data the evaluator reads:
//! - Spans and tokens for error attribution
//! - Names for interned identifiers
//! - Flat, arena-allocated expression and statement nodes
//! - `AstBuilder` for hosts (parsers, tests) that construct programs
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, nodes reference each other through
//!   `ExprId`/`StmtId` indices into an `ExprArena`
//! - **Immutable After Build**: a finished `Program` shares its arena behind an
//!   `Arc`; the evaluator only reads it

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ExprArena, Program, SharedArena};
pub use ast::{
    BinaryOp, Expr, ExprKind, FunctionDecl, Literal, LogicalOp, Stmt, StmtKind, UnaryOp,
};
pub use builder::AstBuilder;
pub use expr_id::{ExprId, ExprRange, FunctionId, StmtId, StmtRange};
pub use interner::{SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind};
