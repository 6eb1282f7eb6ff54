//! Programmatic AST construction.
//!
//! `AstBuilder` is how hosts without a text front end (embedders, tests)
//! produce programs for the evaluator. It interns lexemes, synthesizes tokens
//! with advancing byte offsets and the current line, and freezes the arena
//! into a [`Program`] when done.
//!
//! Children are allocated before their parents, so build inner nodes first:
//!
//! ```text
//! let mut b = AstBuilder::new(&interner);
//! let two = b.number(2.0);
//! let three = b.number(3.0);
//! let sum = b.binary(two, BinaryOp::Add, three);
//! let print = b.print(sum);
//! let program = b.finish([print]);
//! ```

use crate::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, FunctionDecl, Literal, LogicalOp, Program,
    SharedArena, Span, Stmt, StmtId, StmtKind, StringInterner, Token, TokenKind, UnaryOp,
};

/// Incremental builder for a single program's arena.
pub struct AstBuilder<'a> {
    interner: &'a StringInterner,
    arena: ExprArena,
    /// Line stamped on every token created from now on.
    line: u32,
    /// Next synthetic byte offset.
    offset: u32,
}

impl<'a> AstBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        AstBuilder {
            interner,
            arena: ExprArena::new(),
            line: 1,
            offset: 0,
        }
    }

    /// Set the source line for subsequently created tokens.
    pub fn at_line(&mut self, line: u32) -> &mut Self {
        self.line = line;
        self
    }

    /// Create a token for `lexeme` at the next synthetic position.
    pub fn token(&mut self, kind: TokenKind, lexeme: &str) -> Token {
        let len = u32::try_from(lexeme.len()).unwrap_or(u32::MAX);
        let start = self.offset;
        let end = start.saturating_add(len);
        self.offset = end.saturating_add(1);
        Token::new(kind, self.interner.intern(lexeme), Span::new(start, end), self.line)
    }

    fn expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    fn stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }

    fn expr_span(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    fn stmt_span(&self, id: StmtId) -> Span {
        self.arena.get_stmt(id).span
    }

    // Expressions

    pub fn number(&mut self, value: f64) -> ExprId {
        let token = self.token(TokenKind::Number, &value.to_string());
        self.expr(ExprKind::Literal(Literal::Number(value)), token.span)
    }

    pub fn string(&mut self, value: &str) -> ExprId {
        let token = self.token(TokenKind::String, value);
        self.expr(ExprKind::Literal(Literal::Str(token.lexeme)), token.span)
    }

    pub fn boolean(&mut self, value: bool) -> ExprId {
        let (kind, text) = if value {
            (TokenKind::True, "true")
        } else {
            (TokenKind::False, "false")
        };
        let token = self.token(kind, text);
        self.expr(ExprKind::Literal(Literal::Bool(value)), token.span)
    }

    pub fn nil(&mut self) -> ExprId {
        let token = self.token(TokenKind::Nil, "nil");
        self.expr(ExprKind::Literal(Literal::Nil), token.span)
    }

    pub fn grouping(&mut self, inner: ExprId) -> ExprId {
        let span = self.expr_span(inner);
        self.expr(ExprKind::Grouping(inner), span)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        let operator = self.token(op.token_kind(), op.as_symbol());
        let span = operator.span.merge(self.expr_span(operand));
        self.expr(
            ExprKind::Unary {
                op,
                operator,
                operand,
            },
            span,
        )
    }

    pub fn binary(&mut self, left: ExprId, op: BinaryOp, right: ExprId) -> ExprId {
        let operator = self.token(op.token_kind(), op.as_symbol());
        let span = self.expr_span(left).merge(self.expr_span(right));
        self.expr(
            ExprKind::Binary {
                left,
                op,
                operator,
                right,
            },
            span,
        )
    }

    pub fn logical(&mut self, left: ExprId, op: LogicalOp, right: ExprId) -> ExprId {
        let operator = self.token(op.token_kind(), op.as_symbol());
        let span = self.expr_span(left).merge(self.expr_span(right));
        self.expr(
            ExprKind::Logical {
                left,
                op,
                operator,
                right,
            },
            span,
        )
    }

    pub fn variable(&mut self, name: &str) -> ExprId {
        let name = self.token(TokenKind::Identifier, name);
        self.expr(ExprKind::Variable { name }, name.span)
    }

    pub fn assign(&mut self, name: &str, value: ExprId) -> ExprId {
        let name = self.token(TokenKind::Identifier, name);
        let span = name.span.merge(self.expr_span(value));
        self.expr(ExprKind::Assign { name, value }, span)
    }

    pub fn call(&mut self, callee: ExprId, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let args = self.arena.alloc_expr_list(args);
        let paren = self.token(TokenKind::RightParen, ")");
        let span = self.expr_span(callee).merge(paren.span);
        self.expr(ExprKind::Call { callee, paren, args }, span)
    }

    // Statements

    pub fn expression(&mut self, expr: ExprId) -> StmtId {
        let span = self.expr_span(expr);
        self.stmt(StmtKind::Expression(expr), span)
    }

    pub fn print(&mut self, expr: ExprId) -> StmtId {
        let keyword = self.token(TokenKind::Print, "print");
        let span = keyword.span.merge(self.expr_span(expr));
        self.stmt(StmtKind::Print(expr), span)
    }

    pub fn var(&mut self, name: &str, init: Option<ExprId>) -> StmtId {
        let name = self.token(TokenKind::Identifier, name);
        let span = match init {
            Some(init) => name.span.merge(self.expr_span(init)),
            None => name.span,
        };
        self.stmt(StmtKind::Var { name, init }, span)
    }

    pub fn block(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtId {
        let open = self.token(TokenKind::LeftBrace, "{");
        let body = self.arena.alloc_stmt_list(stmts);
        let close = self.token(TokenKind::RightBrace, "}");
        self.stmt(StmtKind::Block(body), open.span.merge(close.span))
    }

    pub fn if_stmt(
        &mut self,
        condition: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    ) -> StmtId {
        let keyword = self.token(TokenKind::If, "if");
        let last = else_branch.unwrap_or(then_branch);
        let span = keyword.span.merge(self.stmt_span(last));
        self.stmt(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        )
    }

    pub fn while_stmt(&mut self, condition: ExprId, body: StmtId) -> StmtId {
        let keyword = self.token(TokenKind::While, "while");
        let span = keyword.span.merge(self.stmt_span(body));
        self.stmt(StmtKind::While { condition, body }, span)
    }

    /// `fun name(params) { body }`
    pub fn function(
        &mut self,
        name: &str,
        params: &[&str],
        body: impl IntoIterator<Item = StmtId>,
    ) -> StmtId {
        let keyword = self.token(TokenKind::Fun, "fun");
        let name = self.token(TokenKind::Identifier, name);
        let params = params
            .iter()
            .map(|param| self.token(TokenKind::Identifier, param))
            .collect();
        let body = self.arena.alloc_stmt_list(body);
        let close = self.token(TokenKind::RightBrace, "}");
        let span = keyword.span.merge(close.span);
        let function = self.arena.alloc_function(FunctionDecl {
            name,
            params,
            body,
            span,
        });
        self.stmt(StmtKind::Function(function), span)
    }

    pub fn return_stmt(&mut self, value: Option<ExprId>) -> StmtId {
        let keyword = self.token(TokenKind::Return, "return");
        let span = match value {
            Some(value) => keyword.span.merge(self.expr_span(value)),
            None => keyword.span,
        };
        self.stmt(StmtKind::Return { keyword, value }, span)
    }

    /// Freeze the arena into a program running `statements` in order.
    pub fn finish(mut self, statements: impl IntoIterator<Item = StmtId>) -> Program {
        let statements = self.arena.alloc_stmt_list(statements);
        Program::new(SharedArena::new(self.arena), statements)
    }
}

#[cfg(test)]
mod tests;
