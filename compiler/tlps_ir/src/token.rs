//! Tokens attached to AST nodes for error attribution.
//!
//! The evaluator never re-lexes; it only reads the token a parser left on an
//! operator, name, call or `return` node so runtime errors can point back at
//! the source.

use std::fmt;

use crate::{Name, Span};

/// Lexical category of a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

/// A token: kind, interned lexeme and source position.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Name,
    pub span: Span,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: Name, span: Span, line: u32) -> Self {
        Token {
            kind,
            lexeme,
            span,
            line,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {} line {}",
            self.kind, self.lexeme, self.span, self.line
        )
    }
}
