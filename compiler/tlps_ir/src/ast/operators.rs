//! Binary, logical and unary operators.

use crate::TokenKind;

/// Binary operators.
///
/// `and`/`or` are not here: they short-circuit and live in [`LogicalOp`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }

    /// The token kind a parser produces for this operator.
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
            Self::Eq => TokenKind::EqualEqual,
            Self::NotEq => TokenKind::BangEqual,
            Self::Lt => TokenKind::Less,
            Self::LtEq => TokenKind::LessEqual,
            Self::Gt => TokenKind::Greater,
            Self::GtEq => TokenKind::GreaterEqual,
        }
    }

    /// Map a parser token kind back to a binary operator.
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::EqualEqual => Self::Eq,
            TokenKind::BangEqual => Self::NotEq,
            TokenKind::Less => Self::Lt,
            TokenKind::LessEqual => Self::LtEq,
            TokenKind::Greater => Self::Gt,
            TokenKind::GreaterEqual => Self::GtEq,
            _ => return None,
        })
    }
}

/// Short-circuiting logical operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::And => TokenKind::And,
            Self::Or => TokenKind::Or,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation: `-x`
    Neg,
    /// Truthiness negation: `!x`
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }

    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Neg => TokenKind::Minus,
            Self::Not => TokenKind::Bang,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_token_kind_roundtrip() {
        for op in [
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Eq,
            BinaryOp::NotEq,
            BinaryOp::Lt,
            BinaryOp::LtEq,
            BinaryOp::Gt,
            BinaryOp::GtEq,
        ] {
            assert_eq!(BinaryOp::from_token_kind(op.token_kind()), Some(op));
        }
        assert_eq!(BinaryOp::from_token_kind(TokenKind::And), None);
    }
}
