use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static [u8], TokenKind> = {
        let mut map = HashMap::new();
        map.insert(&b"def"[..], TokenKind::Def);
        map.insert(&b"extern"[..], TokenKind::Extern);
        map
    };
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Eof,

    // Reserved
    Def,
    Extern,

    Identifier(String),
    Number(f64),

    /// Any byte no other rule claims.
    Char(u8),
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Def | TokenKind::Extern)
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self {
            TokenKind::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            TokenKind::Identifier(name) => write!(f, "Identifier({})", name),
            TokenKind::Number(value) => write!(f, "Number({})", value),
            TokenKind::Char(c) if c.is_ascii_graphic() || *c == b' ' => {
                write!(f, "Char({:?})", *c as char)
            }
            TokenKind::Char(c) => write!(f, "Char(0x{:02x})", c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}  {}", self.span.start.0, self.span.end.0, self.kind)
    }
}
