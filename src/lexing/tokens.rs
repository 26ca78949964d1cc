//! Token types for the SRT lexer
//!
//! A token is a classified, positioned lexical unit: its kind, the literal
//! text it covers, and the position where it starts. Tokens are created by
//! the lexer, consumed transiently by the parser, and never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexing::position::Position;

/// The classification of a token (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A malformed arrow-like sequence that failed the adjacency rules
    Illegal,

    /// A standalone digit run terminated by a line break or end of input
    Index,

    /// A digit/colon/comma run matching the exact `DD:DD:DD,DDD` shape
    Timestamp,

    /// The `-->` separator between the start and end timestamps
    Arrow,

    /// Any other run of characters extending to the end of the line
    Text,

    /// A single line break
    Lf,

    /// End of cue: a blank line (two consecutive line breaks)
    Eoc,

    /// End of input; emitted exactly once per scan, then repeated on demand
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Index => "INDEX",
            TokenKind::Timestamp => "TIMESTAMP",
            TokenKind::Arrow => "ARROW",
            TokenKind::Text => "TEXT",
            TokenKind::Lf => "LF",
            TokenKind::Eoc => "EOC",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{}", name)
    }
}

/// One lexical unit: kind, covered literal text, and start position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }
}
