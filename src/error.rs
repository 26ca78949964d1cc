//! Errors reported while loading, lexing, and parsing SRT input
//!
//! The policy is fail-fast: the first error anywhere in the token stream or
//! grammar match aborts the whole parse, and the caller receives only the
//! error, never a partially populated cue sequence.

use std::fmt;

use crate::lexing::position::Position;
use crate::lexing::tokens::TokenKind;

/// Errors that can occur while turning input into a cue sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input bytes are not valid UTF-8; raised before any scanning
    Encoding(String),

    /// The current token's kind does not match the grammar's expectation
    Syntax {
        expected: TokenKind,
        found: TokenKind,
        position: Position,
    },

    /// A numeric literal (index or timestamp field) failed to convert
    Numeric { literal: String, position: Position },

    /// Reading the input file failed
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encoding(msg) => write!(f, "input is not valid UTF-8: {}", msg),
            Error::Syntax {
                expected,
                found,
                position,
            } => write!(
                f,
                "expected {}, got {} at line {}, column {}",
                expected, found, position.line, position.column
            ),
            Error::Numeric { literal, position } => write!(
                f,
                "invalid numeric literal {:?} at line {}, column {}",
                literal, position.line, position.column
            ),
            Error::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
