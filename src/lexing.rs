//! Lexing area: token model, position tracking, and the pull-based lexer
//!
//! The lexer is the entry point where raw SRT text becomes a token stream.
//! The parser pulls tokens one at a time; the lexer never looks behind and
//! only peeks ahead by a bounded number of code points.

pub mod lexer;
pub mod position;
pub mod tokens;

pub use lexer::Lexer;
pub use position::Position;
pub use tokens::{Token, TokenKind};
