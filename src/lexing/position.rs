//! Line/column tracking for source positions
//!
//! This module defines the immutable position value attached to every token.
//! Positions are produced by the lexer as it scans and are never mutated
//! afterwards; diagnostics carry them through to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in the input text (line and column).
///
/// Lines start at 1. The column is 0 immediately after a line break and
/// increments by one per code point otherwise, so the first character of a
/// line sits at column 1. Multi-byte code points count as a single column
/// unit, not one unit per byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
