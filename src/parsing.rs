//! Parsing area: the grammar matcher that materializes cue records
//!
//! The parser consumes the lexer's token stream through a two-token window
//! and produces either the full cue sequence or the first positional error.

pub mod parser;

pub use parser::Parser;
