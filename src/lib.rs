//! # srt
//!
//! A parser and editor for the SubRip subtitle format.
//!
//! SRT text is a sequence of cue blocks separated by one blank line:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! Hello World!
//!
//! 2
//! 00:00:05,000 --> 00:00:07,000
//! Bye
//! ```
//!
//! [`parse`] turns such text into a [`Subtitles`] collection of timed
//! [`Cue`] records; the collection supports time-shifting, removal with
//! renumbering, and serialization back to the wire form. Parsing is
//! fail-fast: the first lexical or structural violation aborts with a
//! positional [`Error`], never a partial result.

pub mod error;
pub mod lexing;
pub mod model;
pub mod parsing;

use std::fs;
use std::path::Path;

pub use error::Error;
pub use model::{Cue, Duration, Subtitles};

use lexing::Lexer;
use parsing::Parser;

/// Parses already-decoded SRT text into a cue collection.
pub fn parse(input: &str) -> Result<Subtitles, Error> {
    let cues = Parser::new(Lexer::new(input)).parse()?;
    Ok(Subtitles { cues })
}

/// Validates that the bytes are UTF-8, then parses them.
///
/// The validation is eager: it happens before any scanning, so an encoding
/// problem anywhere in the input is reported even if it sits after the last
/// cue.
pub fn parse_bytes(bytes: &[u8]) -> Result<Subtitles, Error> {
    let input = std::str::from_utf8(bytes).map_err(|e| Error::Encoding(e.to_string()))?;
    parse(input)
}

/// Reads the file at the given path and parses its contents.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Subtitles, Error> {
    let bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
    parse_bytes(&bytes)
}
