//! Pull-based lexer for the SRT grammar
//!
//! The lexer scans the input one code point at a time and produces a lazy,
//! finite, forward-only sequence of tokens via [`Lexer::next_token`]. It
//! owns all position tracking: every token carries the immutable
//! [`Position`] at which it starts.
//!
//! Scanning rules, in priority order:
//! 1. ASCII spaces before a token are skipped and never preserved.
//! 2. Exhausted input emits `EOF` (repeatedly, if polled again).
//! 3. A digit run is a `TIMESTAMP` when the greedy digit/`:`/`,` scan that
//!    follows it matches the exact `DD:DD:DD,DDD` shape, an `INDEX` when the
//!    run is terminated by a line break or end of input, and otherwise falls
//!    back to a `TEXT` token covering the rest of the line from the original
//!    start.
//! 4. A single `\n` emits `LF`; two consecutive `\n` emit a single `EOC`.
//! 5. `-->` is an `ARROW` only when immediately preceded and followed by a
//!    space; violating either adjacency yields `ILLEGAL`.
//! 6. Anything else starts a `TEXT` token extending to the end of the line.
//!
//! `\r\n` sequences are normalized to `\n` before scanning, so positions are
//! computed on the normalized text and downstream logic only ever sees
//! single-character line breaks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexing::position::Position;
use crate::lexing::tokens::{Token, TokenKind};

/// The exact timestamp shape: 12 characters, colons at positions 2 and 5,
/// a comma at position 8, digits elsewhere.
static TIMESTAMP_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}$").expect("valid pattern"));

/// Single-pass scanner over one input text.
///
/// A `Lexer` is single-use: construct it, pull tokens until `EOF`, discard
/// it. Independent inputs may be scanned concurrently on independent
/// instances; no global state is touched.
pub struct Lexer {
    chars: Vec<char>,
    /// Index of the current character in `chars`
    pos: usize,
    /// Index of the next character to load
    read_pos: usize,
    /// Current character, `None` once the input is exhausted
    ch: Option<char>,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Creates a lexer over the given text and primes the first character.
    ///
    /// UTF-8 validity is a property of `&str`; byte-level inputs go through
    /// [`crate::parse_bytes`], which validates eagerly before scanning.
    pub fn new(input: &str) -> Self {
        let normalized = input.replace("\r\n", "\n");
        let mut lexer = Lexer {
            chars: normalized.chars().collect(),
            pos: 0,
            read_pos: 0,
            ch: None,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Produces the next token, advancing the scan.
    ///
    /// Terminated by exactly one `EOF` per pass over the input; calling
    /// again after `EOF` yields `EOF` at the same position.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.ch else {
            return Token::new(TokenKind::Eof, "", self.position());
        };

        if ch.is_ascii_digit() {
            return self.read_digits();
        }

        match ch {
            '\n' => self.read_line_break(),
            '-' if self.peek(1) == Some('-') && self.peek(2) == Some('>') => self.read_arrow(),
            _ => {
                let start = self.pos;
                let position = self.position();
                self.read_text(start, position)
            }
        }
    }

    /// A digit run resolves to `TIMESTAMP`, `INDEX`, or whole-line `TEXT`
    /// depending on what follows it.
    fn read_digits(&mut self) -> Token {
        let start = self.pos;
        let position = self.position();

        while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
            self.read_char();
        }

        match self.ch {
            Some(':') | Some(',') => {
                // Greedily consume the candidate timestamp, then validate
                // its shape; a mismatch turns the rest of the line into TEXT.
                while matches!(self.ch, Some(c) if c.is_ascii_digit() || c == ':' || c == ',') {
                    self.read_char();
                }
                let literal = self.slice_from(start);
                if TIMESTAMP_SHAPE.is_match(&literal) {
                    Token::new(TokenKind::Timestamp, literal, position)
                } else {
                    self.read_text(start, position)
                }
            }
            Some('\n') | None => Token::new(TokenKind::Index, self.slice_from(start), position),
            // Trailing non-break characters mean the digits were not a
            // standalone index; the whole line is free text.
            Some(_) => self.read_text(start, position),
        }
    }

    /// A single `\n` is `LF`; two consecutive `\n` collapse into one `EOC`.
    fn read_line_break(&mut self) -> Token {
        let position = self.position();
        self.read_char();

        if self.ch == Some('\n') {
            self.read_char();
            Token::new(TokenKind::Eoc, "\n\n", position)
        } else {
            Token::new(TokenKind::Lf, "\n", position)
        }
    }

    /// `-->` must be immediately preceded and followed by a space to count
    /// as an `ARROW`; anything else is `ILLEGAL`.
    fn read_arrow(&mut self) -> Token {
        let position = self.position();
        let preceded_by_space = self.pos > 0 && self.chars[self.pos - 1] == ' ';

        self.read_char();
        self.read_char();
        self.read_char();

        if !preceded_by_space || self.ch != Some(' ') {
            return Token::new(TokenKind::Illegal, "-->", position);
        }

        Token::new(TokenKind::Arrow, "-->", position)
    }

    /// Consumes to the next line break or end of input and emits `TEXT`
    /// covering everything from `start`.
    fn read_text(&mut self, start: usize, position: Position) -> Token {
        while matches!(self.ch, Some(c) if c != '\n') {
            self.read_char();
        }
        Token::new(TokenKind::Text, self.slice_from(start), position)
    }

    /// Loads the next code point, updating line/column bookkeeping.
    fn read_char(&mut self) {
        match self.chars.get(self.read_pos) {
            Some(&c) => {
                self.ch = Some(c);
                self.pos = self.read_pos;
                self.read_pos += 1;
                if c == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }
            }
            None => {
                self.pos = self.read_pos;
                self.ch = None;
            }
        }
    }

    /// Returns the code point `n` positions ahead without consuming, or
    /// `None` past the end of input. `peek(1)` is the character after the
    /// current one.
    fn peek(&self, n: usize) -> Option<char> {
        if n == 0 {
            return None;
        }
        self.chars.get(self.read_pos + n - 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.ch == Some(' ') {
            self.read_char();
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The literal text from `start` up to (excluding) the current character.
    fn slice_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }
}
