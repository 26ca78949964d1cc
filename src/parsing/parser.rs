//! Grammar-driven parser for the SRT token stream
//!
//! The grammar is one cue production, repeated until `EOF`:
//!
//! ```text
//! Cue       := INDEX LF TIMESTAMP ARROW TIMESTAMP LF TextBlock Terminator
//! TextBlock := TEXT (LF TEXT)*
//! Terminator:= EOC | EOF
//! ```
//!
//! The parser holds a two-token window (current + next) refilled from the
//! lexer's pull interface and advances one token at a time, with no
//! backtracking. The first mismatch aborts the whole parse: there is no
//! recovery and no partial result.

use crate::error::Error;
use crate::lexing::lexer::Lexer;
use crate::lexing::tokens::{Token, TokenKind};
use crate::model::cue::Cue;
use crate::model::duration::Duration;

/// Single-use parser over one token stream.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    next: Token,
}

impl Parser {
    /// Creates a parser and fills the two-token window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let next = lexer.next_token();
        Parser {
            lexer,
            current,
            next,
        }
    }

    /// Parses the entire input, collecting one cue per grammar match.
    ///
    /// Returns the full sequence only if every production up to `EOF`
    /// succeeds.
    pub fn parse(mut self) -> Result<Vec<Cue>, Error> {
        let mut cues = Vec::new();

        while self.current.kind != TokenKind::Eof {
            cues.push(self.parse_cue()?);
        }

        Ok(cues)
    }

    /// Matches one cue production against the token stream.
    fn parse_cue(&mut self) -> Result<Cue, Error> {
        let index_token = self.expect(TokenKind::Index)?;
        let index = index_token
            .literal
            .parse::<u32>()
            .map_err(|_| numeric_error(&index_token))?;

        self.expect(TokenKind::Lf)?;

        let start = parse_timestamp(&self.expect(TokenKind::Timestamp)?)?;
        self.expect(TokenKind::Arrow)?;
        let end = parse_timestamp(&self.expect(TokenKind::Timestamp)?)?;

        self.expect(TokenKind::Lf)?;

        // TextBlock: at least one TEXT token; line breaks between text lines
        // are structural noise and are discarded.
        if self.current.kind != TokenKind::Text {
            return Err(self.unexpected(TokenKind::Text));
        }

        let mut lines = Vec::new();
        while matches!(self.current.kind, TokenKind::Text | TokenKind::Lf) {
            if self.current.kind == TokenKind::Text {
                lines.push(self.current.literal.clone());
            }
            self.advance();
        }
        let text = lines.join("\n");

        // Terminator: the blank separator line, or the end of the input.
        if self.current.kind != TokenKind::Eoc && self.current.kind != TokenKind::Eof {
            return Err(self.unexpected(TokenKind::Eoc));
        }
        self.advance();

        Ok(Cue {
            index,
            start,
            end,
            text,
        })
    }

    /// Consumes and returns the current token if it has the expected kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != kind {
            return Err(self.unexpected(kind));
        }
        let token = self.current.clone();
        self.advance();
        Ok(token)
    }

    fn unexpected(&self, expected: TokenKind) -> Error {
        Error::Syntax {
            expected,
            found: self.current.kind,
            position: self.current.position,
        }
    }

    /// Slides the two-token window forward by one.
    fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.next, self.lexer.next_token());
    }
}

/// Decomposes a `HH:MM:SS,mmm` literal into its fields and combines them
/// into a single millisecond offset.
///
/// The lexer's shape check guarantees fixed-width ASCII digit fields, so the
/// byte slicing below is safe; the conversion failures are checked anyway.
fn parse_timestamp(token: &Token) -> Result<Duration, Error> {
    let literal = &token.literal;
    let hours = parse_field(&literal[0..2], token)?;
    let minutes = parse_field(&literal[3..5], token)?;
    let seconds = parse_field(&literal[6..8], token)?;
    let millis = parse_field(&literal[9..12], token)?;

    Ok(Duration::from_parts(hours, minutes, seconds, millis))
}

fn parse_field(field: &str, token: &Token) -> Result<i64, Error> {
    field.parse::<i64>().map_err(|_| numeric_error(token))
}

fn numeric_error(token: &Token) -> Error {
    Error::Numeric {
        literal: token.literal.clone(),
        position: token.position,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parse(input: &str) -> Result<Vec<Cue>, Error> {
        Parser::new(Lexer::new(input)).parse()
    }

    #[test]
    fn test_parses_two_cues_with_exact_fields() {
        let input = "1\n00:00:01,000 --> 00:00:04,000\nHello World!\n\n2\n00:00:05,000 --> 00:00:07,000\nBye";
        let cues = parse(input).unwrap();

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].index, 1);
        assert_eq!(cues[0].start, Duration::from_millis(1_000));
        assert_eq!(cues[0].end, Duration::from_millis(4_000));
        assert_eq!(cues[0].text, "Hello World!");
        assert_eq!(cues[1].index, 2);
        assert_eq!(cues[1].start, Duration::from_millis(5_000));
        assert_eq!(cues[1].end, Duration::from_millis(7_000));
        assert_eq!(cues[1].text, "Bye");
    }

    #[test]
    fn test_multiline_text_is_joined_with_newlines() {
        let input = "1\n00:00:01,000 --> 00:00:04,000\nFirst line\nSecond line\nThird line";
        let cues = parse(input).unwrap();

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "First line\nSecond line\nThird line");
    }

    #[test]
    fn test_trailing_blank_line_is_accepted() {
        let input = "1\n00:00:01,000 --> 00:00:04,000\nHello\n\n";
        let cues = parse(input).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Hello");
    }

    #[test]
    fn test_empty_input_parses_to_no_cues() {
        assert_eq!(parse("").unwrap(), vec![]);
    }

    #[test]
    fn test_indices_are_taken_literally() {
        // Non-sequential and duplicate indices are not the parser's concern.
        let input = "7\n00:00:01,000 --> 00:00:02,000\nA\n\n7\n00:00:03,000 --> 00:00:04,000\nB";
        let cues = parse(input).unwrap();
        assert_eq!(cues[0].index, 7);
        assert_eq!(cues[1].index, 7);
    }

    #[test]
    fn test_end_before_start_is_permitted() {
        let input = "1\n00:00:04,000 --> 00:00:01,000\nBackwards";
        let cues = parse(input).unwrap();
        assert_eq!(cues[0].start, Duration::from_millis(4_000));
        assert_eq!(cues[0].end, Duration::from_millis(1_000));
    }

    #[test]
    fn test_index_overflow_is_a_numeric_error() {
        let input = "99999999999\n00:00:01,000 --> 00:00:04,000\nHello";
        let err = parse(input).unwrap_err();
        assert!(matches!(err, Error::Numeric { .. }), "got {:?}", err);
    }

    #[rstest]
    #[case("-->", "expected INDEX, got ILLEGAL at line 1, column 1")]
    #[case(" --> ", "expected INDEX, got ARROW at line 1, column 2")]
    #[case("First line", "expected INDEX, got TEXT at line 1, column 1")]
    #[case("00:00:01,123", "expected INDEX, got TIMESTAMP at line 1, column 1")]
    #[case("1a", "expected INDEX, got TEXT at line 1, column 1")]
    #[case("1 00:00:01,123", "expected INDEX, got TEXT at line 1, column 1")]
    #[case("1 must be LF", "expected INDEX, got TEXT at line 1, column 1")]
    #[case("1\n --> ", "expected TIMESTAMP, got ARROW at line 2, column 2")]
    #[case("1\ntest --> 00:00:01,456", "expected TIMESTAMP, got TEXT at line 2, column 1")]
    #[case("1\n00:00:00,456 test", "expected ARROW, got TEXT at line 2, column 14")]
    #[case("1\n00:00:00,456 --> 1", "expected TIMESTAMP, got INDEX at line 2, column 18")]
    #[case("1\n00:00:00,45", "expected TIMESTAMP, got TEXT at line 2, column 1")]
    #[case(
        "1\n00:00:00,456 --> 00:00:01,456",
        "expected LF, got EOF at line 2, column 29"
    )]
    #[case(
        "1\n00:00:00,456 --> 00:0:01,456",
        "expected TIMESTAMP, got TEXT at line 2, column 18"
    )]
    #[case(
        "1\n00:00:00,456 --> 00:00:01,456\nHello world!\n\n2\n00:00:02,456 --> 00:00:03,456\n",
        "expected TEXT, got EOF at line 7, column 0"
    )]
    #[case(
        "1\n00:00:00,000 --> 00:00:01,000\nHello\n2\n00:00:02,000 --> 00:00:03,000\nWorld",
        "expected EOC, got INDEX at line 4, column 1"
    )]
    fn test_malformed_input_diagnostics(#[case] input: &str, #[case] expected: &str) {
        let err = parse(input).unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
}
