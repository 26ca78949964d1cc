//! End-to-end parsing tests through the public entry points
//!
//! These exercise the whole pipeline (text -> lexer -> parser -> cues) the
//! way a consumer would drive it, including the file-based entry point.

use srt::model::Duration;
use srt::Error;

#[test]
fn test_two_cue_input_parses_to_exact_fields() {
    let input = "1\n00:00:01,000 --> 00:00:04,000\nHello World!\n\n2\n00:00:05,000 --> 00:00:07,000\nBye";
    let subtitles = srt::parse(input).unwrap();

    assert_eq!(subtitles.len(), 2);
    assert_eq!(subtitles.cues[0].index, 1);
    assert_eq!(subtitles.cues[0].start, Duration::from_millis(1_000));
    assert_eq!(subtitles.cues[0].end, Duration::from_millis(4_000));
    assert_eq!(subtitles.cues[0].text, "Hello World!");
    assert_eq!(subtitles.cues[1].index, 2);
    assert_eq!(subtitles.cues[1].start, Duration::from_millis(5_000));
    assert_eq!(subtitles.cues[1].end, Duration::from_millis(7_000));
    assert_eq!(subtitles.cues[1].text, "Bye");
}

#[test]
fn test_single_cue_without_trailing_separator() {
    let subtitles = srt::parse("1\n00:00:01,000 --> 00:00:04,000\nHello").unwrap();
    assert_eq!(subtitles.len(), 1);
    assert_eq!(subtitles.cues[0].text, "Hello");
}

#[test]
fn test_input_ending_with_blank_line() {
    let subtitles = srt::parse("1\n00:00:01,000 --> 00:00:04,000\nHello\n\n").unwrap();
    assert_eq!(subtitles.len(), 1);
}

#[test]
fn test_crlf_input_is_accepted() {
    let input = "1\r\n00:00:01,000 --> 00:00:04,000\r\nHello\r\n\r\n2\r\n00:00:05,000 --> 00:00:07,000\r\nBye";
    let subtitles = srt::parse(input).unwrap();
    assert_eq!(subtitles.len(), 2);
    assert_eq!(subtitles.cues[0].text, "Hello");
}

#[test]
fn test_missing_blank_separator_reports_unexpected_index() {
    let input = "1\n00:00:00,456 --> 00:00:01,456\nHello\n2\n00:00:02,456 --> 00:00:03,456\nBye";
    let err = srt::parse(input).unwrap_err();
    assert_eq!(err.to_string(), "expected EOC, got INDEX at line 4, column 1");
}

#[test]
fn test_truncated_input_after_range_line_expects_text() {
    let err = srt::parse("1\n00:00:01,000 --> 00:00:04,000\n").unwrap_err();
    assert!(
        matches!(
            err,
            Error::Syntax {
                expected: srt::lexing::TokenKind::Text,
                found: srt::lexing::TokenKind::Eof,
                ..
            }
        ),
        "got {:?}",
        err
    );
}

#[test]
fn test_serialize_then_reparse_preserves_timing_and_text() {
    let input = "3\n00:01:10,500 --> 00:01:13,000\nLine one\nLine two\n\n9\n01:02:03,004 --> 01:02:05,006\nLast";
    let original = srt::parse(input).unwrap();
    let reparsed = srt::parse(&original.to_string()).unwrap();

    assert_eq!(original.len(), reparsed.len());
    for (a, b) in original.cues.iter().zip(reparsed.cues.iter()) {
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
        assert_eq!(a.text, b.text);
    }
}

#[test]
fn test_open_reads_and_parses_a_file() {
    let subtitles = srt::open("tests/fixtures/basic.srt").unwrap();
    assert_eq!(subtitles.len(), 2);
    assert_eq!(subtitles.cues[0].text, "Hello World!");
    assert_eq!(subtitles.cues[1].text, "Bye");
}
