//! Command-line interface for srt
//! This binary is used to inspect and edit SRT subtitle files.
//!
//! Usage:
//!   srt print `<path>`                    - Parse and re-emit the normalized SRT text
//!   srt tokens `<path>`                   - Dump the raw token stream as JSON
//!   srt cues `<path>`                     - Dump the parsed cue list as JSON
//!   srt shift `<path>` --by `<millis>`    - Shift every cue by a millisecond offset
//!   srt remove `<path>` --cue `<n>`       - Remove the n-th cue (1-based) and renumber

use clap::{Arg, Command};

use srt::lexing::{Lexer, Token, TokenKind};
use srt::model::{Duration, Subtitles};

fn main() {
    let matches = Command::new("srt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and editing SRT subtitle files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("print")
                .about("Parse a file and re-emit the normalized SRT text")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the raw token stream as JSON")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("cues")
                .about("Dump the parsed cue list as JSON")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("shift")
                .about("Shift every cue by a millisecond offset")
                .arg(path_arg())
                .arg(
                    Arg::new("by")
                        .long("by")
                        .help("Signed offset in milliseconds")
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove one cue and renumber the rest")
                .arg(path_arg())
                .arg(
                    Arg::new("cue")
                        .long("cue")
                        .help("1-based position of the cue to remove")
                        .required(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("print", sub)) => {
            let subtitles = open_or_exit(sub.get_one::<String>("path").unwrap());
            println!("{}", subtitles);
        }
        Some(("tokens", sub)) => {
            handle_tokens_command(sub.get_one::<String>("path").unwrap());
        }
        Some(("cues", sub)) => {
            let subtitles = open_or_exit(sub.get_one::<String>("path").unwrap());
            print_json(&subtitles.cues);
        }
        Some(("shift", sub)) => {
            let offset = parse_number_or_exit::<i64>(sub.get_one::<String>("by").unwrap(), "--by");
            let subtitles = open_or_exit(sub.get_one::<String>("path").unwrap());
            println!("{}", subtitles.shift(Duration::from_millis(offset)));
        }
        Some(("remove", sub)) => {
            let position =
                parse_number_or_exit::<usize>(sub.get_one::<String>("cue").unwrap(), "--cue");
            if position == 0 {
                eprintln!("Error: --cue positions start at 1");
                std::process::exit(1);
            }
            let subtitles = open_or_exit(sub.get_one::<String>("path").unwrap());
            println!("{}", subtitles.remove_at(position - 1));
        }
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the SRT file")
        .required(true)
        .index(1)
}

/// Handle the tokens command: lex the file without parsing, through EOF.
fn handle_tokens_command(path: &str) {
    let source = std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });
    let text = std::str::from_utf8(&source).unwrap_or_else(|e| {
        eprintln!("Error: input is not valid UTF-8: {}", e);
        std::process::exit(1);
    });

    let mut lexer = Lexer::new(text);
    let mut tokens: Vec<Token> = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    print_json(&tokens);
}

fn open_or_exit(path: &str) -> Subtitles {
    srt::open(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn parse_number_or_exit<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    value.parse::<T>().unwrap_or_else(|_| {
        eprintln!("Error: {} expects a number, got {:?}", flag, value);
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    let output = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}
