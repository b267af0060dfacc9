//! Character-stream helper parsers.
//!
//! Everything here produces `String`, so sequencing concatenates matched
//! text and a grammar built from these pieces reconstructs its input
//! byte-for-byte.

use crate::parse::{Failure, ParseResult, Parser, Success, satisfies};

/// Match the literal `s`, case-sensitively. The value is the matched text.
pub fn exact(s: &str) -> Parser<char, String> {
    exact_with(s, false)
}

/// Match the literal `s`, ignoring ASCII case. The value is the matched
/// text as it appears in the input.
pub fn exact_nocase(s: &str) -> Parser<char, String> {
    exact_with(s, true)
}

fn exact_with(s: &str, ignore_case: bool) -> Parser<char, String> {
    let target: Vec<char> = s.chars().collect();
    let expected = format!("'{s}'");
    Parser::new(move |input, pos| {
        let mut matched = String::with_capacity(target.len());
        for (offset, want) in target.iter().enumerate() {
            match input.get(pos + offset) {
                Some(&c) if c == *want => matched.push(c),
                Some(&c)
                    if ignore_case && c.to_ascii_lowercase() == want.to_ascii_lowercase() =>
                {
                    matched.push(c);
                }
                _ => {
                    return Err(Failure {
                        expected: expected.clone(),
                        position: pos + offset,
                    });
                }
            }
        }
        Ok(Success {
            value: matched,
            end: pos + target.len(),
        })
    })
}

/// Consume one character contained in `set`.
pub fn one_of(set: &str) -> Parser<char, String> {
    let chars: Vec<char> = set.chars().collect();
    let expected = format!("one of \"{set}\"");
    satisfies(move |c: &char| chars.contains(c), &expected).map(String::from)
}

/// Consume one character not contained in `set`.
pub fn none_of(set: &str) -> Parser<char, String> {
    let chars: Vec<char> = set.chars().collect();
    let expected = format!("none of \"{set}\"");
    satisfies(move |c: &char| !chars.contains(c), &expected).map(String::from)
}

/// One ASCII letter.
pub fn letter() -> Parser<char, String> {
    satisfies(|c: &char| c.is_ascii_alphabetic(), "letter").map(String::from)
}

/// One ASCII digit.
pub fn digit() -> Parser<char, String> {
    satisfies(|c: &char| c.is_ascii_digit(), "digit").map(String::from)
}

/// One ASCII letter or digit.
pub fn alphanumeric() -> Parser<char, String> {
    satisfies(|c: &char| c.is_ascii_alphanumeric(), "letter or digit").map(String::from)
}

/// One or more blanks or tabs.
pub fn spaces() -> Parser<char, String> {
    one_of(" \t").many1()
}

/// One or more whitespace characters of any kind, newlines included.
pub fn whitespace() -> Parser<char, String> {
    satisfies(|c: &char| c.is_whitespace(), "whitespace")
        .map(String::from)
        .many1()
}

/// `p` with optional blanks before and after; the value is `p`'s alone.
pub fn liberal(p: Parser<char, String>) -> Parser<char, String> {
    spaces().optional().skip_then(p).then_skip(spaces().optional())
}

impl<O: 'static> Parser<char, O> {
    /// Skip leading blanks and tabs, then run. Returns the raw result so
    /// callers can read the end position of a partial match.
    pub fn scan(&self, input: &[char], start: usize) -> ParseResult<O> {
        let mut at = start;
        while let Some(&c) = input.get(at) {
            if c == ' ' || c == '\t' {
                at += 1;
            } else {
                break;
            }
        }
        self.run(input, at)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
