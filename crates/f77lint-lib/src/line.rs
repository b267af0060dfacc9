//! Physical-line classification.
//!
//! Fixed-form rules: columns 1-5 hold the optional statement label, column 6
//! marks continuation when non-blank and not `0`, code starts at column 7.
//! Comment lines are `c`/`*` in column 1, `!` after optional blanks, or
//! blank lines.

use f77lint_core::{Parser, liberal, matches, none_of};

use crate::error::ParseFailure;
use crate::grammar::{self, Phrase};
use crate::lexer::{self, Token};

/// Column index of the continuation mark (zero-based).
pub const CONTINUATION_COLUMN: usize = 5;

/// Column index where code starts (zero-based).
pub const MARGIN_COLUMN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Initial,
    Continuation,
}

/// One physical source line, classified.
#[derive(Debug, Clone)]
pub struct RawLine {
    /// The exact source line, newline included.
    pub original: String,
    pub kind: LineKind,
    /// Everything from column 7 on; empty for comments.
    pub code: String,
    /// Full tokenization of `code`.
    pub tokens: Vec<Token>,
    /// Tokens after the recognized statement keyword; equals `tokens` when
    /// no keyword was recognized.
    pub tokens_after: Vec<Token>,
    /// Canonical statement phrase; set on initial lines only.
    pub statement: Option<&'static str>,
    /// Label parsed from columns 1-5 of an initial line.
    pub label: Option<u32>,
    /// The continuation mark in column 6.
    pub cont: Option<char>,
}

impl RawLine {
    pub fn new(line: &str) -> Result<RawLine, ParseFailure> {
        let lowered: Vec<char> = line.trim_end().to_lowercase().chars().collect();

        if is_comment(&lowered) {
            return Ok(RawLine {
                original: line.to_string(),
                kind: LineKind::Comment,
                code: String::new(),
                tokens: Vec::new(),
                tokens_after: Vec::new(),
                statement: None,
                label: None,
                cont: None,
            });
        }

        let chars: Vec<char> = line.chars().collect();
        let code_chars: &[char] = chars.get(MARGIN_COLUMN..).unwrap_or(&[]);
        let code: String = code_chars.iter().collect();
        let tokens = lexer::tokenize(code_chars);

        if lowered.len() > CONTINUATION_COLUMN
            && matches(&continuation_mark(), &lowered, CONTINUATION_COLUMN)
        {
            assert!(
                lowered[..CONTINUATION_COLUMN].iter().all(|c| c.is_whitespace()),
                "continuation line has a non-blank label field: {:?}",
                line.trim_end()
            );
            return Ok(RawLine {
                original: line.to_string(),
                kind: LineKind::Continuation,
                code,
                tokens_after: tokens.clone(),
                tokens,
                statement: None,
                label: None,
                cont: Some(chars[CONTINUATION_COLUMN]),
            });
        }

        let label_field: Vec<char> = lowered
            .iter()
            .take(CONTINUATION_COLUMN)
            .copied()
            .collect();
        let label = if label_field.iter().any(|c| !c.is_whitespace()) {
            let digits = liberal(grammar::label())
                .parse(&label_field)
                .map_err(|failure| ParseFailure::in_line(failure, line))?;
            Some(digits.parse::<u32>().expect("label fits in five digits"))
        } else {
            None
        };

        let (statement, tokens_after) = classify_statement(code_chars, &tokens);

        Ok(RawLine {
            original: line.to_string(),
            kind: LineKind::Initial,
            code,
            tokens,
            tokens_after,
            statement: Some(statement),
            label,
            cont: None,
        })
    }

    pub fn is_comment(&self) -> bool {
        self.kind == LineKind::Comment
    }
}

/// Column 6 marks a continuation when it is neither blank nor `0`.
fn continuation_mark() -> Parser<char, String> {
    none_of("0 ")
}

fn is_comment(lowered: &[char]) -> bool {
    match lowered.first() {
        None => true,
        Some('c') | Some('*') => true,
        _ => {
            let mut rest = lowered.iter().skip_while(|&&c| c == ' ' || c == '\t');
            rest.next() == Some(&'!')
        }
    }
}

thread_local! {
    static PHRASES: Vec<(&'static Phrase, Parser<char, String>)> =
        grammar::all().into_iter().map(|p| (p, phrase_parser(p))).collect();
}

fn phrase_parser(phrase: &Phrase) -> Parser<char, String> {
    let mut words = phrase.words.iter();
    let first = words.next().expect("phrases have at least one word");
    words.fold(grammar::keyword(first), |acc, word| {
        acc.then(grammar::keyword(word))
    })
}

/// First-match statement detection over the catalog. On a match,
/// `tokens_after` is the tokenization of the code from the match end;
/// otherwise the line is an assignment and keeps the full token stream.
fn classify_statement(code: &[char], tokens: &[Token]) -> (&'static str, Vec<Token>) {
    PHRASES.with(|phrases| {
        for (phrase, parser) in phrases {
            if let Ok(success) = parser.scan(code, 0) {
                return (phrase.text, lexer::tokenize_from(code, success.end));
            }
        }
        (grammar::ASSIGNMENT, tokens.to_vec())
    })
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod line_tests;
