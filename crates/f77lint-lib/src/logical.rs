//! Logical lines: an initial line merged with its continuations, with the
//! surrounding comment lines carried along.

use f77lint_core::{Parser, satisfies};

use crate::error::ParseFailure;
use crate::lexer::Token;
use crate::line::{LineKind, RawLine};

/// One statement as the compiler sees it. Exactly one child is an initial
/// line; comments before it and comments/continuations after it ride along.
#[derive(Debug, Clone)]
pub struct LogicalLine {
    pub children: Vec<RawLine>,
    pub statement: &'static str,
    pub label: Option<u32>,
    /// Newline-joined `code` of the non-comment children.
    pub code: String,
    pub tokens: Vec<Token>,
    pub tokens_after: Vec<Token>,
}

impl LogicalLine {
    fn new(children: Vec<RawLine>) -> LogicalLine {
        let initials: Vec<&RawLine> = children
            .iter()
            .filter(|line| line.kind == LineKind::Initial)
            .collect();
        assert_eq!(
            initials.len(),
            1,
            "a logical line holds exactly one initial line"
        );
        let initial = initials[0];

        let statement = initial
            .statement
            .expect("initial lines always carry a statement");
        let label = initial.label;

        let code_lines: Vec<&RawLine> = children
            .iter()
            .filter(|line| line.kind != LineKind::Comment)
            .collect();
        let code = code_lines
            .iter()
            .map(|line| line.code.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let tokens = code_lines
            .iter()
            .flat_map(|line| line.tokens.iter().cloned())
            .collect();
        let tokens_after = code_lines
            .iter()
            .flat_map(|line| line.tokens_after.iter().cloned())
            .collect();

        LogicalLine {
            children,
            statement,
            label,
            code,
            tokens,
            tokens_after,
        }
    }

    /// Lowered values of the `name` tokens after the statement keyword.
    pub fn mentioned_names(&self) -> Vec<String> {
        self.tokens_after
            .iter()
            .filter(|token| token.tag == crate::lexer::Tag::Name)
            .map(|token| token.value.to_lowercase())
            .collect()
    }
}

fn of_kind(kind: LineKind, expected: &str) -> Parser<RawLine, RawLine> {
    satisfies(move |line: &RawLine| line.kind == kind, expected)
}

/// Group raw lines into logical lines:
/// `logical_line := comment* initial (comment | continuation)*`.
///
/// A continuation with no preceding initial line fails the parse.
pub fn assemble(lines: &[RawLine]) -> Result<Vec<LogicalLine>, ParseFailure> {
    let comment = of_kind(LineKind::Comment, "comment");
    let continuation = of_kind(LineKind::Continuation, "continuation");
    let initial = of_kind(LineKind::Initial, "initial");

    let logical_line = comment
        .clone()
        .singleton()
        .many()
        .then(initial.singleton())
        .then(comment.or(continuation).singleton().many())
        .map(LogicalLine::new);

    logical_line
        .singleton()
        .many()
        .parse(lines)
        .map_err(|failure| {
            let context = lines
                .get(failure.position)
                .map(|line| line.original.clone());
            ParseFailure::at_line(failure, context)
        })
}

#[cfg(test)]
#[path = "logical_tests.rs"]
mod logical_tests;
