//! Library error type.

use f77lint_core::Failure;

/// A parse that could not consume its input: what was expected, where, and
/// (when available) the offending line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} at position {position}{}", context_suffix(.nearby_context))]
pub struct ParseFailure {
    pub expected: String,
    pub position: usize,
    pub nearby_context: Option<String>,
}

impl ParseFailure {
    /// A character-level failure inside one physical line.
    pub fn in_line(failure: Failure, line: &str) -> Self {
        Self {
            expected: failure.expected,
            position: failure.position,
            nearby_context: Some(line.trim_end().to_string()),
        }
    }

    /// A failure positioned on a stream of lines; `context` is the line at
    /// the failing index, when the stream has one.
    pub fn at_line(failure: Failure, context: Option<String>) -> Self {
        Self {
            expected: failure.expected,
            position: failure.position,
            nearby_context: context.map(|text| text.trim_end().to_string()),
        }
    }
}

fn context_suffix(context: &Option<String>) -> String {
    match context {
        Some(text) => format!(", near: {text}"),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
