//! Backtracking parser-combinator engine.
//!
//! One engine drives every layer of f77lint: the character-level tokenizer,
//! the raw-line assembler, and the logical-line block recognizer all run the
//! same primitives over different atom types. Parsers are first-class,
//! cloneable values; every combinator returns a new parser and never mutates
//! its input stream.

pub mod parse;
pub mod text;

pub use parse::{
    Failure, ParseResult, Parser, Sequence, Success, defer, eof, fail, matches, satisfies, succeed,
    wildcard,
};
pub use text::{
    alphanumeric, digit, exact, exact_nocase, letter, liberal, none_of, one_of, spaces, whitespace,
};
