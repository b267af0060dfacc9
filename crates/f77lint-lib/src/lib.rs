//! f77lint: a static analyzer and source transformer for fixed-form
//! Fortran 77.
//!
//! # Pipeline
//!
//! ```text
//! source text -> RawLine (classify) -> LogicalLine (fold continuations)
//!             -> OuterBlock tree (nest if/do blocks and program units)
//!             -> transforms / analyses
//! ```
//!
//! # Example
//!
//! ```
//! let source = "      program hi\n      end\n";
//! let tree = f77lint_lib::parse(source).expect("well-formed source");
//! assert_eq!(f77lint_lib::transforms::plain(&tree), source);
//! ```

pub mod analysis;
pub mod blocks;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod line;
pub mod logical;
pub mod transforms;
pub mod visit;

pub use blocks::{BlockKind, InnerBlock, Node, OuterBlock};
pub use error::ParseFailure;
pub use lexer::{Tag, Token};
pub use line::{LineKind, RawLine};
pub use logical::LogicalLine;

/// Classify each physical line of `source`. Lines keep their trailing
/// newline, and a final unterminated line survives as-is.
pub fn raw_lines(source: &str) -> Result<Vec<RawLine>, ParseFailure> {
    source.split_inclusive('\n').map(RawLine::new).collect()
}

/// Fold raw lines into logical lines.
pub fn logical_lines(lines: &[RawLine]) -> Result<Vec<LogicalLine>, ParseFailure> {
    logical::assemble(lines)
}

/// Nest logical lines into program units.
pub fn parse_source(lines: &[LogicalLine]) -> Result<OuterBlock, ParseFailure> {
    blocks::parse_source(lines)
}

/// Run the whole pipeline on a source text.
pub fn parse(source: &str) -> Result<OuterBlock, ParseFailure> {
    let raw = raw_lines(source)?;
    let logical = logical_lines(&raw)?;
    parse_source(&logical)
}
