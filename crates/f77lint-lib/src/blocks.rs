//! Nesting logical lines into block structure.
//!
//! The same combinator engine that drives the tokenizer runs here over
//! streams of logical lines. `if_block` and `do_block` are mutually
//! recursive through `defer`, and both are guarded so that only the block
//! forms nest: an arithmetic `if` or a labeled `do` stays a flat line.

use f77lint_core::{Parser, defer, matches, satisfies, wildcard};

use crate::error::ParseFailure;
use crate::grammar::{self, Phrase};
use crate::logical::LogicalLine;

/// A node of the block tree.
#[derive(Debug, Clone)]
pub enum Node {
    Raw(crate::line::RawLine),
    Logical(LogicalLine),
    Inner(InnerBlock),
    Outer(OuterBlock),
}

/// A contiguous body inside a block.
#[derive(Debug, Clone)]
pub struct InnerBlock {
    pub children: Vec<Node>,
}

/// A bracketed construct: a program unit, an `if` or `do` block, or a
/// whole source file.
#[derive(Debug, Clone)]
pub struct OuterBlock {
    pub kind: BlockKind,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    SourceFile,
    Program,
    Function,
    Subroutine,
    BlockData,
    If,
    Do,
    /// A flat sequence of raw lines, used by the line-level rewrites.
    Source,
}

type LineParser = Parser<LogicalLine, Vec<Node>>;

fn describe(phrases: &[&'static Phrase]) -> String {
    match phrases {
        [] => "nothing".to_string(),
        [one] => one.text.to_string(),
        [first, second] => format!("{} or {}", first.text, second.text),
        [init @ .., last] => {
            let names: Vec<&str> = init.iter().map(|p| p.text).collect();
            format!("one of {} or {}", names.join(", "), last.text)
        }
    }
}

/// A logical line whose statement is one of `phrases`.
fn one_of_statements(phrases: Vec<&'static Phrase>) -> Parser<LogicalLine, LogicalLine> {
    let expected = describe(&phrases);
    satisfies(
        move |line: &LogicalLine| phrases.iter().any(|p| p.text == line.statement),
        &expected,
    )
}

/// A logical line whose statement is none of `phrases`.
fn none_of_statements(phrases: Vec<&'static Phrase>) -> Parser<LogicalLine, LogicalLine> {
    let expected = format!("anything but {}", describe(&phrases));
    satisfies(
        move |line: &LogicalLine| phrases.iter().all(|p| p.text != line.statement),
        &expected,
    )
}

fn as_line(line: LogicalLine) -> Vec<Node> {
    vec![Node::Logical(line)]
}

/// Any statement that never opens a block.
fn non_block() -> LineParser {
    one_of_statements(grammar::non_block()).map(as_line)
}

/// A new-style `if` carries a `then` name-token after the condition.
fn new_style_if(line: &LogicalLine) -> bool {
    line.tokens_after.iter().any(|token| token.is_name("then"))
}

/// A block `do` has no numeric label after the keyword.
fn block_style_do(line: &LogicalLine) -> bool {
    let lowered: Vec<char> = line.code.to_lowercase().chars().collect();
    let labeled = grammar::keyword("do").then(f77lint_core::liberal(grammar::label()));
    !matches(&labeled, &lowered, 0)
}

fn wrap_if_nonempty(children: Vec<Node>) -> Vec<Node> {
    if children.is_empty() {
        Vec::new()
    } else {
        vec![Node::Inner(InnerBlock { children })]
    }
}

/// `if (...) then` ... (`else if` | `else` ...)* `end if`
fn if_block() -> LineParser {
    let begin = one_of_statements(vec![grammar::IF])
        .guard(new_style_if, "new style if")
        .map(as_line);
    let else_or_else_if =
        one_of_statements(vec![grammar::ELSE_IF, grammar::ELSE]).map(as_line);
    let inner = non_block()
        .or(defer(do_block))
        .or(defer(if_block))
        .or(none_of_statements(vec![grammar::END_IF, grammar::ELSE_IF, grammar::ELSE]).map(as_line));
    let section = inner
        .many()
        .map(wrap_if_nonempty)
        .then(else_or_else_if.optional())
        .guard(|nodes: &Vec<Node>| !nodes.is_empty(), "anything");
    let sections = section.many();
    let end = one_of_statements(vec![grammar::END_IF]).map(as_line);

    begin.then(sections).then(end).map(|children| {
        vec![Node::Outer(OuterBlock {
            kind: BlockKind::If,
            children,
        })]
    })
}

/// Block `do` ... `end do`. The body is always wrapped, even when empty.
fn do_block() -> LineParser {
    let begin = one_of_statements(vec![grammar::DO])
        .guard(block_style_do, "block style do")
        .map(as_line);
    let inner = non_block()
        .or(defer(do_block))
        .or(defer(if_block))
        .or(none_of_statements(vec![grammar::END_DO]).map(as_line))
        .many()
        .map(|children| vec![Node::Inner(InnerBlock { children })]);
    let end = one_of_statements(vec![grammar::END_DO]).map(as_line);

    begin.then(inner).then(end).map(|children| {
        vec![Node::Outer(OuterBlock {
            kind: BlockKind::Do,
            children,
        })]
    })
}

/// Organize a flat run of logical lines into nested blocks. Total: the
/// wildcard fallback passes through any line the block grammars reject.
pub fn structure(lines: Vec<LogicalLine>) -> Vec<Node> {
    let block_or_line = non_block()
        .or(do_block())
        .or(if_block())
        .or(wildcard().map(as_line));
    block_or_line
        .many()
        .parse(&lines)
        .expect("the wildcard alternative consumes any line")
}

fn top_level_block(
    kind: BlockKind,
    header: &'static Phrase,
    footer: &'static Phrase,
    header_optional: bool,
) -> LineParser {
    let header_line = one_of_statements(vec![header]).map(as_line);
    let first = if header_optional {
        header_line.optional()
    } else {
        header_line
    };
    let mid = none_of_statements(grammar::TOP_LEVEL.to_vec())
        .singleton()
        .many()
        .map(|lines| {
            vec![Node::Inner(InnerBlock {
                children: structure(lines),
            })]
        });
    let last = one_of_statements(vec![footer, grammar::END]).map(as_line);

    first.then(mid).then(last).map(move |children| {
        vec![Node::Outer(OuterBlock { kind, children })]
    })
}

/// One or more program units make a source file.
pub fn parse_source(lines: &[LogicalLine]) -> Result<OuterBlock, ParseFailure> {
    let function = top_level_block(
        BlockKind::Function,
        grammar::FUNCTION,
        grammar::END_FUNCTION,
        false,
    );
    let subroutine = top_level_block(
        BlockKind::Subroutine,
        grammar::SUBROUTINE,
        grammar::END_SUBROUTINE,
        false,
    );
    let block_data = top_level_block(
        BlockKind::BlockData,
        grammar::BLOCK_DATA,
        grammar::END_BLOCK_DATA,
        false,
    );
    let main_program =
        top_level_block(BlockKind::Program, grammar::PROGRAM, grammar::END_PROGRAM, true);

    let program_unit = function.or(subroutine).or(block_data).or(main_program);

    program_unit
        .many1()
        .map(|children| OuterBlock {
            kind: BlockKind::SourceFile,
            children,
        })
        .parse(lines)
        .map_err(|failure| {
            let context = lines
                .get(failure.position)
                .map(|line| line.code.clone());
            ParseFailure::at_line(failure, context)
        })
}

#[cfg(test)]
#[path = "blocks_tests.rs"]
mod blocks_tests;
