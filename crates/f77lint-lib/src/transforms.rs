//! Source-to-source transforms over the parsed tree, plus the two rewrites
//! that work on the raw line stream before logical assembly.

use f77lint_core::{satisfies, wildcard};

use crate::blocks::{BlockKind, InnerBlock, Node, OuterBlock};
use crate::line::{LineKind, MARGIN_COLUMN, CONTINUATION_COLUMN, RawLine};
use crate::logical::LogicalLine;
use crate::visit::{Visitor, render};

/// Identity: every raw line comes back as its original text.
struct Plain;

impl Visitor for Plain {
    type Item = String;

    fn raw_line(&mut self, line: &RawLine) -> Vec<String> {
        vec![line.original.clone()]
    }
}

/// Echo the source exactly as it was read.
pub fn plain(block: &OuterBlock) -> String {
    render(&mut Plain, block)
}

struct RemoveComments;

impl Visitor for RemoveComments {
    type Item = String;

    fn raw_line(&mut self, line: &RawLine) -> Vec<String> {
        if line.is_comment() {
            Vec::new()
        } else {
            vec![line.original.clone()]
        }
    }
}

/// Drop every comment line.
pub fn remove_comments(block: &OuterBlock) -> String {
    render(&mut RemoveComments, block)
}

/// Re-indent code by block depth, leaving comments untouched.
struct Indent {
    current: usize,
    width: usize,
}

impl Visitor for Indent {
    type Item = String;

    fn raw_line(&mut self, line: &RawLine) -> Vec<String> {
        if line.is_comment() {
            return vec![line.original.clone()];
        }
        let extra = if line.kind == LineKind::Continuation {
            self.width
        } else {
            0
        };
        let head: String = line.original.chars().take(MARGIN_COLUMN).collect();
        let tab = " ".repeat(self.current + extra);
        vec![format!("{head}{tab}{}", line.code.trim_start())]
    }

    fn inner_block(&mut self, block: &InnerBlock) -> Vec<String> {
        self.current += self.width;
        let out = self.visit_children(&block.children);
        self.current -= self.width;
        out
    }
}

pub const DEFAULT_INDENT_WIDTH: usize = 4;

pub fn indent(block: &OuterBlock, width: usize) -> String {
    render(
        &mut Indent {
            current: 1,
            width,
        },
        block,
    )
}

/// Rebuild each line from its parsed pieces: label field, continuation
/// mark, then the concatenated token text. Round-trips well-formed input.
struct Reconstruct;

impl Visitor for Reconstruct {
    type Item = String;

    fn raw_line(&mut self, line: &RawLine) -> Vec<String> {
        if line.is_comment() {
            return vec![line.original.clone()];
        }
        let head = match line.kind {
            LineKind::Continuation => {
                let mark = line.cont.expect("continuation lines carry their mark");
                format!("{}{mark}", " ".repeat(CONTINUATION_COLUMN))
            }
            _ => match line.label {
                Some(label) => format!("{label:<width$}", width = MARGIN_COLUMN),
                None => " ".repeat(MARGIN_COLUMN),
            },
        };
        let body: String = line.tokens.iter().map(|token| token.value.as_str()).collect();
        vec![format!("{head}{body}")]
    }
}

pub fn reconstruct(block: &OuterBlock) -> String {
    render(&mut Reconstruct, block)
}

/// Structural listing: one line per statement, `"||| "` per nesting level,
/// comments omitted.
struct PrintDetails {
    level: usize,
    statement: Option<&'static str>,
}

impl Visitor for PrintDetails {
    type Item = String;

    fn raw_line(&mut self, line: &RawLine) -> Vec<String> {
        match line.kind {
            LineKind::Comment => Vec::new(),
            LineKind::Continuation => {
                self.level += 1;
                let out = vec![format!(
                    "{}{} continued: {}",
                    "||| ".repeat(self.level),
                    self.statement.unwrap_or(""),
                    line.code.trim_start()
                )];
                self.level -= 1;
                out
            }
            LineKind::Initial => {
                let statement = line.statement.expect("initial lines carry a statement");
                let info = match line.label {
                    Some(label) => format!("{statement}[{label}]: "),
                    None => format!("{statement}: "),
                };
                vec![format!(
                    "{}{info}{}",
                    "||| ".repeat(self.level),
                    line.code.trim_start()
                )]
            }
        }
    }

    fn logical_line(&mut self, line: &LogicalLine) -> Vec<String> {
        self.statement = Some(line.statement);
        let mut out = Vec::new();
        for child in &line.children {
            out.extend(self.raw_line(child));
        }
        out
    }

    fn inner_block(&mut self, block: &InnerBlock) -> Vec<String> {
        self.level += 1;
        let out = self.visit_children(&block.children);
        self.level -= 1;
        out
    }
}

pub fn print_details(block: &OuterBlock) -> String {
    render(
        &mut PrintDetails {
            level: 0,
            statement: None,
        },
        block,
    )
}

/// Collapse each maximal run of blank lines to a single empty line.
/// Works on the raw stream, before logical-line assembly.
pub fn remove_blanks(lines: &[RawLine]) -> String {
    let blank = satisfies(
        |line: &RawLine| line.original.trim().is_empty(),
        "blank line",
    );
    let collapsed = blank
        .singleton()
        .many1()
        .map(|_| vec![blank_line()])
        .or(wildcard().singleton());
    let children = collapsed
        .many()
        .parse(lines)
        .expect("the wildcard alternative consumes any line");
    plain(&raw_source(children))
}

/// Rewrite old-style `c`/`C`/`*` comment markers to `!`, preserving the
/// rest of the line. Works on the raw stream.
pub fn new_comments(lines: &[RawLine]) -> String {
    let upgrade = satisfies(|line: &RawLine| line.is_comment(), "comment")
        .map(upgrade_comment)
        .or(wildcard());
    let children = upgrade
        .singleton()
        .many()
        .parse(lines)
        .expect("the wildcard alternative consumes any line");
    plain(&raw_source(children))
}

fn raw_source(children: Vec<RawLine>) -> OuterBlock {
    OuterBlock {
        kind: BlockKind::Source,
        children: children.into_iter().map(Node::Raw).collect(),
    }
}

fn blank_line() -> RawLine {
    RawLine::new("\n").expect("a bare newline is a comment line")
}

fn upgrade_comment(line: RawLine) -> RawLine {
    match line.original.chars().next() {
        Some('c') | Some('C') | Some('*') => {
            let rest: String = line.original.chars().skip(1).collect();
            RawLine::new(&format!("!{rest}")).expect("still a comment line")
        }
        _ => line,
    }
}

#[cfg(test)]
#[path = "transforms_tests.rs"]
mod transforms_tests;
