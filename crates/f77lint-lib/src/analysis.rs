//! Program-unit analyses: unit names, header extraction, label lifetimes,
//! variable lifetimes, and the ASCII timeline rendering.
//!
//! Line numbers are per program unit, counting logical lines only (comments
//! never reach `logical_line`, so they do not count).

use std::fmt::Write;

use indexmap::{IndexMap, IndexSet};

use crate::blocks::{Node, OuterBlock};
use crate::grammar;
use crate::lexer::Tag;
use crate::line::RawLine;
use crate::logical::LogicalLine;
use crate::visit::Visitor;

/// Width of the rendered timeline, in columns.
const GRAPH_COLS: usize = 60;

/// A unit header split into its parts.
pub struct Header<'a> {
    pub statement: &'static str,
    pub program_name: Option<String>,
    pub formal_params: Vec<String>,
    pub main_block: &'a Node,
}

/// Analyze every program unit and return the full report.
pub fn analyze(source: &OuterBlock) -> String {
    let unit_names = collect_unit_names(source);

    let mut out = String::new();
    push_line(
        &mut out,
        "line numbers refer to the line number within the program unit",
    );
    push_line(&mut out, "not counting blank lines");
    push_line(&mut out, "");
    push_line(
        &mut out,
        &format!("found program units: {}", bracketed(&unit_names)),
    );
    push_line(&mut out, "");

    for unit in &source.children {
        match unit {
            Node::Outer(unit) => analyze_unit(unit, &unit_names, &mut out),
            _ => panic!("source file children are program units"),
        }
    }

    out
}

/// The lowered name of every unit that has a header line.
pub fn collect_unit_names(source: &OuterBlock) -> Vec<String> {
    let mut names = Vec::new();
    for unit in &source.children {
        let Node::Outer(unit) = unit else {
            panic!("source file children are program units");
        };
        if let Some(Node::Logical(first)) = unit.children.first() {
            let mentioned = first.mentioned_names();
            names.push(
                mentioned
                    .first()
                    .expect("a unit header names the unit")
                    .clone(),
            );
        }
    }
    names
}

/// Split a unit into statement, name, formal parameters, and body.
pub fn analyze_header(unit: &OuterBlock) -> Header<'_> {
    match unit.children.first() {
        Some(Node::Logical(first)) => {
            let tokens: Vec<_> = first
                .tokens_after
                .iter()
                .filter(|t| t.tag != Tag::Whitespace && t.tag != Tag::Comment)
                .collect();
            assert!(!tokens.is_empty(), "unit header has a name token");
            assert_eq!(tokens[0].tag, Tag::Name, "got {}", tokens[0].tag);

            let program_name = tokens[0].value.clone();
            let formal_params = tokens[1..]
                .iter()
                .filter(|t| t.tag == Tag::Name)
                .map(|t| t.value.to_lowercase())
                .collect();

            assert_eq!(unit.children.len(), 3, "headed units have three children");
            Header {
                statement: first.statement,
                program_name: Some(program_name),
                formal_params,
                main_block: &unit.children[1],
            }
        }
        _ => {
            assert_eq!(unit.children.len(), 2, "headerless units have two children");
            Header {
                statement: "program",
                program_name: None,
                formal_params: Vec::new(),
                main_block: &unit.children[0],
            }
        }
    }
}

fn analyze_unit(unit: &OuterBlock, unit_names: &[String], out: &mut String) {
    let header = analyze_header(unit);

    push_line(
        out,
        &format!(
            "{} {} {}",
            header.statement,
            header.program_name.as_deref().unwrap_or("(anonymous)"),
            bracketed(&header.formal_params)
        ),
    );
    push_line(out, "");

    analyze_labels(header.main_block, out);
    analyze_variables(unit_names, &header.formal_params, header.main_block, out);
}

/// Collects `(line number, label)` for labeled, non-`format` lines.
struct LabelCollector {
    current_line: usize,
}

impl Visitor for LabelCollector {
    type Item = (usize, u32);

    fn raw_line(&mut self, _line: &RawLine) -> Vec<(usize, u32)> {
        Vec::new()
    }

    fn logical_line(&mut self, line: &LogicalLine) -> Vec<(usize, u32)> {
        self.current_line += 1;
        match line.label {
            Some(label) if line.statement != "format" => vec![(self.current_line, label)],
            _ => Vec::new(),
        }
    }
}

/// Records the lines whose `tokens_after` mention `target` as an integer.
struct LabelOccurrences {
    target: i64,
    current_line: usize,
    last_line: usize,
    hits: Vec<usize>,
}

impl Visitor for LabelOccurrences {
    type Item = ();

    fn raw_line(&mut self, _line: &RawLine) -> Vec<()> {
        Vec::new()
    }

    fn logical_line(&mut self, line: &LogicalLine) -> Vec<()> {
        self.current_line += 1;
        self.last_line = self.current_line;
        let mentioned = line
            .tokens_after
            .iter()
            .filter(|t| t.tag == Tag::Integer)
            .filter_map(|t| t.value.parse::<i64>().ok())
            .any(|value| value == self.target);
        if mentioned {
            self.hits.push(self.current_line);
        }
        Vec::new()
    }
}

fn analyze_labels(main_block: &Node, out: &mut String) {
    let mut collector = LabelCollector { current_line: 0 };
    let labels = collector.visit(main_block);

    if !labels.is_empty() {
        let names: Vec<u32> = labels.iter().map(|&(_, label)| label).collect();
        push_line(out, &format!("labels: {}", bracketed(&names)));
        push_line(out, "");
    }

    let mut occurrences: IndexMap<u32, Vec<usize>> = IndexMap::new();
    let mut last_line = 0;

    for &(_, label) in &labels {
        let mut walker = LabelOccurrences {
            target: i64::from(label),
            current_line: 0,
            last_line: 0,
            hits: Vec::new(),
        };
        walker.visit(main_block);
        last_line = walker.last_line;
        occurrences.insert(label, walker.hits);
    }

    for &(decl_line, label) in &labels {
        let hits = occurrences.entry(label).or_default();
        push_line(
            out,
            &format!(
                "{label} defined at: {decl_line} occurred at: {}",
                bracketed(hits)
            ),
        );
        // The declaration line joins the occurrence set only now, after the
        // report line, so the timeline still spans it.
        hits.push(decl_line);
        hits.sort_unstable();
    }
    push_line(out, "");

    let intervals = make_timeline(
        occurrences
            .iter()
            .map(|(label, hits)| (label.to_string(), hits.as_slice())),
    );
    draw_timeline(&intervals, last_line, out);
}

/// Collects every mentioned name outside `format` statements.
struct NameCollector;

impl Visitor for NameCollector {
    type Item = String;

    fn raw_line(&mut self, _line: &RawLine) -> Vec<String> {
        Vec::new()
    }

    fn logical_line(&mut self, line: &LogicalLine) -> Vec<String> {
        if line.statement == "format" {
            Vec::new()
        } else {
            line.mentioned_names()
        }
    }
}

/// Collects names declared by specification statements. `implicit none`
/// declares nothing.
struct LocalsCollector;

impl Visitor for LocalsCollector {
    type Item = String;

    fn raw_line(&mut self, _line: &RawLine) -> Vec<String> {
        Vec::new()
    }

    fn logical_line(&mut self, line: &LogicalLine) -> Vec<String> {
        if !is_specification(line.statement) {
            return Vec::new();
        }
        let names = line.mentioned_names();
        if line.statement == "implicit" && names == ["none"] {
            return Vec::new();
        }
        names
    }
}

/// Records the non-specification lines where one variable is mentioned.
struct VariableOccurrences {
    target: String,
    current_line: usize,
    last_line: usize,
    hits: Vec<usize>,
}

impl Visitor for VariableOccurrences {
    type Item = ();

    fn raw_line(&mut self, _line: &RawLine) -> Vec<()> {
        Vec::new()
    }

    fn logical_line(&mut self, line: &LogicalLine) -> Vec<()> {
        self.current_line += 1;
        self.last_line = self.current_line;
        if !is_specification(line.statement)
            && line.mentioned_names().iter().any(|name| *name == self.target)
        {
            self.hits.push(self.current_line);
        }
        Vec::new()
    }
}

fn is_specification(statement: &str) -> bool {
    grammar::SPECIFICATION.iter().any(|p| p.text == statement)
}

fn analyze_variables(
    unit_names: &[String],
    formal_params: &[String],
    main_block: &Node,
    out: &mut String,
) {
    let mut names = NameCollector;
    let unique_names: IndexSet<String> = names.visit(main_block).into_iter().collect();
    let mut locals = LocalsCollector;
    let local_variables: IndexSet<String> = locals.visit(main_block).into_iter().collect();

    let keywords = grammar::keyword_words();
    let unaccounted_for: Vec<String> = unique_names
        .iter()
        .filter(|name| {
            let name = name.as_str();
            !local_variables.contains(name)
                && !formal_params.iter().any(|p| p == name)
                && !keywords.contains(&name)
                && !grammar::INTRINSICS.contains(&name)
                && !unit_names.iter().any(|u| u == name)
        })
        .cloned()
        .collect();

    if !unaccounted_for.is_empty() {
        push_line(out, &format!("unaccounted for: {}", bracketed(&unaccounted_for)));
        push_line(out, "");
    }

    let concern: IndexSet<String> = local_variables
        .iter()
        .chain(formal_params)
        .chain(&unaccounted_for)
        .cloned()
        .collect();

    let mut occurrences: IndexMap<String, Vec<usize>> = IndexMap::new();
    let mut last_line = 0;

    for variable in &concern {
        let mut walker = VariableOccurrences {
            target: variable.clone(),
            current_line: 0,
            last_line: 0,
            hits: Vec::new(),
        };
        walker.visit(main_block);
        last_line = walker.last_line;
        occurrences.insert(variable.clone(), walker.hits);
    }

    let never_occurred: Vec<&String> = {
        let mut names: Vec<&String> = concern
            .iter()
            .filter(|name| occurrences[*name].is_empty())
            .collect();
        names.sort();
        names
    };
    if !never_occurred.is_empty() {
        push_line(out, &format!("never occurred: {}", bracketed(&never_occurred)));
        push_line(out, "");
    }

    for (variable, hits) in &occurrences {
        push_line(
            out,
            &format!("{variable} occurred at: {}", bracketed(hits)),
        );
    }

    let intervals = make_timeline(
        occurrences
            .iter()
            .map(|(name, hits)| (name.clone(), hits.as_slice())),
    );
    draw_timeline(&intervals, last_line, out);
}

/// A variable or label lifetime: first and last mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub var: String,
    pub start: usize,
    pub end: usize,
}

fn make_timeline<'a>(
    occurrences: impl Iterator<Item = (String, &'a [usize])>,
) -> Vec<Interval> {
    let mut intervals: Vec<Interval> = occurrences
        .filter(|(_, hits)| !hits.is_empty())
        .map(|(var, hits)| Interval {
            var,
            start: hits[0],
            end: hits[hits.len() - 1],
        })
        .collect();
    intervals.sort_by_key(|interval| interval.start);
    intervals
}

fn draw_timeline(intervals: &[Interval], last_line: usize, out: &mut String) {
    for interval in intervals {
        let start = graph_pos(interval.start, last_line);
        let end = graph_pos(interval.end, last_line);
        push_line(
            out,
            &format!(
                "{:<10}|{}{}{}|",
                interval.var,
                " ".repeat(start),
                "=".repeat(end - start + 1),
                " ".repeat(GRAPH_COLS - end)
            ),
        );
    }
    push_line(out, "");
}

fn graph_pos(line: usize, last_line: usize) -> usize {
    ((line as f64 / last_line as f64) * GRAPH_COLS as f64).round() as usize
}

fn bracketed<T: std::fmt::Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

fn push_line(out: &mut String, line: &str) {
    writeln!(out, "{line}").expect("writing to a String never fails");
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod analysis_tests;
