//! The seven text-to-text tasks share one render path: the line-level
//! rewrites stop after raw classification, everything else parses the full
//! tree first.

use std::path::Path;

use f77lint_lib::{ParseFailure, transforms};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Plain,
    RemoveComments,
    RemoveBlanks,
    Indent,
    NewComments,
    Reconstruct,
    PrintDetails,
}

pub fn render(transform: Transform, source: &str) -> Result<String, ParseFailure> {
    match transform {
        Transform::RemoveBlanks => {
            let raw = f77lint_lib::raw_lines(source)?;
            Ok(transforms::remove_blanks(&raw))
        }
        Transform::NewComments => {
            let raw = f77lint_lib::raw_lines(source)?;
            Ok(transforms::new_comments(&raw))
        }
        Transform::Plain => Ok(transforms::plain(&f77lint_lib::parse(source)?)),
        Transform::RemoveComments => {
            Ok(transforms::remove_comments(&f77lint_lib::parse(source)?))
        }
        Transform::Indent => Ok(transforms::indent(
            &f77lint_lib::parse(source)?,
            transforms::DEFAULT_INDENT_WIDTH,
        )),
        Transform::Reconstruct => Ok(transforms::reconstruct(&f77lint_lib::parse(source)?)),
        Transform::PrintDetails => Ok(transforms::print_details(&f77lint_lib::parse(source)?)),
    }
}

pub fn run(transform: Transform, path: &Path) {
    let source = super::read_source(path);
    match render(transform, &source) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod transform_tests;
