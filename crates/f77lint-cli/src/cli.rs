//! CLI construction: one subcommand per task, each taking a source file.

use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

/// Build the complete CLI with all task subcommands.
pub fn build_cli() -> Command {
    Command::new("f77lint")
        .about("Analyze and transform fixed-form Fortran 77 source")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(task_command("plain", "Echo the source file back unchanged"))
        .subcommand(task_command("remove-comments", "Strip comment lines"))
        .subcommand(task_command(
            "remove-blanks",
            "Collapse each run of blank lines to one empty line",
        ))
        .subcommand(task_command("indent", "Re-indent code by block depth"))
        .subcommand(task_command(
            "print-details",
            "List the nested statement structure",
        ))
        .subcommand(task_command(
            "new-comments",
            "Rewrite old-style comment markers to '!'",
        ))
        .subcommand(task_command(
            "reconstruct",
            "Rebuild the source from the parse tree",
        ))
        .subcommand(task_command(
            "analyze",
            "Report label and variable lifetimes per program unit",
        ))
}

fn task_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name).about(about).arg(filename_arg())
}

/// Source file to operate on (positional).
fn filename_arg() -> Arg {
    Arg::new("filename")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Fixed-form Fortran 77 source file")
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
