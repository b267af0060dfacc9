mod cli;
mod commands;

use std::path::PathBuf;

use commands::transform::Transform;

fn main() {
    let matches = cli::build_cli().get_matches();
    let (name, sub) = matches.subcommand().expect("a subcommand is required");
    let filename = sub
        .get_one::<PathBuf>("filename")
        .expect("FILE is required");

    match name {
        "plain" => commands::transform::run(Transform::Plain, filename),
        "remove-comments" => commands::transform::run(Transform::RemoveComments, filename),
        "remove-blanks" => commands::transform::run(Transform::RemoveBlanks, filename),
        "indent" => commands::transform::run(Transform::Indent, filename),
        "print-details" => commands::transform::run(Transform::PrintDetails, filename),
        "new-comments" => commands::transform::run(Transform::NewComments, filename),
        "reconstruct" => commands::transform::run(Transform::Reconstruct, filename),
        "analyze" => commands::analyze::run(filename),
        _ => unreachable!("clap should have caught this"),
    }
}
