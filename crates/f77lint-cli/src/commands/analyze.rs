use std::path::Path;

use f77lint_lib::analysis;

pub fn run(path: &Path) {
    let source = super::read_source(path);
    match f77lint_lib::parse(&source) {
        Ok(tree) => print!("{}", analysis::analyze(&tree)),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
