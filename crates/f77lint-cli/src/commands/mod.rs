pub mod analyze;
pub mod transform;

use std::path::Path;

/// Read a source file, or exit with a diagnostic.
fn read_source(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}: {err}", path.display());
            std::process::exit(2);
        }
    }
}
