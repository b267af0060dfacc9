use std::path::PathBuf;

use super::build_cli;

#[test]
fn cli_definition_is_valid() {
    build_cli().debug_assert();
}

#[test]
fn every_task_takes_a_filename() {
    for task in [
        "plain",
        "remove-comments",
        "remove-blanks",
        "indent",
        "print-details",
        "new-comments",
        "reconstruct",
        "analyze",
    ] {
        let matches = build_cli()
            .try_get_matches_from(["f77lint", task, "source.f"])
            .expect("task parses");
        let (name, sub) = matches.subcommand().expect("subcommand present");
        assert_eq!(name, task);
        assert_eq!(
            sub.get_one::<PathBuf>("filename"),
            Some(&PathBuf::from("source.f"))
        );
    }
}

#[test]
fn missing_filename_is_a_usage_error() {
    assert!(build_cli().try_get_matches_from(["f77lint", "plain"]).is_err());
}

#[test]
fn unknown_task_is_a_usage_error() {
    assert!(
        build_cli()
            .try_get_matches_from(["f77lint", "frobnicate", "x.f"])
            .is_err()
    );
}
