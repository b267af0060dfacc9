use indoc::indoc;

use crate::analysis::{analyze, analyze_header, collect_unit_names};
use crate::blocks::Node;

fn parsed(source: &str) -> crate::OuterBlock {
    crate::parse(source).expect("parses")
}

#[test]
fn unit_names_are_collected_lowered() {
    let source = parsed(concat!(
        "      SUBROUTINE Calc(A)\n",
        "      end\n",
        "      program Main\n",
        "      end\n",
    ));
    assert_eq!(collect_unit_names(&source), vec!["calc", "main"]);
}

#[test]
fn headerless_units_have_no_name() {
    let source = parsed("      x = 1\n      end\n");
    assert!(collect_unit_names(&source).is_empty());
}

#[test]
fn header_extraction_splits_name_and_params() {
    let source = parsed(concat!(
        "      subroutine calc(a, b)\n",
        "      x = a + b\n",
        "      end\n",
    ));
    let Node::Outer(unit) = &source.children[0] else {
        panic!("unit expected");
    };
    let header = analyze_header(unit);
    assert_eq!(header.statement, "subroutine");
    assert_eq!(header.program_name.as_deref(), Some("calc"));
    assert_eq!(header.formal_params, vec!["a", "b"]);
}

#[test]
fn headerless_main_defaults_to_program() {
    let source = parsed("      x = 1\n      end\n");
    let Node::Outer(unit) = &source.children[0] else {
        panic!("unit expected");
    };
    let header = analyze_header(unit);
    assert_eq!(header.statement, "program");
    assert_eq!(header.program_name, None);
    assert!(header.formal_params.is_empty());
}

#[test]
fn label_lifetime_spans_declaration_and_references() {
    let report = analyze(&parsed(concat!(
        "      program hi\n",
        "      x = 1\n",
        "      x = 2\n",
        "   10 continue\n",
        "      x = 3\n",
        "      go to 10\n",
        "      x = 4\n",
        "      go to 10\n",
        "      end\n",
    )));
    assert!(report.contains("labels: [10]"));
    assert!(report.contains("10 defined at: 3 occurred at: [5, 7]"));

    // Declaration line 3 joins the interval before rendering: the bar runs
    // from line 3 of 7 to line 7 of 7.
    let start = (3.0_f64 / 7.0 * 60.0).round() as usize;
    let row = format!(
        "{:<10}|{}{}|",
        10,
        " ".repeat(start),
        "=".repeat(60 - start + 1)
    );
    assert!(report.contains(&row), "missing timeline row: {row:?}");
}

#[test]
fn format_statements_define_no_labels() {
    let report = analyze(&parsed(concat!(
        "      program hi\n",
        "   20 format (i5)\n",
        "      end\n",
    )));
    assert!(!report.contains("labels:"));
}

#[test]
fn undeclared_variables_are_unaccounted_for() {
    let report = analyze(&parsed(concat!(
        "      subroutine calc(a)\n",
        "      zzz = a\n",
        "      end\n",
    )));
    assert!(report.contains("unaccounted for: [zzz]"));
    assert!(report.contains("a occurred at: [1]"));
    assert!(report.contains("zzz occurred at: [1]"));
}

#[test]
fn intrinsics_and_keywords_are_accounted_for() {
    let report = analyze(&parsed(concat!(
        "      program hi\n",
        "      x = sqrt(4.0)\n",
        "      end\n",
    )));
    // `sqrt` is intrinsic; only `x` is unaccounted for.
    assert!(report.contains("unaccounted for: [x]"));
    assert!(!report.contains("sqrt occurred"));
}

#[test]
fn implicit_none_declares_nothing() {
    let report = analyze(&parsed(concat!(
        "      program hi\n",
        "      implicit none\n",
        "      integer x\n",
        "      x = 1\n",
        "      end\n",
    )));
    assert!(!report.contains("unaccounted for"));
    assert!(report.contains("x occurred at: [3]"));
}

#[test]
fn unused_declarations_never_occur() {
    let report = analyze(&parsed(concat!(
        "      program hi\n",
        "      integer unused\n",
        "      x = 1\n",
        "      end\n",
    )));
    assert!(report.contains("never occurred: [unused]"));
}

#[test]
fn full_report_layout() {
    let report = analyze(&parsed(concat!(
        "      program circle\n",
        "      real r, area\n",
        "c radius\n",
        "      r = 2.0\n",
        "      area = 3.14 * r * r\n",
        "      end\n",
    )));

    let head = indoc! {"
        line numbers refer to the line number within the program unit
        not counting blank lines

        found program units: [circle]

        program circle []
    "};
    assert!(report.starts_with(head), "report was: {report}");

    assert!(report.contains("r occurred at: [2, 3]"));
    assert!(report.contains("area occurred at: [3]"));

    // r spans lines 2..3 of 3, area sits at line 3 of 3.
    let r_row = format!("{:<10}|{}{}|", "r", " ".repeat(40), "=".repeat(21));
    let area_row = format!("{:<10}|{}{}|", "area", " ".repeat(60), "=");
    let rows: Vec<&str> = report.lines().rev().skip(1).take(2).collect();
    assert_eq!(rows, vec![&area_row[..], &r_row[..]]);
}

#[test]
fn comments_do_not_count_as_lines() {
    let report = analyze(&parsed(concat!(
        "      program hi\n",
        "c a comment between statements\n",
        "   10 continue\n",
        "      go to 10\n",
        "      end\n",
    )));
    // `continue` is logical line 1 despite the comment above it.
    assert!(report.contains("10 defined at: 1 occurred at: [2]"));
}
