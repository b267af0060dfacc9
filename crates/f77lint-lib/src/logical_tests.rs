use crate::line::LineKind;
use crate::logical::assemble;
use crate::raw_lines;

fn lines(source: &str) -> Vec<crate::logical::LogicalLine> {
    let raw = raw_lines(source).expect("lines classify");
    assemble(&raw).expect("assembles")
}

#[test]
fn one_logical_line_per_statement() {
    let source = "      x = 1\n      y = 2\n";
    let logical = lines(source);
    assert_eq!(logical.len(), 2);
    assert_eq!(logical[0].statement, "assignment");
}

#[test]
fn continuations_fold_into_the_initial_line() {
    let source = "      x = 1 +\n     &    2\n";
    let logical = lines(source);
    assert_eq!(logical.len(), 1);
    assert_eq!(logical[0].children.len(), 2);
    assert_eq!(logical[0].code, "x = 1 +\n\n    2\n");
}

#[test]
fn comments_ride_along() {
    let source = "c before\n      x = 1 +\nc inside\n     & 2\n";
    let logical = lines(source);
    assert_eq!(logical.len(), 1);
    let kinds: Vec<LineKind> = logical[0].children.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Comment,
            LineKind::Initial,
            LineKind::Comment,
            LineKind::Continuation
        ]
    );
}

#[test]
fn tokens_concatenate_across_continuations() {
    let source = "      call f(a,\n     & b)\n";
    let logical = lines(source);
    assert_eq!(logical.len(), 1);
    let text: String = logical[0]
        .tokens
        .iter()
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(text, "call f(a,\n b)\n");
}

#[test]
fn statement_and_label_come_from_the_initial_line() {
    let logical = lines("   10 continue\n");
    assert_eq!(logical[0].statement, "continue");
    assert_eq!(logical[0].label, Some(10));
}

#[test]
fn stray_continuation_is_rejected() {
    let raw = raw_lines("     & 2\n").expect("classifies");
    let err = assemble(&raw).unwrap_err();
    assert!(err.nearby_context.is_some());
}

#[test]
fn comments_alone_cannot_assemble() {
    let raw = raw_lines("c only a comment\n").expect("classifies");
    assert!(assemble(&raw).is_err());
}

#[test]
fn mentioned_names_are_lowered() {
    let logical = lines("      call BIG(X)\n");
    assert_eq!(logical[0].mentioned_names(), vec!["big", "x"]);
}
