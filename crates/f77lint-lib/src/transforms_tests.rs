use crate::transforms::{
    DEFAULT_INDENT_WIDTH, indent, new_comments, plain, print_details, reconstruct,
    remove_blanks, remove_comments,
};

fn parsed(source: &str) -> crate::OuterBlock {
    crate::parse(source).expect("parses")
}

fn raw(source: &str) -> Vec<crate::RawLine> {
    crate::raw_lines(source).expect("lines classify")
}

const MIXED: &str = concat!(
    "c leading comment\n",
    "      program hi\n",
    "      x = 1 +\n",
    "     &    2\n",
    "* another comment\n",
    "      end\n",
);

#[test]
fn plain_is_the_identity() {
    assert_eq!(plain(&parsed("      program hi\n      end\n")), "      program hi\n      end\n");
    assert_eq!(plain(&parsed(MIXED)), MIXED);
}

#[test]
fn remove_comments_drops_every_comment_line() {
    let output = remove_comments(&parsed(MIXED));
    assert_eq!(
        output,
        concat!(
            "      program hi\n",
            "      x = 1 +\n",
            "     &    2\n",
            "      end\n",
        )
    );
}

#[test]
fn remove_comments_is_idempotent() {
    let once = remove_comments(&parsed(MIXED));
    let twice = remove_comments(&parsed(&once));
    assert_eq!(once, twice);
}

#[test]
fn new_comments_rewrites_old_markers() {
    let output = new_comments(&raw("C hello\n* world\n      end\n"));
    assert_eq!(output, "! hello\n! world\n      end\n");
}

#[test]
fn new_comments_leaves_the_rest_alone() {
    let source = "  ! already new\n      x = 1\n      end\n";
    assert_eq!(new_comments(&raw(source)), source);
}

#[test]
fn new_comments_is_idempotent() {
    let once = new_comments(&raw("c one\nc two\n      end\n"));
    let twice = new_comments(&raw(&once));
    assert_eq!(once, twice);
}

#[test]
fn remove_blanks_collapses_runs() {
    let source = "      x = 1\n\n   \n\n      end\n";
    assert_eq!(remove_blanks(&raw(source)), "      x = 1\n\n      end\n");
}

#[test]
fn remove_blanks_keeps_single_blanks() {
    let source = "      x = 1\n\n      end\n";
    assert_eq!(remove_blanks(&raw(source)), source);
}

#[test]
fn indent_follows_block_depth() {
    let source = concat!(
        "      if (x .gt. 0) then\n",
        "      y = 1\n",
        "      end if\n",
        "      end\n",
    );
    let expected = concat!(
        "           if (x .gt. 0) then\n",
        "               y = 1\n",
        "           end if\n",
        "       end\n",
    );
    assert_eq!(indent(&parsed(source), DEFAULT_INDENT_WIDTH), expected);
}

#[test]
fn indent_gives_continuations_an_extra_step() {
    let source = "      x = 1 +\n     &    2\n      end\n";
    let expected = "           x = 1 +\n     &         2\n       end\n";
    assert_eq!(indent(&parsed(source), DEFAULT_INDENT_WIDTH), expected);
}

#[test]
fn indent_is_idempotent() {
    let once = indent(&parsed(MIXED), DEFAULT_INDENT_WIDTH);
    let twice = indent(&parsed(&once), DEFAULT_INDENT_WIDTH);
    assert_eq!(once, twice);
}

#[test]
fn reconstruct_round_trips_well_formed_source() {
    let source = concat!(
        "      program hi\n",
        "10    x = 1\n",
        "      y = x +\n",
        "     &    1\n",
        "      go to 10\n",
        "      end\n",
    );
    assert_eq!(reconstruct(&parsed(source)), source);
}

#[test]
fn reconstruct_left_aligns_labels() {
    let output = reconstruct(&parsed("   10 continue\n      end\n"));
    assert_eq!(output, "10    continue\n      end\n");
}

#[test]
fn reconstruct_passes_comments_through() {
    let source = "c keep me\n      end\n";
    assert_eq!(reconstruct(&parsed(source)), source);
}

#[test]
fn reconstruct_is_stable_on_its_own_output() {
    let source = "   10 continue\n      end\n";
    let once = reconstruct(&parsed(source));
    let twice = reconstruct(&parsed(&once));
    assert_eq!(once, twice);
}

#[test]
fn print_details_shows_nesting() {
    let source = concat!(
        "      if (x .gt. 0) then\n",
        "      y = 1\n",
        "      end if\n",
        "      end\n",
    );
    insta::assert_snapshot!(print_details(&parsed(source)), @r"
||| if: if (x .gt. 0) then
||| ||| assignment: y = 1
||| end if: end if
end: end
");
}

#[test]
fn print_details_includes_labels_and_continuations() {
    let source = concat!(
        "   10 x = 1 +\n",
        "     &    2\n",
        "      end\n",
    );
    insta::assert_snapshot!(print_details(&parsed(source)), @r"
||| assignment[10]: x = 1 +
||| ||| assignment continued: 2
end: end
");
}

#[test]
fn print_details_omits_comments() {
    let output = print_details(&parsed("c gone\n      end\n"));
    assert_eq!(output, "end: end\n");
}
