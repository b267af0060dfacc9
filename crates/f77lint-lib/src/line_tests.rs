use crate::lexer::Tag;
use crate::line::{LineKind, RawLine};

fn line(text: &str) -> RawLine {
    RawLine::new(text).expect("line classifies")
}

#[test]
fn comment_markers_in_column_one() {
    for text in ["c hello\n", "C HELLO\n", "* box\n", "! new style\n"] {
        assert_eq!(line(text).kind, LineKind::Comment);
    }
}

#[test]
fn bang_comment_may_be_indented() {
    assert_eq!(line("   ! note\n").kind, LineKind::Comment);
}

#[test]
fn blank_lines_are_comments() {
    assert_eq!(line("\n").kind, LineKind::Comment);
    assert_eq!(line("   \n").kind, LineKind::Comment);
}

#[test]
fn code_lines_are_not_comments() {
    let l = line("      continue\n");
    assert_eq!(l.kind, LineKind::Initial);
    assert_eq!(l.statement, Some("continue"));
}

#[test]
fn comments_keep_only_the_original() {
    let l = line("c hello\n");
    assert_eq!(l.original, "c hello\n");
    assert!(l.code.is_empty());
    assert!(l.tokens.is_empty());
}

#[test]
fn initial_line_with_label() {
    let l = line("   10 continue\n");
    assert_eq!(l.kind, LineKind::Initial);
    assert_eq!(l.label, Some(10));
    assert_eq!(l.statement, Some("continue"));
    assert_eq!(l.code, "continue\n");
}

#[test]
fn label_field_with_junk_is_an_error() {
    assert!(RawLine::new(" * x\n").is_err());
    assert!(RawLine::new("end\n").is_err());
}

#[test]
fn short_line_with_label_only() {
    let l = line("   1\n");
    assert_eq!(l.kind, LineKind::Initial);
    assert_eq!(l.label, Some(1));
    assert!(l.code.is_empty());
    assert_eq!(l.statement, Some("assignment"));
}

#[test]
fn continuation_line() {
    let l = line("     &  + 2\n");
    assert_eq!(l.kind, LineKind::Continuation);
    assert_eq!(l.cont, Some('&'));
    assert_eq!(l.code, "  + 2\n");
    assert_eq!(l.tokens, l.tokens_after);
}

#[test]
fn any_mark_but_zero_continues() {
    assert_eq!(line("     1x = 2\n").kind, LineKind::Continuation);
    assert_eq!(line("     *x = 2\n").kind, LineKind::Continuation);
}

#[test]
fn zero_in_column_six_is_initial() {
    let l = line("     0x = 1\n");
    assert_eq!(l.kind, LineKind::Initial);
    assert_eq!(l.label, None);
    assert_eq!(l.code, "x = 1\n");
}

#[test]
#[should_panic(expected = "non-blank label field")]
fn continuation_with_label_field_aborts() {
    let _ = RawLine::new("    1&x\n");
}

#[test]
fn statement_detection_basics() {
    assert_eq!(line("      go to 10\n").statement, Some("go to"));
    assert_eq!(line("      write (*,*) x\n").statement, Some("write"));
    assert_eq!(line("      implicit none\n").statement, Some("implicit"));
    assert_eq!(line("      x = 1\n").statement, Some("assignment"));
}

#[test]
fn end_family_is_never_bare_end() {
    assert_eq!(line("      end if\n").statement, Some("end if"));
    assert_eq!(line("      end do\n").statement, Some("end do"));
    assert_eq!(line("      end program\n").statement, Some("end program"));
    assert_eq!(line("      end function\n").statement, Some("end function"));
    assert_eq!(line("      end subroutine\n").statement, Some("end subroutine"));
    assert_eq!(line("      end block data\n").statement, Some("end block data"));
    assert_eq!(line("      end\n").statement, Some("end"));
}

#[test]
fn squeezed_keywords_still_classify() {
    // Blanks are insignificant in fixed form.
    assert_eq!(line("      endif\n").statement, Some("end if"));
    assert_eq!(line("      goto 10\n").statement, Some("go to"));
    assert_eq!(line("      endfile 3\n").statement, Some("endfile"));
}

#[test]
fn keyword_prefix_quirk() {
    // Blank-insensitivity cuts both ways: a name starting with a keyword
    // classifies as that keyword. The block guards keep such lines flat.
    let l = line("      iflag = 3\n");
    assert_eq!(l.statement, Some("if"));
}

#[test]
fn tokens_after_start_past_the_keyword() {
    let l = line("      write (*,*) x\n");
    assert_eq!(l.tokens_after[0].tag, Tag::Lparen);

    let l = line("      go to 10\n");
    assert_eq!(l.tokens_after[0].tag, Tag::Integer);
    assert_eq!(l.tokens_after[0].value, "10");

    // No keyword: the full token stream is kept.
    let l = line("      x = 1\n");
    assert_eq!(l.tokens, l.tokens_after);
}

#[test]
fn case_is_ignored_in_detection() {
    assert_eq!(line("      END IF\n").statement, Some("end if"));
    assert_eq!(line("      Program hi\n").statement, Some("program"));
}
