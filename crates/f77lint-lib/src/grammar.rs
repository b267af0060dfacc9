//! The statement catalog: keyword phrases by category, in classification
//! order, plus the intrinsic-function list used by the variable analysis.
//!
//! Classification is first-match over [`all`], so longer phrases must come
//! before their prefixes; the bare `end` is the very last entry.

use f77lint_core::{Parser, digit, exact_nocase, liberal};

/// A statement keyword phrase: its words, and the canonical space-joined,
/// lowercase text used as the statement name.
#[derive(Debug, PartialEq, Eq)]
pub struct Phrase {
    pub words: &'static [&'static str],
    pub text: &'static str,
}

macro_rules! phrase {
    ($text:literal, $($word:literal),+) => {
        Phrase { words: &[$($word),+], text: $text }
    };
}

pub const IF: &Phrase = &phrase!("if", "if");
pub const ELSE_IF: &Phrase = &phrase!("else if", "else", "if");
pub const ELSE: &Phrase = &phrase!("else", "else");
pub const END_IF: &Phrase = &phrase!("end if", "end", "if");
pub const DO: &Phrase = &phrase!("do", "do");
pub const END_DO: &Phrase = &phrase!("end do", "end", "do");

pub const CONTROL_BLOCK: &[&Phrase] = &[IF, ELSE_IF, ELSE, END_IF, DO, END_DO];

pub const CONTROL_NONBLOCK: &[&Phrase] = &[
    &phrase!("go to", "go", "to"),
    &phrase!("call", "call"),
    &phrase!("return", "return"),
    &phrase!("continue", "continue"),
    &phrase!("stop", "stop"),
    &phrase!("pause", "pause"),
];

pub const ASSIGN: &[&Phrase] = &[&phrase!("assign", "assign")];

pub const IO: &[&Phrase] = &[
    &phrase!("read", "read"),
    &phrase!("write", "write"),
    &phrase!("print", "print"),
    &phrase!("rewind", "rewind"),
    &phrase!("backspace", "backspace"),
    &phrase!("endfile", "endfile"),
    &phrase!("open", "open"),
    &phrase!("close", "close"),
    &phrase!("inquire", "inquire"),
];

/// Type statements plus the remaining specification statements.
pub const SPECIFICATION: &[&Phrase] = &[
    &phrase!("integer", "integer"),
    &phrase!("real", "real"),
    &phrase!("double precision", "double", "precision"),
    &phrase!("complex", "complex"),
    &phrase!("logical", "logical"),
    &phrase!("character", "character"),
    &phrase!("dimension", "dimension"),
    &phrase!("common", "common"),
    &phrase!("equivalence", "equivalence"),
    &phrase!("implicit", "implicit"),
    &phrase!("parameter", "parameter"),
    &phrase!("external", "external"),
    &phrase!("intrinsic", "intrinsic"),
    &phrase!("save", "save"),
];

pub const MISC_NONEXEC: &[&Phrase] = &[
    &phrase!("entry", "entry"),
    &phrase!("data", "data"),
    &phrase!("format", "format"),
];

pub const PROGRAM: &Phrase = &phrase!("program", "program");
pub const END_PROGRAM: &Phrase = &phrase!("end program", "end", "program");
pub const FUNCTION: &Phrase = &phrase!("function", "function");
pub const END_FUNCTION: &Phrase = &phrase!("end function", "end", "function");
pub const SUBROUTINE: &Phrase = &phrase!("subroutine", "subroutine");
pub const END_SUBROUTINE: &Phrase = &phrase!("end subroutine", "end", "subroutine");
pub const BLOCK_DATA: &Phrase = &phrase!("block data", "block", "data");
pub const END_BLOCK_DATA: &Phrase = &phrase!("end block data", "end", "block", "data");
pub const END: &Phrase = &phrase!("end", "end");

pub const TOP_LEVEL: &[&Phrase] = &[
    PROGRAM,
    END_PROGRAM,
    FUNCTION,
    END_FUNCTION,
    SUBROUTINE,
    END_SUBROUTINE,
    BLOCK_DATA,
    END_BLOCK_DATA,
    END,
];

/// The statement name given to lines matching no catalog phrase.
pub const ASSIGNMENT: &str = "assignment";

/// Every phrase in classification order: executable statements (control
/// first), then specification, misc non-executable, and the top-level
/// phrases with bare `end` last.
pub fn all() -> Vec<&'static Phrase> {
    CONTROL_BLOCK
        .iter()
        .chain(CONTROL_NONBLOCK)
        .chain(ASSIGN)
        .chain(IO)
        .chain(SPECIFICATION)
        .chain(MISC_NONEXEC)
        .chain(TOP_LEVEL)
        .copied()
        .collect()
}

/// The categories whose statements never open a block.
pub fn non_block() -> Vec<&'static Phrase> {
    IO.iter()
        .chain(ASSIGN)
        .chain(SPECIFICATION)
        .chain(MISC_NONEXEC)
        .chain(CONTROL_NONBLOCK)
        .copied()
        .collect()
}

/// Every keyword word appearing in the catalog, plus `then` and `none`.
pub fn keyword_words() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = all()
        .iter()
        .flat_map(|phrase| phrase.words.iter().copied())
        .collect();
    words.push("then");
    words.push("none");
    words.sort_unstable();
    words.dedup();
    words
}

/// Case-insensitive keyword with optional surrounding blanks.
pub fn keyword(word: &str) -> Parser<char, String> {
    liberal(exact_nocase(word))
}

/// Statement label: one to five digits.
pub fn label() -> Parser<char, String> {
    digit().between(1, 5)
}

/// The intrinsic-function names, carried verbatim from the reference list
/// (typos and the duplicated `dint` included).
pub const INTRINSICS: &[&str] = &[
    "abs", "acos", "aimag", "aint", "alog",
    "alog10", "amax10", "amax0", "amax1", "amin0",
    "amin1", "amod", "anint", "asin", "atan",
    "atan2", "cabs", "ccos", "char", "clog",
    "cmplx", "conjg", "cos", "cosh", "csin",
    "csqrt", "dabs", "dacos", "dasin", "datan",
    "datan2", "dble", "dcos", "dcosh", "ddim",
    "dexp", "dim", "dint", "dint", "dlog", "dlog10",
    "dmax1", "dmin1", "dmod", "dnint", "dprod",
    "dreal", "dsign", "dsin", "dsinh", "dsqrt",
    "dtan", "dtanh", "exp", "float", "iabs", "ichar",
    "idim", "idint", "idnint", "iflx", "index",
    "int", "isign", "len", "lge", "lgt", "lle",
    "llt", "log", "log10", "max", "max0", "max1",
    "min", "min0", "min1", "mod", "nint", "real",
    "sign", "sin", "sinh", "sngl", "sqrt", "tan", "tanh",
    "matmul", "cycle",
];

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod grammar_tests;
