//! Token taxonomy and the fixed-form Fortran tokenizer.
//!
//! Tokens keep the exact source substring they were lexed from, so
//! concatenating `value`s reconstructs the input byte-for-byte. The
//! tokenizer is total: the trailing wildcard turns any unclassified
//! character (newlines included) into an `unknown` token.

use f77lint_core::{
    Parser, alphanumeric, digit, exact, exact_nocase, letter, none_of, one_of, spaces, wildcard,
};

/// Classification of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Name,
    Integer,
    Real,
    Logical,
    Character,
    Comment,
    Whitespace,
    Lparen,
    Rparen,
    Comma,
    Dot,
    Colon,
    Equals,
    Plus,
    Minus,
    Times,
    Slash,
    Exponent,
    Concat,
    Dollar,
    Apostrophe,
    Quote,
    Langle,
    Rangle,
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
    Not,
    And,
    Or,
    Eqv,
    Neqv,
    Unknown,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Name => "name",
            Tag::Integer => "integer",
            Tag::Real => "real",
            Tag::Logical => "logical",
            Tag::Character => "character",
            Tag::Comment => "comment",
            Tag::Whitespace => "whitespace",
            Tag::Lparen => "lparen",
            Tag::Rparen => "rparen",
            Tag::Comma => "comma",
            Tag::Dot => "dot",
            Tag::Colon => "colon",
            Tag::Equals => "equals",
            Tag::Plus => "plus",
            Tag::Minus => "minus",
            Tag::Times => "times",
            Tag::Slash => "slash",
            Tag::Exponent => "exponent",
            Tag::Concat => "concat",
            Tag::Dollar => "dollar",
            Tag::Apostrophe => "apostrophe",
            Tag::Quote => "quote",
            Tag::Langle => "langle",
            Tag::Rangle => "rangle",
            Tag::Lt => "lt",
            Tag::Le => "le",
            Tag::Eq => "eq",
            Tag::Ne => "ne",
            Tag::Gt => "gt",
            Tag::Ge => "ge",
            Tag::Not => "not",
            Tag::And => "and",
            Tag::Or => "or",
            Tag::Eqv => "eqv",
            Tag::Neqv => "neqv",
            Tag::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed token: tag plus the exact source substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub tag: Tag,
    pub value: String,
}

impl Token {
    pub fn new(tag: Tag, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    pub fn is_name(&self, lowered: &str) -> bool {
        self.tag == Tag::Name && self.value.eq_ignore_ascii_case(lowered)
    }
}

fn tag(parser: Parser<char, String>, tag: Tag) -> Parser<char, Token> {
    parser.map(move |value| Token::new(tag, value))
}

/// Valid Fortran identifier: a letter followed by letters and digits.
fn name() -> Parser<char, String> {
    letter().then(alphanumeric().many())
}

fn sign() -> Parser<char, String> {
    one_of("+-").optional()
}

/// Integer literal with optional sign.
fn integer() -> Parser<char, String> {
    sign().then(digit().many1())
}

/// Logical literal.
fn logical() -> Parser<char, String> {
    exact_nocase(".true.").or(exact_nocase(".false."))
}

/// One quoted segment. Adjacent segments concatenate through repetition,
/// which is also what makes the doubled-quote escape come out right.
fn char_segment() -> Parser<char, String> {
    let double = exact("\"").then(none_of("\"").many()).then(exact("\""));
    let single = exact("'").then(none_of("'").many()).then(exact("'"));
    double.or(single)
}

/// Character literal: one or more quoted segments.
fn character() -> Parser<char, String> {
    char_segment().many1()
}

/// Digits, a decimal point, optional fraction digits.
fn basic_real() -> Parser<char, String> {
    sign().then(digit().many1()).then(exact(".")).then(digit().many())
}

fn single_exponent() -> Parser<char, String> {
    one_of("eE").then(integer())
}

/// Single precision real.
fn single() -> Parser<char, String> {
    basic_real()
        .then(single_exponent().optional())
        .or(integer().then(single_exponent()))
}

fn double_exponent() -> Parser<char, String> {
    one_of("dD").then(integer())
}

/// Double precision real: mantissa with a mandatory `D` exponent.
fn double() -> Parser<char, String> {
    basic_real().or(integer()).then(double_exponent())
}

/// Real literal. `double` first, so `1d0` is not split after the mantissa.
fn real() -> Parser<char, String> {
    double().or(single())
}

/// Inline comment: `!` to end of line.
fn comment() -> Parser<char, String> {
    exact("!").then(none_of("\n").many())
}

/// One token. Ordering is normative: literals before the operators they
/// could be mistaken for, multi-character operators before their prefixes,
/// whitespace and the wildcard as the final fallbacks.
fn single_token() -> Parser<char, Token> {
    tag(character(), Tag::Character)
        .or(tag(comment(), Tag::Comment))
        .or(tag(logical(), Tag::Logical))
        .or(tag(exact_nocase(".lt."), Tag::Lt))
        .or(tag(exact_nocase(".le."), Tag::Le))
        .or(tag(exact_nocase(".eq."), Tag::Eq))
        .or(tag(exact_nocase(".ne."), Tag::Ne))
        .or(tag(exact_nocase(".gt."), Tag::Gt))
        .or(tag(exact_nocase(".ge."), Tag::Ge))
        .or(tag(exact_nocase(".not."), Tag::Not))
        .or(tag(exact_nocase(".and."), Tag::And))
        .or(tag(exact_nocase(".or."), Tag::Or))
        .or(tag(exact_nocase(".eqv."), Tag::Eqv))
        .or(tag(exact_nocase(".neqv."), Tag::Neqv))
        .or(tag(real(), Tag::Real))
        .or(tag(integer(), Tag::Integer))
        .or(tag(name(), Tag::Name))
        .or(tag(exact("="), Tag::Equals))
        .or(tag(exact("+"), Tag::Plus))
        .or(tag(exact("-"), Tag::Minus))
        .or(tag(exact("**"), Tag::Exponent))
        .or(tag(exact("*"), Tag::Times))
        .or(tag(exact("//"), Tag::Concat))
        .or(tag(exact("/"), Tag::Slash))
        .or(tag(exact("("), Tag::Lparen))
        .or(tag(exact(")"), Tag::Rparen))
        .or(tag(exact("."), Tag::Dot))
        .or(tag(exact(","), Tag::Comma))
        .or(tag(exact("$"), Tag::Dollar))
        .or(tag(exact("'"), Tag::Apostrophe))
        .or(tag(exact("\""), Tag::Quote))
        .or(tag(exact(":"), Tag::Colon))
        .or(tag(exact("<"), Tag::Langle))
        .or(tag(exact(">"), Tag::Rangle))
        .or(tag(spaces(), Tag::Whitespace))
        .or(tag(wildcard().map(String::from), Tag::Unknown))
}

/// The full tokenizer: zero or more tokens.
pub fn tokenizer() -> Parser<char, Vec<Token>> {
    single_token().singleton().many()
}

thread_local! {
    static TOKENIZER: Parser<char, Vec<Token>> = tokenizer();
}

/// Tokenize a whole character slice. Total by construction.
pub fn tokenize(input: &[char]) -> Vec<Token> {
    tokenize_from(input, 0)
}

/// Tokenize from `start` to the end of the slice.
pub fn tokenize_from(input: &[char], start: usize) -> Vec<Token> {
    TOKENIZER.with(|t| t.parse_from(input, start)).expect("tokenizer accepts any input")
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod lexer_tests;
