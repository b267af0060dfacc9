//! Core parser type and stream-agnostic combinators.
//!
//! A parser is a pure function of `(stream, position)` returning either a
//! [`Success`] (value plus the index one past the last consumed atom) or a
//! [`Failure`] (what was expected, and where). Ordered choice backtracks
//! fully: alternatives are always retried from the original position, and
//! when every alternative fails the farthest-advancing failure is reported.

use std::rc::Rc;

/// A successful parse: the produced value and the end position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<O> {
    pub value: O,
    pub end: usize,
}

/// A failed parse: the expected construct and the position it was expected at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} at position {position}")]
pub struct Failure {
    pub expected: String,
    pub position: usize,
}

pub type ParseResult<O> = Result<Success<O>, Failure>;

/// Values that sequencing and repetition glue together.
///
/// Character-level parsers produce `String`; stream-level parsers produce
/// `Vec<_>`. Both concatenate, and `optional` yields the empty carrier when
/// the inner parser fails.
pub trait Sequence {
    fn empty() -> Self;
    fn append(self, other: Self) -> Self;
}

impl Sequence for String {
    fn empty() -> Self {
        String::new()
    }

    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Sequence for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn append(mut self, mut other: Self) -> Self {
        Vec::append(&mut self, &mut other);
        self
    }
}

/// A first-class parser over streams of `I` atoms producing `O` values.
pub struct Parser<I, O> {
    f: Rc<dyn Fn(&[I], usize) -> ParseResult<O>>,
}

impl<I, O> Clone for Parser<I, O> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<I: 'static, O: 'static> Parser<I, O> {
    pub fn new(f: impl Fn(&[I], usize) -> ParseResult<O> + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Run the parser at `pos` without any completeness requirement.
    pub fn run(&self, input: &[I], pos: usize) -> ParseResult<O> {
        (self.f)(input, pos)
    }

    /// Run the parser and require it to consume the entire stream.
    pub fn parse(&self, input: &[I]) -> Result<O, Failure> {
        self.parse_from(input, 0)
    }

    /// Like [`Parser::parse`], starting at `start`.
    pub fn parse_from(&self, input: &[I], start: usize) -> Result<O, Failure> {
        let success = self.run(input, start)?;
        if success.end != input.len() {
            return Err(Failure {
                expected: "end of input".to_string(),
                position: success.end,
            });
        }
        Ok(success.value)
    }

    /// Transform the success value; consumption is unchanged.
    pub fn map<P: 'static>(self, f: impl Fn(O) -> P + 'static) -> Parser<I, P> {
        Parser::new(move |input, pos| {
            self.run(input, pos).map(|s| Success {
                value: f(s.value),
                end: s.end,
            })
        })
    }

    /// Ordered choice. `other` is tried from the same starting position,
    /// regardless of how far `self` advanced before failing.
    pub fn or(self, other: Parser<I, O>) -> Parser<I, O> {
        Parser::new(move |input, pos| match self.run(input, pos) {
            Ok(success) => Ok(success),
            Err(first) => match other.run(input, pos) {
                Ok(success) => Ok(success),
                Err(second) => Err(if second.position > first.position {
                    second
                } else {
                    first
                }),
            },
        })
    }

    /// Succeed only if `pred` accepts the value; the failure is positioned
    /// at the start of the attempted match.
    pub fn guard(self, pred: impl Fn(&O) -> bool + 'static, expected: &str) -> Parser<I, O> {
        let expected = expected.to_string();
        Parser::new(move |input, pos| {
            let success = self.run(input, pos)?;
            if pred(&success.value) {
                Ok(success)
            } else {
                Err(Failure {
                    expected: expected.clone(),
                    position: pos,
                })
            }
        })
    }

    /// Run both parsers in order; keep only the second value.
    pub fn skip_then<P: 'static>(self, other: Parser<I, P>) -> Parser<I, P> {
        Parser::new(move |input, pos| {
            let first = self.run(input, pos)?;
            other.run(input, first.end)
        })
    }

    /// Run both parsers in order; keep only the first value.
    pub fn then_skip<P: 'static>(self, other: Parser<I, P>) -> Parser<I, O> {
        Parser::new(move |input, pos| {
            let first = self.run(input, pos)?;
            let second = other.run(input, first.end)?;
            Ok(Success {
                value: first.value,
                end: second.end,
            })
        })
    }

    /// Wrap the value in a one-element `Vec`, so it can feed `then`/`many`.
    pub fn singleton(self) -> Parser<I, Vec<O>> {
        self.map(|value| vec![value])
    }
}

impl<I: 'static, O: Sequence + 'static> Parser<I, O> {
    /// Sequence: run `self` then `other` from where `self` ended, and
    /// append the values.
    pub fn then(self, other: Parser<I, O>) -> Parser<I, O> {
        Parser::new(move |input, pos| {
            let first = self.run(input, pos)?;
            let second = other.run(input, first.end)?;
            Ok(Success {
                value: first.value.append(second.value),
                end: second.end,
            })
        })
    }

    /// Zero or more repetitions. Always succeeds. A repetition that stops
    /// advancing ends the loop rather than spinning.
    pub fn many(self) -> Parser<I, O> {
        Parser::new(move |input, pos| {
            let mut value = O::empty();
            let mut at = pos;
            while let Ok(success) = self.run(input, at) {
                if success.end == at {
                    break;
                }
                value = value.append(success.value);
                at = success.end;
            }
            Ok(Success { value, end: at })
        })
    }

    /// One or more repetitions.
    pub fn many1(self) -> Parser<I, O> {
        self.clone().then(self.many())
    }

    /// Between `min` and `max` repetitions (inclusive).
    pub fn between(self, min: usize, max: usize) -> Parser<I, O> {
        Parser::new(move |input, pos| {
            let mut value = O::empty();
            let mut at = pos;
            let mut count = 0;
            while count < max {
                match self.run(input, at) {
                    Ok(success) => {
                        let advanced = success.end > at;
                        value = value.append(success.value);
                        at = success.end;
                        count += 1;
                        if !advanced {
                            break;
                        }
                    }
                    Err(failure) => {
                        if count < min {
                            return Err(failure);
                        }
                        break;
                    }
                }
            }
            if count < min {
                return Err(Failure {
                    expected: format!("at least {min} repetitions"),
                    position: pos,
                });
            }
            Ok(Success { value, end: at })
        })
    }

    /// Zero or one. An absent value is the empty carrier.
    pub fn optional(self) -> Parser<I, O> {
        Parser::new(move |input, pos| match self.run(input, pos) {
            Ok(success) => Ok(success),
            Err(_) => Ok(Success {
                value: O::empty(),
                end: pos,
            }),
        })
    }
}

/// Always succeeds with `value`, consuming nothing.
pub fn succeed<I: 'static, O: Clone + 'static>(value: O) -> Parser<I, O> {
    Parser::new(move |_, pos| {
        Ok(Success {
            value: value.clone(),
            end: pos,
        })
    })
}

/// Always fails with `expected` at the current position.
pub fn fail<I: 'static, O: 'static>(expected: &str) -> Parser<I, O> {
    let expected = expected.to_string();
    Parser::new(move |_, pos| {
        Err(Failure {
            expected: expected.clone(),
            position: pos,
        })
    })
}

/// Consume one atom accepted by `pred`.
pub fn satisfies<I: Clone + 'static>(
    pred: impl Fn(&I) -> bool + 'static,
    expected: &str,
) -> Parser<I, I> {
    let expected = expected.to_string();
    Parser::new(move |input, pos| match input.get(pos) {
        Some(atom) if pred(atom) => Ok(Success {
            value: atom.clone(),
            end: pos + 1,
        }),
        _ => Err(Failure {
            expected: expected.clone(),
            position: pos,
        }),
    })
}

/// Consume one arbitrary atom.
pub fn wildcard<I: Clone + 'static>() -> Parser<I, I> {
    satisfies(|_| true, "anything")
}

/// Succeed (with the empty carrier) only at the end of the stream.
pub fn eof<I: 'static, O: Sequence + 'static>() -> Parser<I, O> {
    Parser::new(|input: &[I], pos| {
        if pos >= input.len() {
            Ok(Success {
                value: O::empty(),
                end: pos,
            })
        } else {
            Err(Failure {
                expected: "end of input".to_string(),
                position: pos,
            })
        }
    })
}

/// Defer construction to first use. This is the forward declaration that
/// lets mutually recursive grammars reference each other.
pub fn defer<I: 'static, O: 'static>(build: impl Fn() -> Parser<I, O> + 'static) -> Parser<I, O> {
    Parser::new(move |input, pos| build().run(input, pos))
}

/// Boolean form of [`Parser::run`]: does `parser` match at `start`?
pub fn matches<I: 'static, O: 'static>(parser: &Parser<I, O>, input: &[I], start: usize) -> bool {
    parser.run(input, start).is_ok()
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod parse_tests;
