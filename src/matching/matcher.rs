//! Matcher construction and evaluation dispatch
//!
//! A [`Matcher`] is a closed tagged union over the RFC 5234 combination
//! forms. The union itself is private: every tree is built through the
//! validating constructors here, so a malformed configuration (an inverted
//! byte range, a repetition whose maximum is below its minimum) is rejected
//! when the tree is built, never discovered as a silently wrong result.
//!
//! Composite constructors take their children by value. A composite
//! therefore exclusively owns its subtree; callers who want to reuse a rule
//! in several trees clone it explicitly, and evaluation of one tree can
//! never observe another.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::compose;
use super::end_set::EndOffsetSet;
use super::repetition;
use super::terminal;

/// Errors raised for malformed matcher configuration at construction time.
///
/// "No match" is never an error; it is an empty [`EndOffsetSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherError {
    /// A byte-range matcher with `lo > hi`.
    InvalidRange { lo: u8, hi: u8 },
    /// A repetition with a finite maximum below its minimum.
    InvalidRepetition { min: usize, max: usize },
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherError::InvalidRange { lo, hi } => {
                write!(f, "invalid byte range: lo 0x{lo:02X} > hi 0x{hi:02X}")
            }
            MatcherError::InvalidRepetition { min, max } => {
                write!(f, "invalid repetition bounds: max {max} < min {min}")
            }
        }
    }
}

impl std::error::Error for MatcherError {}

/// The matcher variants. Private so that invalid configurations cannot be
/// built by variant literal; see the constructors on [`Matcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum MatcherKind {
    Byte {
        target: u8,
    },
    ByteRange {
        lo: u8,
        hi: u8,
    },
    ByteSequence {
        target: Vec<u8>,
    },
    Concatenation {
        children: Vec<Matcher>,
    },
    Alternation {
        children: Vec<Matcher>,
    },
    Repetition {
        min: usize,
        max: Option<usize>,
        child: Box<Matcher>,
    },
}

/// A configured grammar rule that can evaluate an input prefix.
///
/// Matchers are immutable configuration: evaluation takes `&self`, retains
/// no state between calls, and is safe to run concurrently against
/// different inputs. `Clone` produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matcher {
    kind: MatcherKind,
}

impl Matcher {
    /// A matcher for exactly one byte of the given value.
    ///
    /// RFC 5234 §2.3: terminal values are specified by their numeric value,
    /// e.g. `%x61` for `a`.
    pub fn byte(target: u8) -> Self {
        Self {
            kind: MatcherKind::Byte { target },
        }
    }

    /// A matcher for one byte within `[lo, hi]` inclusive.
    ///
    /// RFC 5234 §3.4 (value range alternatives): `DIGIT = %x30-39` is
    /// equivalent to listing the ten digit bytes as alternatives.
    ///
    /// Returns [`MatcherError::InvalidRange`] if `lo > hi`.
    pub fn byte_range(lo: u8, hi: u8) -> Result<Self, MatcherError> {
        if lo > hi {
            return Err(MatcherError::InvalidRange { lo, hi });
        }
        Ok(Self {
            kind: MatcherKind::ByteRange { lo, hi },
        })
    }

    /// A matcher for an exact literal byte sequence.
    ///
    /// RFC 5234 §2.3: a concatenated string of terminal values, e.g.
    /// `CRLF = %d13.10`. An empty target is accepted but never matches,
    /// so it cannot act as a degenerate match-anything rule.
    pub fn byte_sequence(target: &[u8]) -> Self {
        Self {
            kind: MatcherKind::ByteSequence {
                target: target.to_vec(),
            },
        }
    }

    /// A matcher requiring every child to match contiguously, in order.
    ///
    /// RFC 5234 §3.1: `mumble = foo bar foo` matches the children's
    /// languages one after another. An empty child list matches the empty
    /// prefix (offset set `{0}`).
    pub fn concatenation(children: Vec<Matcher>) -> Self {
        Self {
            kind: MatcherKind::Concatenation { children },
        }
    }

    /// A matcher accepting whatever any one of its children accepts.
    ///
    /// RFC 5234 §3.2: elements separated by `/` are alternatives. All
    /// children contribute offsets; declaration order does not affect the
    /// result. An empty child list never matches.
    pub fn alternation(children: Vec<Matcher>) -> Self {
        Self {
            kind: MatcherKind::Alternation { children },
        }
    }

    /// A matcher repeating `child` between `min` and `max` times.
    ///
    /// RFC 5234 §3.6 (variable repetition): `<a>*<b>element` matches at
    /// least `<a>` and at most `<b>` occurrences. `max == None` means
    /// unbounded. Every attainable offset for every count in `[min, max]`
    /// is reported, not only the greediest chain.
    ///
    /// Returns [`MatcherError::InvalidRepetition`] if `max` is finite and
    /// below `min`.
    pub fn repetition(min: usize, max: Option<usize>, child: Matcher) -> Result<Self, MatcherError> {
        if let Some(max) = max {
            if max < min {
                return Err(MatcherError::InvalidRepetition { min, max });
            }
        }
        Ok(Self {
            kind: MatcherKind::Repetition {
                min,
                max,
                child: Box::new(child),
            },
        })
    }

    /// `*element`: any number of occurrences, including zero.
    pub fn zero_or_more(child: Matcher) -> Self {
        Self {
            kind: MatcherKind::Repetition {
                min: 0,
                max: None,
                child: Box::new(child),
            },
        }
    }

    /// `<n>*element`: at least `min` occurrences, unbounded above.
    pub fn at_least(min: usize, child: Matcher) -> Self {
        Self {
            kind: MatcherKind::Repetition {
                min,
                max: None,
                child: Box::new(child),
            },
        }
    }

    /// `*<n>element`: at most `max` occurrences, including zero.
    pub fn at_most(max: usize, child: Matcher) -> Self {
        Self {
            kind: MatcherKind::Repetition {
                min: 0,
                max: Some(max),
                child: Box::new(child),
            },
        }
    }

    /// RFC 5234 §3.7 (specific repetition): `<n>element` is `<n>*<n>element`.
    pub fn exact_count(count: usize, child: Matcher) -> Self {
        Self {
            kind: MatcherKind::Repetition {
                min: count,
                max: Some(count),
                child: Box::new(child),
            },
        }
    }

    /// RFC 5234 §3.8 (optional sequence): `[foo]` is `*1(foo)`.
    pub fn optional(child: Matcher) -> Self {
        Self {
            kind: MatcherKind::Repetition {
                min: 0,
                max: Some(1),
                child: Box::new(child),
            },
        }
    }

    /// Evaluate this matcher against an input buffer.
    ///
    /// Returns every byte offset at which a valid match of this rule could
    /// end. Offsets always lie in `[0, input.len()]`; an empty set means
    /// the rule does not match any prefix of the input.
    pub fn evaluate(&self, input: &[u8]) -> EndOffsetSet {
        match &self.kind {
            MatcherKind::Byte { target } => terminal::eval_byte(*target, input),
            MatcherKind::ByteRange { lo, hi } => terminal::eval_byte_range(*lo, *hi, input),
            MatcherKind::ByteSequence { target } => terminal::eval_byte_sequence(target, input),
            MatcherKind::Concatenation { children } => compose::eval_concatenation(children, input),
            MatcherKind::Alternation { children } => compose::eval_alternation(children, input),
            MatcherKind::Repetition { min, max, child } => {
                repetition::eval_repetition(*min, *max, child, input)
            }
        }
    }

    /// Re-check construction invariants over the whole tree.
    ///
    /// Needed by `formats::from_json`, where serde builds the tree without
    /// going through the constructors.
    pub(crate) fn validate(&self) -> Result<(), MatcherError> {
        match &self.kind {
            MatcherKind::Byte { .. } | MatcherKind::ByteSequence { .. } => Ok(()),
            MatcherKind::ByteRange { lo, hi } => {
                if lo > hi {
                    Err(MatcherError::InvalidRange { lo: *lo, hi: *hi })
                } else {
                    Ok(())
                }
            }
            MatcherKind::Concatenation { children } | MatcherKind::Alternation { children } => {
                for child in children {
                    child.validate()?;
                }
                Ok(())
            }
            MatcherKind::Repetition { min, max, child } => {
                if let Some(max) = max {
                    if max < min {
                        return Err(MatcherError::InvalidRepetition {
                            min: *min,
                            max: *max,
                        });
                    }
                }
                child.validate()
            }
        }
    }
}
