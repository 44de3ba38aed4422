//! Parse front-end
//!
//! Converts a matcher's end-offset set for an input into concrete
//! (matched, remaining) span pairs under a selection policy. This is the
//! primary caller-facing entry point; the offsets themselves are available
//! from [`Matcher::evaluate`] when a caller wants the raw solution space.
//!
//! An empty result vector is the only "no match" signal here; there is no
//! separate error channel at this layer.

use crate::matching::Matcher;

/// How to choose among the candidate match ends of an ambiguous rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Keep only the maximum offset (greedy behavior).
    Longest,
    /// Keep only the minimum offset.
    Shortest,
    /// Keep every offset, in ascending order.
    All,
}

/// One reading of the input: the matched prefix and what follows it.
///
/// Both spans borrow from the input buffer; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOutcome<'a> {
    pub matched: &'a [u8],
    pub remaining: &'a [u8],
}

/// Evaluate `matcher` against `input` and split the buffer at the offsets
/// the policy selects.
pub fn parse<'a>(
    input: &'a [u8],
    matcher: &Matcher,
    policy: ParsePolicy,
) -> Vec<ParseOutcome<'a>> {
    let ends = matcher.evaluate(input);
    let selected: Vec<usize> = match policy {
        ParsePolicy::Longest => ends.max().into_iter().collect(),
        ParsePolicy::Shortest => ends.min().into_iter().collect(),
        ParsePolicy::All => ends.iter().collect(),
    };
    selected
        .into_iter()
        .map(|end| ParseOutcome {
            matched: &input[..end],
            remaining: &input[end..],
        })
        .collect()
}
