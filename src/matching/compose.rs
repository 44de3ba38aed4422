//! Concatenation and alternation folds
//!
//! Concatenation (RFC 5234 §3.1) threads an offset set through its
//! children: starting from `{0}`, each child is evaluated from every
//! offset the previous children could reach, and the reachable ends are
//! collected and deduplicated. Trying every prior offset is what resolves
//! ambiguity without backtracking: for `*ALPHA ALPHA` over `"aa"`, both
//! the zero- and one-byte readings of `*ALPHA` get retried against the
//! trailing `ALPHA`.
//!
//! Alternation (RFC 5234 §3.2) is the deduplicated union of its children's
//! results; declaration order never affects the outcome.

use super::end_set::EndOffsetSet;
use super::matcher::Matcher;

pub(crate) fn eval_concatenation(children: &[Matcher], input: &[u8]) -> EndOffsetSet {
    let mut reached = EndOffsetSet::single(0);
    for child in children {
        let mut next = EndOffsetSet::new();
        for start in reached.iter() {
            for end in child.evaluate(&input[start..]).iter() {
                next.insert(start + end);
            }
        }
        // A child no branch can satisfy fails the whole sequence; later
        // children are not evaluated.
        if next.is_empty() {
            return next;
        }
        reached = next;
    }
    reached
}

pub(crate) fn eval_alternation(children: &[Matcher], input: &[u8]) -> EndOffsetSet {
    let mut result = EndOffsetSet::new();
    for child in children {
        result.extend(child.evaluate(input).iter());
    }
    result
}
