//! Variable repetition (RFC 5234 §3.6)
//!
//! Repetition is evaluated breadth first over repetition depth: the
//! frontier at depth `n` is the deduplicated set of offsets reachable with
//! exactly `n` occurrences of the child. Every frontier member at a depth
//! in `[min, max]` joins the result, so the full solution space is kept:
//! `*a` over `"aa"` yields `{0, 1, 2}`, not just the greedy `{2}`. The
//! `Longest` parse policy recovers greedy behavior when a caller wants it.
//!
//! Termination with an unbounded maximum: a chain of more than
//! `input.len()` occurrences must contain zero-length child matches, and a
//! chain with a zero-length step can be pumped to any higher count by
//! repeating that step. So every offset attainable at some depth `>= min`
//! is already attainable at a depth no greater than `max(min, input.len())`,
//! and iterating that many levels enumerates the complete result.

use super::end_set::EndOffsetSet;
use super::matcher::Matcher;

pub(crate) fn eval_repetition(
    min: usize,
    max: Option<usize>,
    child: &Matcher,
    input: &[u8],
) -> EndOffsetSet {
    let mut result = EndOffsetSet::new();
    if min == 0 {
        result.insert(0);
    }

    let limit = max.unwrap_or_else(|| min.max(input.len()));
    let mut frontier = EndOffsetSet::single(0);
    for depth in 1..=limit {
        let mut next = EndOffsetSet::new();
        for start in frontier.iter() {
            for end in child.evaluate(&input[start..]).iter() {
                next.insert(start + end);
            }
        }
        if next.is_empty() {
            break;
        }
        if depth >= min {
            result.extend(next.iter());
        }
        // Fixed point: once the frontier stops changing and the minimum is
        // met, every later level repeats offsets already in the result.
        if depth >= min && next == frontier {
            break;
        }
        frontier = next;
    }
    result
}
