//! Leaf matcher evaluation
//!
//! The terminal forms of RFC 5234 §2.3: a single byte value, a value range
//! (§3.4), and a literal byte string. Each is a pure function of its
//! configuration and the input; the result is `{1}` (or `{len}` for a
//! sequence) on a match and the empty set otherwise.

use super::end_set::EndOffsetSet;

pub(crate) fn eval_byte(target: u8, input: &[u8]) -> EndOffsetSet {
    match input.first() {
        Some(&b) if b == target => EndOffsetSet::single(1),
        _ => EndOffsetSet::new(),
    }
}

pub(crate) fn eval_byte_range(lo: u8, hi: u8, input: &[u8]) -> EndOffsetSet {
    match input.first() {
        Some(&b) if lo <= b && b <= hi => EndOffsetSet::single(1),
        _ => EndOffsetSet::new(),
    }
}

/// An empty target never matches, so an empty sequence cannot act as a
/// universal zero-length rule.
pub(crate) fn eval_byte_sequence(target: &[u8], input: &[u8]) -> EndOffsetSet {
    if !target.is_empty() && input.starts_with(target) {
        EndOffsetSet::single(target.len())
    } else {
        EndOffsetSet::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::matching::Matcher;

    #[test]
    fn test_byte_matches_first_byte_only() {
        let matcher = Matcher::byte(b'a');
        assert_eq!(matcher.evaluate(b"a").as_slice(), &[1]);
        assert_eq!(matcher.evaluate(b"abc").as_slice(), &[1]);
        assert!(matcher.evaluate(b"b").is_empty());
        assert!(matcher.evaluate(b"").is_empty());
    }

    #[test]
    fn test_byte_range_bounds_are_inclusive() {
        let matcher = Matcher::byte_range(b'a', b'x').unwrap();
        assert_eq!(matcher.evaluate(b"a").as_slice(), &[1]);
        assert_eq!(matcher.evaluate(b"x").as_slice(), &[1]);
        assert!(matcher.evaluate(b"{").is_empty());
        assert!(matcher.evaluate(b"").is_empty());
    }

    #[test]
    fn test_byte_sequence_matches_prefix_exactly() {
        let matcher = Matcher::byte_sequence(b"abc");
        assert_eq!(matcher.evaluate(b"abc").as_slice(), &[3]);
        assert_eq!(matcher.evaluate(b"abcdef").as_slice(), &[3]);
        assert!(matcher.evaluate(b"abd").is_empty());
        assert!(matcher.evaluate(b"ab").is_empty());
    }

    #[test]
    fn test_empty_byte_sequence_never_matches() {
        let matcher = Matcher::byte_sequence(b"");
        assert!(matcher.evaluate(b"").is_empty());
        assert!(matcher.evaluate(b"anything").is_empty());
    }
}
