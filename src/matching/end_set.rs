//! End-offset sets
//!
//! An [`EndOffsetSet`] is the result of evaluating a matcher against an
//! input buffer: the set of byte offsets (from the start of the buffer) at
//! which a valid match of that matcher could end. Offsets are unique and
//! kept in ascending order, so iteration is deterministic and the set never
//! grows past `input.len() + 1` members regardless of how many grammar
//! paths reach the same offset.

/// A deduplicated set of candidate match-end offsets.
///
/// Stored as a sorted vector; insertion is a binary search. Matcher
/// evaluation inserts eagerly, which is what bounds intermediate results
/// during concatenation and repetition folds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndOffsetSet {
    offsets: Vec<usize>,
}

impl EndOffsetSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            offsets: Vec::new(),
        }
    }

    /// Create a set containing exactly one offset.
    pub fn single(offset: usize) -> Self {
        Self {
            offsets: vec![offset],
        }
    }

    /// Create a set from arbitrary offsets, sorting and deduplicating.
    pub fn from_offsets(mut offsets: Vec<usize>) -> Self {
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets }
    }

    /// Insert an offset. Returns `true` if the offset was not already present.
    pub fn insert(&mut self, offset: usize) -> bool {
        match self.offsets.binary_search(&offset) {
            Ok(_) => false,
            Err(pos) => {
                self.offsets.insert(pos, offset);
                true
            }
        }
    }

    /// Whether the given offset is a member.
    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Number of distinct offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the set is empty (the "no match" outcome).
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Smallest offset, if any.
    pub fn min(&self) -> Option<usize> {
        self.offsets.first().copied()
    }

    /// Largest offset, if any.
    pub fn max(&self) -> Option<usize> {
        self.offsets.last().copied()
    }

    /// Iterate offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.iter().copied()
    }

    /// The offsets as a sorted slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }
}

impl FromIterator<usize> for EndOffsetSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_offsets(iter.into_iter().collect())
    }
}

impl Extend<usize> for EndOffsetSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for offset in iter {
            self.insert(offset);
        }
    }
}
