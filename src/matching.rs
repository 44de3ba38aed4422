//! The matching engine
//!
//! This module provides the complete evaluation pipeline from matcher
//! configuration to end-offset sets:
//! 1. **Construction**: validating constructors build an immutable tree
//! 2. **Evaluation**: a pure fold over candidate offset sets
//!
//! ## Design
//!
//! Matchers carry no per-call state. Ambiguous grammars (a repetition
//! followed by a rule that could also consume the repeated bytes) need no
//! backtracking machinery: every composite evaluates each child against
//! every offset the previous step could reach, so the full solution space
//! is enumerated up front and deduplicated eagerly. The size of any offset
//! set is therefore bounded by the input length plus one, never by the
//! number of combinatorial paths through the grammar.

pub mod end_set;
pub mod matcher;

mod compose;
mod repetition;
mod terminal;

pub use end_set::EndOffsetSet;
pub use matcher::{Matcher, MatcherError};
