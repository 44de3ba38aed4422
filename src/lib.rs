//! # abnf-match
//!
//! Composable matchers for the structural rules of RFC 5234 (Augmented BNF),
//! evaluated over raw byte sequences.
//!
//! A [`Matcher`] is immutable configuration: leaf matchers recognize single
//! bytes, byte ranges, and literal byte sequences; composite matchers combine
//! children by concatenation, alternation, and bounded repetition. Evaluating
//! a matcher against an input yields an [`EndOffsetSet`]: every byte offset
//! at which a valid match of that rule could end. The [`parsing`] front-end
//! turns those offsets into (matched, remaining) span pairs under a selection
//! policy.
//!
//! Evaluation is ambiguity-preserving: `*ALPHA ALPHA` over `"aa"` reports
//! both the one- and two-byte readings, and a caller picks one with
//! [`ParsePolicy::Longest`] (or keeps them all). "No match" is an empty
//! offset set, not an error; the only errors are malformed configurations
//! rejected at construction time.
//!
//! ## Modules
//!
//! - [`matching`]: the engine (matcher variants, offset sets, evaluation)
//! - [`core_rules`]: ready-made RFC 5234 Appendix B.1 terminals
//! - [`parsing`]: selection policies and the `parse` entry point
//! - [`formats`]: JSON serialization of matcher trees

pub mod core_rules;
pub mod formats;
pub mod matching;
pub mod parsing;

pub use matching::{EndOffsetSet, Matcher, MatcherError};
pub use parsing::{parse, ParseOutcome, ParsePolicy};
