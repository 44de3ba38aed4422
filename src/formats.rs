//! JSON serialization of matcher trees
//!
//! A matcher is pure configuration, so the whole tree serializes cleanly.
//! This is the crate's diagnostic and interchange surface: dump a grammar
//! for inspection, or load one from a document.
//!
//! Loading re-validates the tree. Construction-time invariants (range
//! bounds, repetition bounds) would otherwise be trivial to bypass with a
//! hand-edited document.

use std::fmt;

use crate::matching::{Matcher, MatcherError};

/// Errors from serializing or deserializing matcher trees.
#[derive(Debug)]
pub enum FormatError {
    /// Malformed JSON or a shape that is not a matcher tree.
    Serialization(String),
    /// Well-formed JSON describing an invalid matcher configuration.
    InvalidTree(MatcherError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            FormatError::InvalidTree(err) => write!(f, "invalid matcher tree: {err}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Serialize a matcher tree to compact JSON.
pub fn to_json(matcher: &Matcher) -> Result<String, FormatError> {
    serde_json::to_string(matcher).map_err(|e| FormatError::Serialization(e.to_string()))
}

/// Serialize a matcher tree to human-readable JSON.
pub fn to_json_pretty(matcher: &Matcher) -> Result<String, FormatError> {
    serde_json::to_string_pretty(matcher).map_err(|e| FormatError::Serialization(e.to_string()))
}

/// Deserialize a matcher tree from JSON, re-checking construction
/// invariants over the whole tree.
pub fn from_json(json: &str) -> Result<Matcher, FormatError> {
    let matcher: Matcher =
        serde_json::from_str(json).map_err(|e| FormatError::Serialization(e.to_string()))?;
    matcher.validate().map_err(FormatError::InvalidTree)?;
    Ok(matcher)
}
