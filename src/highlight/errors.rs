//! Error types for pattern compilation and execution
//!
//! None of these escape a highlight cycle: the matcher turns them into
//! diagnostics and moves on to the next rule. Only the settings form
//! (`validate_pattern`) sees them directly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Neither engine accepts the pattern
    #[error("Invalid pattern '{pattern}': {reason}")]
    Invalid { pattern: String, reason: String },

    /// The backtracking engine gave up (catastrophic backtracking)
    #[error("Pattern '{pattern}' aborted while matching: {reason}")]
    Aborted { pattern: String, reason: String },
}

impl PatternError {
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::Invalid { pattern, .. } | PatternError::Aborted { pattern, .. } => pattern,
        }
    }
}
