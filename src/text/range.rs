//! Half-open offset ranges
//!
//! Pure offsets with no knowledge of what produced them.

use serde::{Deserialize, Serialize};

/// A range of text from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if this range is empty (start >= end)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this range fully covers `other`
    ///
    /// Both ends are inclusive comparisons: a range covers itself.
    pub fn covers(&self, other: TextRange) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Clamp both ends into `[0, len]`
    pub fn clamp_to(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}
