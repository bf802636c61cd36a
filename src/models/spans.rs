//! Raw spans and resolved segments
//!
//! Raw spans are what the producers (pattern matcher, critique mapper) emit;
//! they may overlap in any way. Segments are the normalizer's output: a
//! partition of the document with one category each.

use serde::{Deserialize, Serialize};

use crate::text::TextRange;

/// Source category of a raw span
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpanCategory {
    PatternWarning,
    PatternInfo,
    ModelCritique,
}

/// A highlighted range produced by one rule match or one critique occurrence
///
/// Offsets are UTF-16 code units into the current document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RawSpan {
    pub start: usize,
    pub end: usize,
    pub category: SpanCategory,
    /// Rule name or critique suggestion
    pub label: String,
}

impl RawSpan {
    pub fn new(start: usize, end: usize, category: SpanCategory, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            category,
            label: label.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.start, self.end)
    }

    /// Zero-width spans never take part in segmentation
    pub fn is_degenerate(&self) -> bool {
        self.range().is_empty()
    }
}

/// Resolved display category of a segment
///
/// Variants are ordered by priority, lowest first.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SegmentCategory {
    Plain,
    Info,
    Warning,
    Critique,
    #[serde(rename = "critique+warning")]
    CritiqueWarning,
}

impl SegmentCategory {
    /// Resolve the category of a segment from the categories active over it
    pub fn resolve<I>(active: I) -> Self
    where
        I: IntoIterator<Item = SpanCategory>,
    {
        let mut critique = false;
        let mut warning = false;
        let mut info = false;
        for category in active {
            match category {
                SpanCategory::ModelCritique => critique = true,
                SpanCategory::PatternWarning => warning = true,
                SpanCategory::PatternInfo => info = true,
            }
        }

        match (critique, warning, info) {
            (true, true, _) => SegmentCategory::CritiqueWarning,
            (true, false, _) => SegmentCategory::Critique,
            (false, true, _) => SegmentCategory::Warning,
            (false, false, true) => SegmentCategory::Info,
            (false, false, false) => SegmentCategory::Plain,
        }
    }
}

/// One slice of the partitioned document
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "resolvedCategory")]
    pub category: SegmentCategory,
}

impl Segment {
    pub fn new(start: usize, end: usize, category: SegmentCategory) -> Self {
        Self { start, end, category }
    }
}
