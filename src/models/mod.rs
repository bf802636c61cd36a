//! Models module for the business writing checker
//!
//! Plain data passed in and out of a highlight cycle: rules, critiques,
//! raw spans and resolved segments.

pub mod critique;
pub mod rules;
pub mod serde_helpers;
pub mod spans;

// Re-export commonly used types
pub use critique::{AnalysisResult, Critique};
pub use rules::{PatternRule, Severity};
pub use spans::{RawSpan, Segment, SegmentCategory, SpanCategory};
