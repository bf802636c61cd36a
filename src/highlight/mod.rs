//! Highlight engine
//!
//! One highlight cycle takes the current document, the rule set and the
//! latest model critiques, and returns the segment list the editor backdrop
//! paints. Cycles are pure: nothing is cached between calls, so the caller
//! simply runs a new cycle whenever any of the three inputs changes.
//!
//! ## Pipeline
//!
//! ```text
//! document + rules      -> matcher    -> pattern spans  \
//!                                                         -> normalizer -> segments
//! document + critiques  -> critiques  -> critique spans /
//! ```

pub mod critiques;
pub mod dialect;
pub mod errors;
pub mod matcher;
pub mod normalizer;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::models::{Critique, PatternRule, RawSpan, Segment, SpanCategory};
use crate::settings::HighlightOptions;
use crate::text::Utf16Offsets;

pub use errors::PatternError;
pub use matcher::{validate_pattern, CompiledPattern};
pub use normalizer::{boundaries, coalesce, normalize};

/// Span counts for the sidebar badges
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpanCounts {
    pub warning: usize,
    pub info: usize,
    pub critique: usize,
}

impl SpanCounts {
    pub fn from_spans<'a>(spans: impl IntoIterator<Item = &'a RawSpan>) -> Self {
        let mut counts = SpanCounts::default();
        for span in spans {
            match span.category {
                SpanCategory::PatternWarning => counts.warning += 1,
                SpanCategory::PatternInfo => counts.info += 1,
                SpanCategory::ModelCritique => counts.critique += 1,
            }
        }
        counts
    }

    /// Pattern-rule findings (warnings and infos together)
    pub fn pattern_total(&self) -> usize {
        self.warning + self.info
    }

    pub fn total(&self) -> usize {
        self.warning + self.info + self.critique
    }
}

/// Everything one highlight cycle produces
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HighlightReport {
    /// Partition of the document, for painting
    pub segments: Vec<Segment>,
    /// Rule matches in rule order, then match order
    pub pattern_spans: Vec<RawSpan>,
    /// Critique occurrences in critique order, then occurrence order
    pub critique_spans: Vec<RawSpan>,
    pub counts: SpanCounts,
    pub diagnostics: Diagnostics,
}

impl HighlightReport {
    pub fn is_clean(&self) -> bool {
        self.counts.total() == 0
    }
}

/// Run a full highlight cycle
pub fn compute_highlights(
    text: &str,
    rules: &[PatternRule],
    critiques: &[Critique],
    options: &HighlightOptions,
) -> HighlightReport {
    if text.is_empty() {
        return HighlightReport::default();
    }

    let offsets = Utf16Offsets::new(text);
    let mut diagnostics = Diagnostics::new();

    let pattern_spans = matcher::match_rules(text, &offsets, rules, &mut diagnostics);
    let critique_spans =
        critiques::map_critiques(text, &offsets, critiques, options, &mut diagnostics);

    let all_spans: Vec<RawSpan> = pattern_spans
        .iter()
        .chain(critique_spans.iter())
        .cloned()
        .collect();
    let segments = normalizer::normalize(offsets.len_utf16(), &all_spans);
    let counts = SpanCounts::from_spans(&all_spans);

    log::debug!(
        "Highlight cycle: {} code units, {} spans ({} warning, {} info, {} critique), {} segments",
        offsets.len_utf16(),
        all_spans.len(),
        counts.warning,
        counts.info,
        counts.critique,
        segments.len()
    );

    HighlightReport {
        segments,
        pattern_spans,
        critique_spans,
        counts,
        diagnostics,
    }
}

/// Segments for a document, with default options
pub fn compute_segments(text: &str, rules: &[PatternRule], critiques: &[Critique]) -> Vec<Segment> {
    compute_highlights(text, rules, critiques, &HighlightOptions::default()).segments
}
