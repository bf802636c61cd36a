//! Range normalizer - turns overlapping spans into a flat segment list
//!
//! Every span start and end becomes a cut point. Between two adjacent cut
//! points no span begins or ends, so each span either covers the whole
//! interval or none of it. The interval's category is resolved from the
//! spans covering it.
//!
//! Output covers `[0, len)` exactly once, in order. Adjacent segments with
//! the same category are kept separate; see `coalesce` for the merged form.

use std::collections::BTreeSet;

use crate::models::{RawSpan, Segment, SegmentCategory};
use crate::text::TextRange;

/// Sorted, deduplicated cut points for a document of `len` code units
///
/// Always contains 0 and `len`. Degenerate spans contribute nothing.
pub fn boundaries(len: usize, spans: &[RawSpan]) -> Vec<usize> {
    let mut points = BTreeSet::new();
    points.insert(0);
    points.insert(len);

    for span in spans.iter().filter(|s| !s.is_degenerate()) {
        let clamped = span.range().clamp_to(len);
        points.insert(clamped.start);
        points.insert(clamped.end);
    }

    points.into_iter().collect()
}

/// Partition `[0, len)` and resolve a category for each piece
///
/// The result depends only on the spans' ranges and categories, not on
/// their order or labels.
pub fn normalize(len: usize, spans: &[RawSpan]) -> Vec<Segment> {
    if len == 0 {
        return Vec::new();
    }

    let live: Vec<&RawSpan> = spans.iter().filter(|s| !s.is_degenerate()).collect();
    let points = boundaries(len, spans);

    points
        .windows(2)
        .filter(|pair| pair[0] < pair[1])
        .map(|pair| {
            let piece = TextRange::new(pair[0], pair[1]);
            let category = SegmentCategory::resolve(
                live.iter()
                    .filter(|span| span.range().covers(piece))
                    .map(|span| span.category),
            );
            Segment::new(piece.start, piece.end, category)
        })
        .collect()
}

/// Merge adjacent segments that resolved to the same category
///
/// Rendering convenience only; coverage is unchanged.
pub fn coalesce(segments: &[Segment]) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.category == segment.category && last.end == segment.start => {
                last.end = segment.end;
            }
            _ => merged.push(*segment),
        }
    }

    merged
}
