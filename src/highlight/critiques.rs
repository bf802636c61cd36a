//! Critique mapper - places model critiques on the document
//!
//! The model quotes the phrase it is criticising. The quote is searched for
//! literally; every non-overlapping occurrence becomes a span. Quotes that do
//! not occur (the model paraphrased or hallucinated) are dropped silently.

use crate::diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
use crate::models::{Critique, RawSpan, SpanCategory};
use crate::settings::HighlightOptions;
use crate::text::{utf16_len, Utf16Offsets};

/// Whether a quote covers so much of the document that highlighting it is noise
pub fn exceeds_coverage(phrase_len: usize, document_len: usize, max_ratio: f64) -> bool {
    document_len > 0 && phrase_len as f64 / document_len as f64 > max_ratio
}

/// Spans for every occurrence of one critique's quote
///
/// Returns an empty list for an empty quote or a quote that does not occur.
/// The coverage limit is not applied here.
pub fn map_critique(text: &str, offsets: &Utf16Offsets, critique: &Critique) -> Vec<RawSpan> {
    let phrase = critique.original_text.as_str();
    if phrase.is_empty() {
        return Vec::new();
    }

    // match_indices resumes after each occurrence, so quotes never overlap themselves
    text.match_indices(phrase)
        .map(|(byte_start, found)| {
            RawSpan::new(
                offsets.to_utf16(byte_start),
                offsets.to_utf16(byte_start + found.len()),
                SpanCategory::ModelCritique,
                critique.suggestion.as_str(),
            )
        })
        .collect()
}

/// Spans for all critiques, in critique order
pub fn map_critiques(
    text: &str,
    offsets: &Utf16Offsets,
    critiques: &[Critique],
    options: &HighlightOptions,
    diagnostics: &mut Diagnostics,
) -> Vec<RawSpan> {
    let document_len = offsets.len_utf16();
    let mut spans = Vec::new();

    for critique in critiques {
        let phrase = critique.original_text.as_str();
        if phrase.is_empty() {
            continue;
        }

        if exceeds_coverage(utf16_len(phrase), document_len, options.max_critique_ratio) {
            log::debug!(
                "Skipping critique quoting {} of {} code units",
                utf16_len(phrase),
                document_len
            );
            diagnostics.add(Diagnostic::new(
                DiagnosticSeverity::Info,
                "critique_too_long",
                format!(
                    "Critique quote covers more than {:.0}% of the document and was not highlighted",
                    options.max_critique_ratio * 100.0
                ),
            ));
            continue;
        }

        spans.extend(map_critique(text, offsets, critique));
    }

    spans
}
