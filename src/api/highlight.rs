//! Highlight API
//!
//! Called by the editor whenever the text, the rule list or the analysis
//! result changes. Every call is a full, independent highlight cycle.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_optional, elapsed_ms, now_ms, serialize};
use crate::diagnostics::Diagnostics;
use crate::highlight::{self, normalizer};
use crate::models::{AnalysisResult, Critique, PatternRule, Segment};
use crate::settings::{parse_rules, HighlightOptions};
use crate::text::utf16_len;
use crate::{wasm_log, wasm_warn};

/// Read the rules array entry by entry
///
/// Only a value that is not an array is an error; entries that are not rules
/// are skipped and reported in `diagnostics`.
fn deserialize_rules(
    rules_js: JsValue,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<PatternRule>, JsValue> {
    let values: Vec<Value> = deserialize(rules_js, "Failed to deserialize rules")?;
    Ok(parse_rules(values, diagnostics))
}

/// Compute the segment list for the editor backdrop
///
/// # Parameters
/// - `text`: current editor contents
/// - `rules_js`: array of `PatternRule`; malformed entries are skipped
/// - `critiques_js`: array of `Critique` (may be empty)
///
/// # Returns
/// Array of `{ start, end, resolvedCategory }` covering the text, offsets in
/// UTF-16 code units
#[wasm_bindgen(js_name = computeSegments)]
pub fn compute_segments(
    text: &str,
    rules_js: JsValue,
    critiques_js: JsValue,
) -> Result<JsValue, JsValue> {
    let mut skipped = Diagnostics::new();
    let rules = deserialize_rules(rules_js, &mut skipped)?;
    let critiques: Vec<Critique> =
        deserialize_optional(critiques_js, "Failed to deserialize critiques")?.unwrap_or_default();
    for diagnostic in &skipped.diagnostics {
        wasm_warn!("{}: {}", diagnostic.kind, diagnostic.message);
    }

    let segments = highlight::compute_segments(text, &rules, &critiques);
    serialize(&segments, "Failed to serialize segments")
}

/// Run a highlight cycle and return the full report
///
/// # Parameters
/// - `text`: current editor contents
/// - `rules_js`: array of `PatternRule`; malformed entries are skipped and
///   reported as `malformed_rule` diagnostics
/// - `analysis_js`: `{ critiques, improved_text, summary }` or `null`
/// - `options_js`: `{ maxCritiqueRatio }` or `undefined` for defaults
///
/// # Returns
/// `HighlightReport` with segments, raw spans, badge counts and diagnostics
#[wasm_bindgen(js_name = computeHighlights)]
pub fn compute_highlights(
    text: &str,
    rules_js: JsValue,
    analysis_js: JsValue,
    options_js: JsValue,
) -> Result<JsValue, JsValue> {
    let started = now_ms();

    let mut skipped = Diagnostics::new();
    let rules = deserialize_rules(rules_js, &mut skipped)?;
    let analysis: Option<AnalysisResult> =
        deserialize_optional(analysis_js, "Failed to deserialize analysis result")?;
    let options: HighlightOptions =
        deserialize_optional(options_js, "Failed to deserialize highlight options")?
            .unwrap_or_default();

    let critiques = analysis.map(|a| a.critiques).unwrap_or_default();
    let mut report = highlight::compute_highlights(text, &rules, &critiques, &options);
    report.diagnostics.extend(skipped.diagnostics);

    for diagnostic in &report.diagnostics.diagnostics {
        wasm_warn!("{}: {}", diagnostic.kind, diagnostic.message);
    }
    if let Some(ms) = elapsed_ms(started) {
        wasm_log!(
            "computeHighlights: {} segments, {} pattern and {} critique spans in {:.2}ms",
            report.segments.len(),
            report.counts.pattern_total(),
            report.counts.critique,
            ms
        );
    }

    serialize(&report, "Failed to serialize highlight report")
}

/// Merge adjacent segments with the same category
#[wasm_bindgen(js_name = coalesceSegments)]
pub fn coalesce_segments(segments_js: JsValue) -> Result<JsValue, JsValue> {
    let segments: Vec<Segment> = deserialize(segments_js, "Failed to deserialize segments")?;
    serialize(&normalizer::coalesce(&segments), "Failed to serialize segments")
}

/// Length of the text as the editor counts it (UTF-16 code units)
#[wasm_bindgen(js_name = characterCount)]
pub fn character_count(text: &str) -> usize {
    utf16_len(text)
}
