//! Business Writing Checker WASM Module
//!
//! Highlight engine for a Japanese business-writing editor. Pattern rules and
//! model critiques are turned into spans, and the spans are flattened into a
//! non-overlapping segment list the editor paints behind the textarea.

pub mod api;
pub mod diagnostics;
pub mod highlight;
pub mod models;
pub mod settings;
pub mod text;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use highlight::{compute_highlights, compute_segments, HighlightReport, PatternError, SpanCounts};
pub use models::*;
pub use settings::{HighlightOptions, RuleSettings};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();

    log::info!("Business writing checker WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
