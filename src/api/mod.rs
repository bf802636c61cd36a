//! Business Writing Checker WASM API
//!
//! JavaScript-facing functions. Everything here is a thin wrapper: convert
//! `JsValue` arguments with serde, call into `highlight` or `settings`, and
//! convert the result back.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde conversion, timing
//! - `highlight`: highlight cycles and segment utilities
//! - `settings`: rule loading, validation and the pattern builder

pub mod helpers;
pub mod highlight;
pub mod settings;

pub use highlight::{character_count, coalesce_segments, compute_highlights, compute_segments};
pub use settings::{build_pattern, default_rules, load_rule_settings, validate_pattern};
