//! Settings API
//!
//! Rule list loading and the rule editor's helpers.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize, validation_error};
use crate::highlight::validate_pattern as check_pattern;
use crate::settings::{self, BuilderKind};
use crate::wasm_info;

/// Effective rule settings from the saved JSON string (or `null`)
///
/// Never fails on bad saved data: corrupt JSON falls back to the defaults.
#[wasm_bindgen(js_name = loadRuleSettings)]
pub fn load_rule_settings(saved_json: Option<String>) -> Result<JsValue, JsValue> {
    let loaded = settings::load_rule_settings(saved_json.as_deref());
    wasm_info!("Loaded {} rules", loaded.regex_rules.len());
    serialize(&loaded, "Failed to serialize rule settings")
}

/// The built-in rule set
#[wasm_bindgen(js_name = defaultRules)]
pub fn default_rules() -> Result<JsValue, JsValue> {
    serialize(&settings::default_rules(), "Failed to serialize default rules")
}

/// Throws a message when the pattern does not compile
#[wasm_bindgen(js_name = validatePattern)]
pub fn validate_pattern(pattern: &str) -> Result<(), JsValue> {
    check_pattern(pattern).map_err(|e| validation_error(e.to_string()))
}

/// Build a pattern from a keyword list
///
/// `kind_js` is one of `"contains_any"`, `"starts_with"`, `"ends_with"`,
/// `"contains_all"`. Returns `undefined` when no keywords were given.
#[wasm_bindgen(js_name = buildPattern)]
pub fn build_pattern(keywords: &str, kind_js: JsValue) -> Result<Option<String>, JsValue> {
    let kind: BuilderKind = deserialize(kind_js, "Invalid builder kind")?;
    Ok(settings::build_pattern(keywords, kind))
}
