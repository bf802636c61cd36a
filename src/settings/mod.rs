//! Rule settings
//!
//! The settings store keeps the user's rules as JSON in browser storage. This
//! module turns that JSON into the effective rule list: saved rules first,
//! then any built-in rule the user has never seen. Fields this crate does not
//! own (usage presets, prompts, voice selection) are carried through as-is.
//!
//! ## Modules
//!
//! - `defaults`: the built-in rule set
//! - `builder`: keyword-to-pattern builder for the rule editor
//! - `options`: highlight cycle tunables

pub mod builder;
pub mod defaults;
pub mod options;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
use crate::models::PatternRule;

pub use builder::{build_pattern, BuilderKind};
pub use defaults::{default_rules, DEFAULT_RULES};
pub use options::HighlightOptions;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings must be a JSON object")]
    NotAnObject,
}

/// Effective settings after merging saved data with the defaults
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleSettings {
    pub regex_rules: Vec<PatternRule>,

    /// Saved fields owned by other parts of the app
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            regex_rules: default_rules(),
            other: Map::new(),
        }
    }
}

impl RuleSettings {
    /// Enabled rules, in display order
    pub fn enabled_rules(&self) -> impl Iterator<Item = &PatternRule> {
        self.regex_rules.iter().filter(|r| r.enabled)
    }
}

/// Append every default whose id is not already among `saved`
pub fn merge_with_defaults(saved: Vec<PatternRule>, defaults: &[PatternRule]) -> Vec<PatternRule> {
    let saved_ids: HashSet<&str> = saved.iter().map(|r| r.id.as_str()).collect();
    let missing: Vec<PatternRule> = defaults
        .iter()
        .filter(|r| !saved_ids.contains(r.id.as_str()))
        .cloned()
        .collect();

    let mut merged = saved;
    merged.extend(missing);
    merged
}

/// Read rules one entry at a time, skipping entries that are not rules
///
/// Each skipped entry is logged and recorded as a `malformed_rule` diagnostic,
/// so one bad rule never costs the rest of the list.
pub fn parse_rules(values: Vec<Value>, diagnostics: &mut Diagnostics) -> Vec<PatternRule> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let rule_id = value.get("id").and_then(Value::as_str).map(str::to_string);
            match serde_json::from_value::<PatternRule>(value) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    log::warn!("Dropping rule #{}: {}", idx, e);
                    let mut diagnostic = Diagnostic::new(
                        DiagnosticSeverity::Warning,
                        "malformed_rule",
                        format!("Rule #{} is not a valid rule: {}", idx, e),
                    );
                    if let Some(id) = rule_id {
                        diagnostic = diagnostic.for_rule(id);
                    }
                    diagnostics.add(diagnostic);
                    None
                }
            }
        })
        .collect()
}

/// Read saved rules; a rule saved without a name is shown under its id
fn parse_saved_rules(values: Vec<Value>) -> Vec<PatternRule> {
    let mut dropped = Diagnostics::new();
    let mut rules = parse_rules(values, &mut dropped);
    for rule in rules.iter_mut().filter(|r| r.name.is_empty()) {
        rule.name = rule.id.clone();
    }
    rules
}

/// Parse saved settings JSON and merge it with the defaults
pub fn parse_rule_settings(json: &str) -> Result<RuleSettings, SettingsError> {
    let Value::Object(mut object) = serde_json::from_str::<Value>(json)? else {
        return Err(SettingsError::NotAnObject);
    };

    let regex_rules = match object.remove("regexRules") {
        Some(Value::Array(values)) => {
            merge_with_defaults(parse_saved_rules(values), &DEFAULT_RULES)
        }
        _ => default_rules(),
    };

    Ok(RuleSettings {
        regex_rules,
        other: object,
    })
}

/// Load settings, falling back to the defaults on missing or corrupt data
pub fn load_rule_settings(saved: Option<&str>) -> RuleSettings {
    let Some(json) = saved else {
        return RuleSettings::default();
    };

    match parse_rule_settings(json) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}; using default rules", e);
            RuleSettings::default()
        }
    }
}
