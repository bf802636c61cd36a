//! Pattern rules authored by the user
//!
//! A rule is a regular expression plus display metadata. Rules are plain data;
//! compilation happens in `highlight::matcher` once per cycle.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serde_helpers::{
    default_enabled, deserialize_enabled, deserialize_null_as_empty, first_present,
};
use super::spans::SpanCategory;

/// Severity level of a pattern rule
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    /// Read a loosely typed level: only the string `"warning"` is a warning
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("warning") => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// Span category produced by a match of a rule with this severity
    pub fn span_category(self) -> SpanCategory {
        match self {
            Severity::Warning => SpanCategory::PatternWarning,
            Severity::Info => SpanCategory::PatternInfo,
        }
    }
}

/// A user-defined style check
///
/// Serialized with `severity`. On read, the older `level` field is accepted as
/// well and wins when both are present, since the settings form writes
/// `level` over a spread of a loaded rule.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "RuleFields")]
pub struct PatternRule {
    /// Unique identifier (stable across saves, used when merging defaults)
    pub id: String,

    /// Display label, also used as the label of every span this rule produces
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub name: String,

    /// Regular expression source
    #[serde(rename = "patternStr")]
    pub pattern: String,

    /// Long-form explanation shown in the rule list
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub message: String,

    pub severity: Severity,

    #[serde(default = "default_enabled", deserialize_with = "deserialize_enabled")]
    pub enabled: bool,
}

impl PatternRule {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pattern: pattern.into(),
            message: String::new(),
            severity,
            enabled: true,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

}

/// Wire shape of a rule as saved by any version of the app
#[derive(Deserialize)]
struct RuleFields {
    id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    name: String,
    #[serde(rename = "patternStr")]
    pattern: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    message: String,
    #[serde(default)]
    level: Option<Value>,
    #[serde(default)]
    severity: Option<Value>,
    #[serde(default = "default_enabled", deserialize_with = "deserialize_enabled")]
    enabled: bool,
}

impl From<RuleFields> for PatternRule {
    fn from(fields: RuleFields) -> Self {
        let level = first_present(&[fields.level.as_ref(), fields.severity.as_ref()]);
        PatternRule {
            id: fields.id,
            name: fields.name,
            pattern: fields.pattern,
            message: fields.message,
            severity: Severity::from_value(level),
            enabled: fields.enabled,
        }
    }
}
