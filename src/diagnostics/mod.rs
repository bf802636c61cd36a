//! Diagnostics collected during a highlight cycle
//!
//! Nothing in a highlight cycle is fatal. Problems such as a rule whose pattern
//! does not compile are recorded here so the settings screen can point at the
//! broken rule, while the editor keeps highlighting with the remaining rules.

use serde::{Deserialize, Serialize};

use crate::highlight::PatternError;

/// Severity level for diagnostics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A non-fatal problem found while computing highlights
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "invalid_pattern", "critique_too_long")
    pub kind: String,
    /// Human-readable message
    pub message: String,
    /// Rule the diagnostic refers to, if any
    pub rule_id: Option<String>,
}

impl Diagnostic {
    pub fn new(
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind: kind.into(),
            message: message.into(),
            rule_id: None,
        }
    }

    /// Attach the id of the rule this diagnostic is about
    pub fn for_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    pub fn from_pattern_error(rule_id: &str, err: &PatternError) -> Self {
        let kind = match err {
            PatternError::Invalid { .. } => "invalid_pattern",
            PatternError::Aborted { .. } => "pattern_aborted",
        };
        Diagnostic::new(DiagnosticSeverity::Warning, kind, err.to_string()).for_rule(rule_id)
    }
}

/// Collection of diagnostics for one cycle
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics of a given kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    /// Ids of rules that were skipped this cycle
    pub fn skipped_rules(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| d.rule_id.as_deref())
            .collect()
    }
}
