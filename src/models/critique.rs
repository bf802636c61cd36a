//! Critiques returned by the remote language-model service
//!
//! The request/response protocol lives outside this crate. These types only
//! describe the already-parsed result the caller hands in.

use serde::{Deserialize, Serialize};

use super::serde_helpers::deserialize_null_as_empty;

/// One model observation about a phrase in the document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Critique {
    /// Phrase quoted from the document; may not actually occur in it
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub original_text: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub suggestion: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub reason: String,
}

impl Critique {
    pub fn new(
        original_text: impl Into<String>,
        suggestion: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            suggestion: suggestion.into(),
            reason: reason.into(),
        }
    }
}

/// Full analysis result for one document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub critiques: Vec<Critique>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub improved_text: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub summary: String,
}
