//! Tunables for a highlight cycle

use serde::{Deserialize, Serialize};

/// Critiques quoting more than this share of the document are not highlighted
pub const DEFAULT_MAX_CRITIQUE_RATIO: f64 = 0.8;

fn default_max_critique_ratio() -> f64 {
    DEFAULT_MAX_CRITIQUE_RATIO
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightOptions {
    /// Upper bound on quote length / document length for critique spans
    #[serde(default = "default_max_critique_ratio")]
    pub max_critique_ratio: f64,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            max_critique_ratio: DEFAULT_MAX_CRITIQUE_RATIO,
        }
    }
}
