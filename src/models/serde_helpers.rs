//! Serde helpers for lenient settings JSON
//!
//! Saved settings come from browser storage written by older versions of the
//! app, so some fields are missing or loosely typed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an `enabled` flag: anything other than an explicit `false` is on
///
/// Missing fields are handled by `#[serde(default = "default_enabled")]`.
pub fn deserialize_enabled<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(!matches!(value, Value::Bool(false)))
}

pub fn default_enabled() -> bool {
    true
}

/// Deserialize a string field that may be `null`
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// First value that is present and not `null`
///
/// Used where old and new saves name the same field differently.
pub fn first_present<'a>(candidates: &[Option<&'a Value>]) -> Option<&'a Value> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_null())
}
