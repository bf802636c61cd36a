//! Keyword-to-pattern builder for the rule editor
//!
//! Users who do not write regular expressions type a keyword list and pick
//! how the keywords should match. Keywords are escaped, so they always match
//! literally.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BuilderKind {
    /// Any keyword, anywhere
    ContainsAny,
    /// Any keyword at the very start of the document
    StartsWith,
    /// Any keyword at the very end of the document
    EndsWith,
    /// All keywords somewhere after the match point (zero-width look-ahead)
    ContainsAll,
}

/// Split a keyword list on commas, ideographic commas and whitespace
pub fn split_keywords(input: &str) -> Vec<&str> {
    input
        .split(|c: char| c == ',' || c == '、' || c.is_whitespace())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Build a rule pattern from a keyword list
///
/// Returns `None` when the list holds no keywords.
pub fn build_pattern(keywords: &str, kind: BuilderKind) -> Option<String> {
    let escaped: Vec<String> = split_keywords(keywords)
        .into_iter()
        .map(regex::escape)
        .collect();
    if escaped.is_empty() {
        return None;
    }

    let alternation = escaped.join("|");
    let pattern = match kind {
        BuilderKind::ContainsAny => format!("({})", alternation),
        BuilderKind::StartsWith => format!("^({})", alternation),
        BuilderKind::EndsWith => format!("({})$", alternation),
        BuilderKind::ContainsAll => escaped.iter().map(|k| format!("(?=.*{})", k)).collect(),
    };

    Some(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::validate_pattern;

    #[test]
    fn test_split_keywords() {
        assert_eq!(split_keywords("至急, 緊急、重要　大至急"), vec!["至急", "緊急", "重要", "大至急"]);
        assert!(split_keywords(" ,、 ").is_empty());
    }

    #[test]
    fn test_builder_kinds() {
        assert_eq!(build_pattern("a,b", BuilderKind::ContainsAny).as_deref(), Some("(a|b)"));
        assert_eq!(build_pattern("a,b", BuilderKind::StartsWith).as_deref(), Some("^(a|b)"));
        assert_eq!(build_pattern("a,b", BuilderKind::EndsWith).as_deref(), Some("(a|b)$"));
        assert_eq!(
            build_pattern("a,b", BuilderKind::ContainsAll).as_deref(),
            Some("(?=.*a)(?=.*b)")
        );
    }

    #[test]
    fn test_keywords_are_escaped() {
        let pattern = build_pattern("1+1, (株)", BuilderKind::ContainsAny).unwrap();
        assert_eq!(pattern, r"(1\+1|\(株\))");
        assert!(validate_pattern(&pattern).is_ok());
    }

    #[test]
    fn test_no_keywords() {
        assert_eq!(build_pattern("", BuilderKind::ContainsAny), None);
    }

    #[test]
    fn test_built_patterns_compile() {
        for kind in [
            BuilderKind::ContainsAny,
            BuilderKind::StartsWith,
            BuilderKind::EndsWith,
            BuilderKind::ContainsAll,
        ] {
            let pattern = build_pattern("お世話, 恐縮", kind).unwrap();
            assert!(validate_pattern(&pattern).is_ok(), "{:?} -> {}", kind, pattern);
        }
    }
}
