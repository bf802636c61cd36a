//! Pattern matcher - applies user rules to the document
//!
//! Each enabled rule is compiled and run with global-match semantics: after a
//! match, the search resumes at the end of that match, so one rule never
//! matches the same character twice. Spans from different rules overlap
//! freely; the normalizer sorts that out.
//!
//! Patterns are written for the browser's regular expression dialect, which
//! allows look-around and treats `\d`, `\w` and `\b` as ASCII. They are
//! rewritten by `dialect`, then compiled with the linear-time `regex` engine
//! when possible and with the backtracking `fancy-regex` engine otherwise.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::models::{PatternRule, RawSpan};
use crate::text::Utf16Offsets;

use super::dialect::to_ascii_classes;
use super::errors::PatternError;

#[derive(Debug)]
enum Engine {
    Linear(regex::Regex),
    Backtracking(fancy_regex::Regex),
}

/// A compiled rule pattern
#[derive(Debug)]
pub struct CompiledPattern {
    /// Pattern as the user wrote it
    source: String,
    engine: Engine,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let rewritten = to_ascii_classes(pattern);
        let engine = match regex::Regex::new(&rewritten) {
            Ok(re) => Engine::Linear(re),
            Err(linear_err) => match fancy_regex::Regex::new(&rewritten) {
                Ok(re) => {
                    log::debug!(
                        "Pattern '{}' needs backtracking engine ({})",
                        pattern,
                        linear_err
                    );
                    Engine::Backtracking(re)
                }
                Err(e) => {
                    return Err(PatternError::Invalid {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    });
                }
            },
        };

        Ok(CompiledPattern {
            source: pattern.to_string(),
            engine,
        })
    }

    /// Whether matching runs on the backtracking engine
    pub fn is_backtracking(&self) -> bool {
        matches!(self.engine, Engine::Backtracking(_))
    }

    /// Find the leftmost match starting at or after byte offset `pos`
    ///
    /// Returns the byte range of the match. Context before `pos` is still
    /// visible to anchors and look-behind.
    fn find_at(&self, text: &str, pos: usize) -> Result<Option<(usize, usize)>, PatternError> {
        match &self.engine {
            Engine::Linear(re) => Ok(re.find_at(text, pos).map(|m| (m.start(), m.end()))),
            Engine::Backtracking(re) => re
                .find_from_pos(text, pos)
                .map(|found| found.map(|m| (m.start(), m.end())))
                .map_err(|e| PatternError::Aborted {
                    pattern: self.source.clone(),
                    reason: e.to_string(),
                }),
        }
    }

    /// All non-overlapping matches, left to right, as byte ranges
    ///
    /// After an empty match the search resumes one character further on,
    /// so patterns like `(?=x)` or `a*` terminate.
    pub fn find_all(
        &self,
        text: &str,
        offsets: &Utf16Offsets,
    ) -> Result<Vec<(usize, usize)>, PatternError> {
        let mut found = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some((start, end)) = self.find_at(text, pos)? else {
                break;
            };
            found.push((start, end));

            pos = if end > start {
                end
            } else {
                match offsets.next_boundary(end) {
                    Some(next) => next,
                    None => break,
                }
            };
        }

        Ok(found)
    }
}

/// Check that a pattern compiles (settings form validation)
pub fn validate_pattern(pattern: &str) -> Result<(), PatternError> {
    CompiledPattern::compile(pattern).map(|_| ())
}

/// Run a single rule against the document
///
/// Ignores the rule's `enabled` flag; callers filter.
pub fn match_rule(
    text: &str,
    offsets: &Utf16Offsets,
    rule: &PatternRule,
) -> Result<Vec<RawSpan>, PatternError> {
    let pattern = CompiledPattern::compile(&rule.pattern)?;
    let category = rule.severity.span_category();

    let spans = pattern
        .find_all(text, offsets)?
        .into_iter()
        .map(|(start, end)| {
            RawSpan::new(
                offsets.to_utf16(start),
                offsets.to_utf16(end),
                category,
                rule.name.clone(),
            )
        })
        .collect();

    Ok(spans)
}

/// Run every enabled rule, in rule order
///
/// A rule that fails to compile or aborts contributes no spans; the failure
/// is logged and recorded in `diagnostics`.
pub fn match_rules(
    text: &str,
    offsets: &Utf16Offsets,
    rules: &[PatternRule],
    diagnostics: &mut Diagnostics,
) -> Vec<RawSpan> {
    let mut spans = Vec::new();

    for rule in rules.iter().filter(|r| r.enabled) {
        match match_rule(text, offsets, rule) {
            Ok(rule_spans) => spans.extend(rule_spans),
            Err(err) => {
                log::warn!("Skipping rule '{}': {}", rule.id, err);
                diagnostics.add(Diagnostic::from_pattern_error(&rule.id, &err));
            }
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Severity, SpanCategory};

    fn run(text: &str, rule: &PatternRule) -> Vec<(usize, usize)> {
        let offsets = Utf16Offsets::new(text);
        match_rule(text, &offsets, rule)
            .unwrap()
            .into_iter()
            .map(|s| (s.start, s.end))
            .collect()
    }

    #[test]
    fn test_matches_do_not_overlap_themselves() {
        let rule = PatternRule::new("ab", "ab", "ab", Severity::Warning);
        assert_eq!(run("abab", &rule), vec![(0, 2), (2, 4)]);

        let rule = PatternRule::new("aa", "aa", "aa", Severity::Warning);
        assert_eq!(run("aaa", &rule), vec![(0, 2)]);
    }

    #[test]
    fn test_offsets_are_utf16() {
        let rule = PatternRule::new("ga", "が", "が", Severity::Warning);
        assert_eq!(run("がが", &rule), vec![(0, 1), (1, 2)]);

        let rule = PatternRule::new("yori", "より", "より", Severity::Info);
        assert_eq!(run("😀東京より", &rule), vec![(4, 6)]);
    }

    #[test]
    fn test_label_is_rule_name() {
        let rule = PatternRule::new("do_noun", "", "を行う", Severity::Info);
        let text = "確認を行う";
        let spans = match_rule(text, &Utf16Offsets::new(text), &rule).unwrap();
        assert_eq!(spans[0].label, "");
    }

    #[test]
    fn test_span_category_and_label() {
        let text = "確認を行う";
        let offsets = Utf16Offsets::new(text);
        let rule = PatternRule::new("do_noun", "冗長な「〜を行う」", "を行う", Severity::Info);
        let spans = match_rule(text, &offsets, &rule).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, SpanCategory::PatternInfo);
        assert_eq!(spans[0].label, "冗長な「〜を行う」");
        assert_eq!((spans[0].start, spans[0].end), (2, 5));
    }

    #[test]
    fn test_empty_matches_make_progress() {
        let rule = PatternRule::new("star", "star", "x*", Severity::Info);
        let found = run("aがb", &rule);
        // One empty match per character boundary
        assert_eq!(found, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_empty_matches_step_over_surrogate_pairs() {
        let rule = PatternRule::new("star", "star", "x*", Severity::Info);
        // 😀 is two UTF-16 units; no empty match lands between them
        assert_eq!(run("a😀b", &rule), vec![(0, 0), (1, 1), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_empty_match_followed_by_real_match() {
        let rule = PatternRule::new("star", "star", "b*", Severity::Info);
        assert_eq!(run("abb", &rule), vec![(0, 0), (1, 3), (3, 3)]);
    }

    #[test]
    fn test_lookahead_uses_backtracking_engine() {
        let pattern = CompiledPattern::compile("たり(?!.*たり)").unwrap();
        assert!(pattern.is_backtracking());

        let rule = PatternRule::new("taritari", "並列の「たり」", "たり(?!.*たり)", Severity::Warning);
        // Only the last たり has no later たり
        assert_eq!(run("見たり聞いたりした", &rule), vec![(5, 7)]);
    }

    #[test]
    fn test_simple_pattern_uses_linear_engine() {
        let pattern = CompiledPattern::compile("(させていただき|させていただきます)").unwrap();
        assert!(!pattern.is_backtracking());
    }

    #[test]
    fn test_digit_class_is_ascii_only() {
        let rule = PatternRule::new("yen", "金額", r"\d+円", Severity::Info);
        assert!(run("価格は１００円です", &rule).is_empty());
        assert_eq!(run("価格は100円です", &rule), vec![(3, 7)]);
    }

    #[test]
    fn test_word_boundary_is_ascii_only() {
        let rule = PatternRule::new("id", "ID", r"\bID\b", Severity::Info);
        // Kana are not word characters, so IDの has a boundary after D
        assert_eq!(run("社員IDの確認", &rule), vec![(2, 4)]);
        assert!(run("IDs", &rule).is_empty());

        let rule = PatternRule::new("word", "word", r"\w+", Severity::Info);
        assert_eq!(run("ｖ１とv1", &rule), vec![(3, 5)]);
    }

    #[test]
    fn test_errors_report_the_written_pattern() {
        let err = validate_pattern(r"\d(").unwrap_err();
        assert_eq!(err.pattern(), r"\d(");
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = validate_pattern("(unclosed").unwrap_err();
        assert!(matches!(err, PatternError::Invalid { .. }));
        assert_eq!(err.pattern(), "(unclosed");
    }

    #[test]
    fn test_invalid_rule_is_skipped_with_diagnostic() {
        let text = "が、より";
        let offsets = Utf16Offsets::new(text);
        let rules = vec![
            PatternRule::new("broken", "broken", "[", Severity::Warning),
            PatternRule::new("yori", "より", "より", Severity::Info),
        ];
        let mut diagnostics = Diagnostics::new();
        let spans = match_rules(text, &offsets, &rules, &mut diagnostics);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].label, "より");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.diagnostics[0].rule_id.as_deref(), Some("broken"));
    }

    #[test]
    fn test_disabled_rules_are_not_run() {
        let text = "より";
        let offsets = Utf16Offsets::new(text);
        let rules = vec![PatternRule::new("yori", "より", "より", Severity::Info).disabled()];
        let mut diagnostics = Diagnostics::new();
        assert!(match_rules(text, &offsets, &rules, &mut diagnostics).is_empty());
    }
}
