// End-to-end highlight cycles through the public Rust API

use bizcheck_wasm::highlight::{boundaries, coalesce, normalize};
use bizcheck_wasm::models::{Critique, PatternRule, RawSpan, Segment, SegmentCategory, Severity, SpanCategory};
use bizcheck_wasm::settings::default_rules;
use bizcheck_wasm::{compute_highlights, compute_segments, HighlightOptions};

fn warning_rule(id: &str, pattern: &str) -> PatternRule {
    PatternRule::new(id, id, pattern, Severity::Warning)
}

fn info_rule(id: &str, pattern: &str) -> PatternRule {
    PatternRule::new(id, id, pattern, Severity::Info)
}

/// Assert that segments partition [0, len) in order
fn assert_partition(segments: &[Segment], len: usize) {
    if len == 0 {
        assert!(segments.is_empty());
        return;
    }
    assert_eq!(segments.first().map(|s| s.start), Some(0));
    assert_eq!(segments.last().map(|s| s.end), Some(len));
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "segments must be contiguous");
    }
    assert!(segments.iter().all(|s| s.start < s.end), "no empty segments");
}

#[test]
fn test_ga_example() {
    let segments = compute_segments("がが", &[warning_rule("ga", "が")], &[]);
    assert_eq!(
        segments,
        vec![
            Segment::new(0, 1, SegmentCategory::Warning),
            Segment::new(1, 2, SegmentCategory::Warning),
        ]
    );

    let report = compute_highlights("がが", &[warning_rule("ga", "が")], &[], &HighlightOptions::default());
    let spans: Vec<(usize, usize, SpanCategory)> = report
        .pattern_spans
        .iter()
        .map(|s| (s.start, s.end, s.category))
        .collect();
    assert_eq!(
        spans,
        vec![(0, 1, SpanCategory::PatternWarning), (1, 2, SpanCategory::PatternWarning)]
    );
    assert_eq!(boundaries(2, &report.pattern_spans), vec![0, 1, 2]);
}

#[test]
fn test_warning_and_critique_over_same_range() {
    let text = "本件について確認させていただきます。";
    let rules = vec![warning_rule("humble", "させていただきます")];
    let critiques = vec![Critique::new("させていただきます", "いたします", "過剰な謙譲語")];

    let segments = compute_segments(text, &rules, &critiques);
    assert_eq!(
        segments,
        vec![
            Segment::new(0, 8, SegmentCategory::Plain),
            Segment::new(8, 17, SegmentCategory::CritiqueWarning),
            Segment::new(17, 18, SegmentCategory::Plain),
        ]
    );
}

#[test]
fn test_self_non_overlap() {
    let report = compute_highlights("abab", &[info_rule("ab", "ab")], &[], &HighlightOptions::default());
    let ranges: Vec<(usize, usize)> = report.pattern_spans.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(ranges, vec![(0, 2), (2, 4)]);
}

#[test]
fn test_safety_filter() {
    let text = "0123456789";
    let critiques = vec![Critique::new("012345678", "x", "")];
    let report = compute_highlights(text, &[], &critiques, &HighlightOptions::default());
    assert!(report.critique_spans.is_empty());
    assert_eq!(report.segments, vec![Segment::new(0, 10, SegmentCategory::Plain)]);
}

#[test]
fn test_safety_filter_respects_options() {
    let text = "0123456789";
    let critiques = vec![Critique::new("012345678", "x", "")];
    let options = HighlightOptions {
        max_critique_ratio: 1.0,
    };
    let report = compute_highlights(text, &[], &critiques, &options);
    assert_eq!(report.critique_spans.len(), 1);
}

#[test]
fn test_hallucinated_critique_changes_nothing() {
    let text = "ご確認のほど、よろしくお願いいたします。";
    let rules = default_rules();
    let real = Critique::new("ご確認のほど", "ご確認ください", "");
    let fake = Critique::new("存在しないフレーズ", "x", "");

    let with_fake = compute_segments(text, &rules, &[real.clone(), fake]);
    let without_fake = compute_segments(text, &rules, &[real]);
    assert_eq!(with_fake, without_fake);
}

#[test]
fn test_invalid_rule_does_not_abort_cycle() {
    let text = "会議を行うが、延期より中止";
    let rules = vec![
        warning_rule("broken", "(?<"),
        info_rule("do_noun", "を行う"),
        warning_rule("vague_ga", "が、"),
    ];
    let report = compute_highlights(text, &rules, &[], &HighlightOptions::default());

    assert_eq!(report.counts.warning, 1);
    assert_eq!(report.counts.info, 1);
    assert_eq!(report.diagnostics.skipped_rules(), vec!["broken"]);
    assert_partition(&report.segments, 13);
}

#[test]
fn test_default_rules_on_business_text() {
    let text = "資料を送付させていただきます。ご確認を行うことができますが、不明点があれば東京より連絡します。";
    let report = compute_highlights(text, &default_rules(), &[], &HighlightOptions::default());

    let labels: Vec<&str> = report.pattern_spans.iter().map(|s| s.label.as_str()).collect();
    assert!(labels.contains(&"過剰な「させていただく」"));
    assert!(labels.contains(&"冗長な「〜を行う」"));
    assert!(labels.contains(&"冗長な「ことができます」"));
    assert!(labels.contains(&"逆接の「が」"));
    assert!(labels.contains(&"「より」の用法"));
    assert!(report.diagnostics.is_empty(), "default rules all compile");
    assert_partition(&report.segments, text.encode_utf16().count());
}

#[test]
fn test_zero_length_rule_terminates() {
    let text = "見たり聞いたり";
    let rules = vec![info_rule("lookahead_only", "(?=たり)")];
    let report = compute_highlights(text, &rules, &[], &HighlightOptions::default());

    // Empty matches produce spans but no segments of their own
    assert_eq!(report.counts.info, 2);
    assert!(report.pattern_spans.iter().all(RawSpan::is_degenerate));
    assert_eq!(report.segments, vec![Segment::new(0, 7, SegmentCategory::Plain)]);
}

#[test]
fn test_coverage_and_order_independence_on_mixed_spans() {
    let len = 40;
    let spans = vec![
        RawSpan::new(0, 5, SpanCategory::PatternInfo, "a"),
        RawSpan::new(3, 12, SpanCategory::PatternWarning, "b"),
        RawSpan::new(3, 12, SpanCategory::PatternWarning, "b2"),
        RawSpan::new(10, 10, SpanCategory::ModelCritique, "empty"),
        RawSpan::new(11, 30, SpanCategory::ModelCritique, "c"),
        RawSpan::new(15, 16, SpanCategory::PatternInfo, "d"),
        RawSpan::new(29, 45, SpanCategory::PatternWarning, "e"),
    ];
    let expected = normalize(len, &spans);
    assert_partition(&expected, len);

    // Every permutation produced by repeated rotations and reversal agrees
    for shift in 0..spans.len() {
        let mut rotated = spans.clone();
        rotated.rotate_left(shift);
        assert_eq!(normalize(len, &rotated), expected);
        rotated.reverse();
        assert_eq!(normalize(len, &rotated), expected);
    }

    // Labels play no part in resolution
    let relabeled: Vec<RawSpan> = spans
        .iter()
        .map(|s| RawSpan::new(s.start, s.end, s.category, "same"))
        .collect();
    assert_eq!(normalize(len, &relabeled), expected);
}

#[test]
fn test_recomputation_is_idempotent() {
    let text = "ご検討いただけますと幸いです。より良い提案をさせていただきます。";
    let rules = default_rules();
    let critiques = vec![Critique::new("より良い", "さらに良い", "")];
    let first = compute_highlights(text, &rules, &critiques, &HighlightOptions::default());
    let second = compute_highlights(text, &rules, &critiques, &HighlightOptions::default());
    assert_eq!(first, second);
}

#[test]
fn test_coalesce_keeps_coverage() {
    let segments = compute_segments("がががあ", &[warning_rule("ga", "が")], &[]);
    assert_eq!(segments.len(), 4);

    let merged = coalesce(&segments);
    assert_eq!(
        merged,
        vec![
            Segment::new(0, 3, SegmentCategory::Warning),
            Segment::new(3, 4, SegmentCategory::Plain),
        ]
    );
}

#[test]
fn test_empty_document() {
    assert!(compute_segments("", &default_rules(), &[Critique::new("a", "b", "c")]).is_empty());
}
