//! Built-in business writing rules
//!
//! Shipped with the app and merged into saved settings by id, so rules added
//! in a new release show up for existing users.

use once_cell::sync::Lazy;

use crate::models::{PatternRule, Severity};

pub static DEFAULT_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule::new(
            "redundant_can",
            "冗長な「ことができます」",
            "ことができます",
            Severity::Info,
        )
        .with_message("「ことができます」は冗長です。「〜できます」や動詞の可能形への言い換えを検討してください。"),
        PatternRule::new(
            "humble_overuse",
            "過剰な「させていただく」",
            "(させていただき|させていただきます)",
            Severity::Warning,
        )
        .with_message("「させていただく」の多用は慇懃無礼な印象を与えることがあります。「いたします」などで簡潔にできないか確認してください。"),
        PatternRule::new("vague_ga", "逆接の「が」", "が、", Severity::Warning)
            .with_message("逆接でない「が、」は文章をだらだらと繋げてしまいます。句点「。」で区切ることを検討してください。"),
        PatternRule::new("do_noun", "冗長な「〜を行う」", "を行う", Severity::Info)
            .with_message("「〜を行う」は「〜する」と言い換えられる場合が多いです。（例：確認を行う→確認する）"),
        PatternRule::new(
            "double_negative",
            "二重否定",
            "なく（は｜も）ない",
            Severity::Warning,
        )
        .with_message("二重否定は分かりにくい表現です。肯定文への言い換えを検討してください。"),
        PatternRule::new("taritari", "並列の「たり」", "たり(?!.*たり)", Severity::Warning)
            .with_message("「たり」は通常「〜たり〜たり」と繰り返して使います。単独の場合は「など」の使用を検討してください。"),
        PatternRule::new("yori_check", "「より」の用法", "より", Severity::Info)
            .with_message("「より」は比較（〜よりも）で使うのが推奨されます。起点（〜から）の意味で使っている場合は、「から」への言い換えを検討してください。"),
    ]
});

/// A fresh copy of the built-in rules
pub fn default_rules() -> Vec<PatternRule> {
    DEFAULT_RULES.clone()
}
