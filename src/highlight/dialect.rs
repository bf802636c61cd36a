//! Browser regular expression dialect
//!
//! Rules are written against the browser's `RegExp` without the `u` flag, where
//! `\d`, `\w` and `\b` are ASCII-only. The Rust engines give these escapes
//! Unicode meaning, so full-width digits such as `１００` would match `\d`.
//! Before compiling, the escapes are spelled out as ASCII classes.
//!
//! `\D` and `\W` inside a bracket class are left as they are.

const WORD: &str = "0-9A-Za-z_";

/// Rewrite ASCII-only class escapes into explicit classes
pub fn to_ascii_classes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(escaped) = chars.next() else {
                    out.push('\\');
                    break;
                };
                match (in_class, escaped) {
                    (false, 'd') => out.push_str("[0-9]"),
                    (false, 'D') => out.push_str("[^0-9]"),
                    (false, 'w') => out.push_str(&format!("[{WORD}]")),
                    (false, 'W') => out.push_str(&format!("[^{WORD}]")),
                    (false, 'b') => out.push_str(&word_boundary()),
                    (false, 'B') => out.push_str(&not_word_boundary()),
                    (true, 'd') => out.push_str("0-9"),
                    (true, 'w') => out.push_str(WORD),
                    _ => {
                        out.push('\\');
                        out.push(escaped);
                    }
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

/// ASCII `\b` as look-around
fn word_boundary() -> String {
    format!("(?:(?<![{WORD}])(?=[{WORD}])|(?<=[{WORD}])(?![{WORD}]))")
}

/// ASCII `\B` as look-around
fn not_word_boundary() -> String {
    format!("(?:(?<=[{WORD}])(?=[{WORD}])|(?<![{WORD}])(?![{WORD}]))")
}
