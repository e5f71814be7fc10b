//! Cleanup of JSONC settings text before strict JSON parsing.
//!
//! Comment detection is line-local: a marker counts as a comment when the
//! number of `"` before it, minus the number of `\"`, is even. Strings that
//! span lines or end in `\\"` can fool it; existing settings files rely on
//! this exact behavior.

use regex::Regex;
use std::sync::OnceLock;

/// Strip `#`/`//` line comments and trailing commas from `text`.
pub fn clean(text: &str) -> String {
    remove_trailing_commas(&strip_comments(text))
}

/// Remove line comments, dropping lines that held nothing but a comment.
pub fn strip_comments(text: &str) -> String {
    let mut kept = Vec::new();
    for original in text.split('\n') {
        let mut line = original;
        if let Some(idx) = line.find('#') {
            if outside_string(&line[..idx]) {
                line = &line[..idx];
            }
        }
        if let Some(idx) = line.find("//") {
            if outside_string(&line[..idx]) {
                line = &line[..idx];
            }
        }
        if line.trim().is_empty() && !original.trim().is_empty() {
            continue;
        }
        kept.push(line);
    }
    kept.join("\n")
}

/// Drop commas that directly precede `}` or `]`, ignoring whitespace between.
pub fn remove_trailing_commas(text: &str) -> String {
    static TRAILING_COMMA: OnceLock<Regex> = OnceLock::new();
    let re = TRAILING_COMMA
        .get_or_init(|| Regex::new(r",(\s*[}\]])").expect("trailing comma pattern is valid"));
    re.replace_all(text, "$1").into_owned()
}

fn outside_string(prefix: &str) -> bool {
    let quotes = prefix.matches('"').count() - prefix.matches("\\\"").count();
    quotes % 2 == 0
}
