//! Cosmetic Python highlighting for preview documents.
//!
//! Three ordered substitutions over an HTML-escaped body: reserved words,
//! quoted string literals, trailing `#` comments. This is a best-effort
//! colorizer, not a tokenizer — escaped quotes, multi-line strings, and
//! keywords inside strings or comments are knowingly mishandled, matching
//! the behavior the preview always had.

use crate::preview::escape::escape_text;
use regex::Regex;
use std::sync::OnceLock;

static KEYWORD: OnceLock<Regex> = OnceLock::new();
static STRING: OnceLock<Regex> = OnceLock::new();
static COMMENT: OnceLock<Regex> = OnceLock::new();

fn keyword_pattern() -> &'static Regex {
    KEYWORD.get_or_init(|| {
        Regex::new(r"\b(def|class|if|else|elif|for|while|try|except|with|return|import|from|as)\b")
            .unwrap()
    })
}

fn string_pattern() -> &'static Regex {
    // One-line literals only; no escape handling.
    STRING.get_or_init(|| Regex::new(r#""[^"\n]*"|'[^'\n]*'"#).unwrap())
}

fn comment_pattern() -> &'static Regex {
    COMMENT.get_or_init(|| Regex::new(r"#[^\n]*").unwrap())
}

/// Wrap keywords, string literals, and comments in marker spans.
///
/// The span class attributes are deliberately unquoted so the string pass
/// cannot latch onto quotes introduced by the keyword pass. The passes are
/// still order-dependent (a keyword inside a string literal gets wrapped
/// first and then swallowed by the string span), but nesting stays balanced
/// and the document stays parseable.
pub fn highlight_python(code: &str) -> String {
    let escaped = escape_text(code);
    let keywords = keyword_pattern().replace_all(&escaped, "<span class=keyword>$1</span>");
    let strings = string_pattern().replace_all(&keywords, "<span class=string>$0</span>");
    let comments = comment_pattern().replace_all(&strings, "<span class=comment>$0</span>");
    comments.into_owned()
}
