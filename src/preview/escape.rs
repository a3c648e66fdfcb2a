//! Reversible escaping for embedding preview documents.
//!
//! A finished preview document is placed inside a `srcdoc="…"` attribute on
//! the hosting page, so every character with markup meaning has to be
//! entity-escaped, and the surface has to be able to restore the document
//! byte-identically on display.

/// Escape a preview document for use inside a double- or single-quoted
/// attribute value.
///
/// # Examples
///
/// ```
/// use vitrine::preview::escape::escape_attribute;
///
/// assert_eq!(escape_attribute("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// ```
pub fn escape_attribute(document: &str) -> String {
    let mut out = String::with_capacity(document.len());
    for ch in document.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverse [`escape_attribute`].
///
/// `&amp;` is restored last so that escaped ampersand sequences
/// (`&amp;lt;` and friends) decode in a single pass.
pub fn unescape_attribute(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Escape text for insertion into element content (`<pre>` bodies and the
/// like). Quotes stay as-is; only `&`, `<` and `>` carry meaning there.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_attribute_breakers() {
        assert_eq!(escape_attribute(r#"a&b<c>d"e'f"#), "a&amp;b&lt;c&gt;d&quot;e&#39;f");
    }

    #[test]
    fn round_trips_byte_identically() {
        let documents = [
            "",
            "plain text",
            "<!DOCTYPE html><html><body>&amp; \"quoted\" 'single'</body></html>",
            "pre-escaped input: &lt;div&gt; stays &lt;div&gt;",
            "newlines\nand\ttabs survive",
        ];
        for doc in documents {
            assert_eq!(unescape_attribute(&escape_attribute(doc)), doc);
        }
    }

    #[test]
    fn escape_text_leaves_quotes_alone() {
        assert_eq!(escape_text(r#"x = "<&>""#), r#"x = "&lt;&amp;&gt;""#);
        assert_eq!(escape_text("'a' < 'b'"), "'a' &lt; 'b'");
    }
}
