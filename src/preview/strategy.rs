//! Per-language render strategies and their document templates.
//!
//! Every strategy produces a complete standalone document (doctype, head
//! with inline styles, body) that can be parsed in isolation and never
//! references external resources.

use crate::preview::escape::escape_text;
use crate::preview::highlight::highlight_python;

/// How a fenced block gets turned into a preview document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Render the markup directly (wrapped if it is not a full document).
    Html,
    /// Execute the code in the preview, echoing console output as text.
    Javascript,
    /// Show the code with cosmetic highlighting.
    Python,
    /// Show the code (or plain text) verbatim in a monospace block.
    Plain,
}

impl RenderStrategy {
    /// Select a strategy for a lower-cased language tag.
    ///
    /// Common aliases collapse onto their canonical tag; anything
    /// unrecognized (or an empty tag) takes the fallback strategy.
    pub fn for_language(tag: &str) -> Self {
        match tag {
            "html" | "htm" => RenderStrategy::Html,
            "javascript" | "js" | "jsx" => RenderStrategy::Javascript,
            "python" | "py" => RenderStrategy::Python,
            _ => RenderStrategy::Plain,
        }
    }

    /// Build the standalone preview document for an extracted block body.
    pub fn build(self, language: &str, body: &str) -> String {
        match self {
            RenderStrategy::Html => html_document(body),
            RenderStrategy::Javascript => javascript_document(body),
            RenderStrategy::Python => python_document(body),
            RenderStrategy::Plain => code_document(language, body),
        }
    }
}

// Injected into full documents so fixed-width markup does not overflow the
// preview surface.
const RESPONSIVE_STYLE: &str =
    "<style>html,body{max-width:100%;overflow-x:auto}img,video,canvas{max-width:100%;height:auto}</style>";

const BASE_STYLE: &str = r#"body { font-family: "Poppins", sans-serif; padding: 20px; background: #242424; color: #E3E3E3; }
    pre { background: #383838; padding: 15px; border-radius: 5px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }"#;

fn html_document(body: &str) -> String {
    if body.contains("<!DOCTYPE") || body.contains("<html") {
        // Already a full document; just slip the responsive styles in.
        match body.find("<head>") {
            Some(pos) => {
                let split = pos + "<head>".len();
                format!("{}{}{}", &body[..split], RESPONSIVE_STYLE, &body[split..])
            }
            None => body.to_string(),
        }
    } else {
        format!(
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"><title>Preview</title></head><body>{body}</body></html>"#
        )
    }
}

fn javascript_document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Preview - javascript</title>
<style>
    {BASE_STYLE}
</style>
</head>
<body>
<pre id="console-output"></pre>
<script>
(function () {{
  var output = document.getElementById("console-output");
  function emit(args) {{
    output.textContent += Array.prototype.map.call(args, String).join(" ") + "\n";
  }}
  console.log = function () {{ emit(arguments); }};
  console.error = function () {{ emit(arguments); }};
  try {{
{body}
  }} catch (err) {{
    output.textContent += "Error: " + err.message;
  }}
}})();
</script>
</body>
</html>"#
    )
}

fn python_document(body: &str) -> String {
    let highlighted = highlight_python(body);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Preview - python</title>
<style>
    {BASE_STYLE}
    .keyword {{ color: #C792EA; font-weight: 600; }}
    .string {{ color: #C3E88D; }}
    .comment {{ color: #7F848E; font-style: italic; }}
</style>
</head>
<body>
<pre>{highlighted}</pre>
</body>
</html>"#
    )
}

// Fallback for unrecognized tags: monospace block, no execution.
fn code_document(language: &str, body: &str) -> String {
    let escaped = escape_text(body);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Preview - {language}</title>
<style>
    {BASE_STYLE}
</style>
</head>
<body>
<pre>{escaped}</pre>
</body>
</html>"#
    )
}

/// Document for a reply with no fenced block at all. Whitespace is
/// preserved with soft wrapping so prose stays readable.
pub fn plain_text_document(text: &str) -> String {
    let escaped = escape_text(text);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Preview</title>
<style>
    {BASE_STYLE}
    pre {{ white-space: pre-wrap; }}
</style>
</head>
<body>
<pre>{escaped}</pre>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_strategy_with_aliases() {
        assert_eq!(RenderStrategy::for_language("html"), RenderStrategy::Html);
        assert_eq!(RenderStrategy::for_language("js"), RenderStrategy::Javascript);
        assert_eq!(RenderStrategy::for_language("py"), RenderStrategy::Python);
        assert_eq!(RenderStrategy::for_language("ruby"), RenderStrategy::Plain);
        assert_eq!(RenderStrategy::for_language(""), RenderStrategy::Plain);
    }

    #[test]
    fn html_fragment_gets_wrapped() {
        let doc = html_document("<div>x</div>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Preview</title>"));
        assert!(doc.contains("<body><div>x</div></body>"));
    }

    #[test]
    fn full_html_document_passes_through_with_responsive_styles() {
        let doc = html_document("<!DOCTYPE html><html><head><title>T</title></head><body>hi</body></html>");
        assert!(doc.contains("<head><style>"));
        assert!(doc.contains("<body>hi</body>"));
    }

    #[test]
    fn full_html_document_without_head_is_untouched() {
        let input = "<html><body>hi</body></html>";
        assert_eq!(html_document(input), input);
    }

    #[test]
    fn javascript_document_embeds_code_literally() {
        let doc = javascript_document(r#"console.log("hi")"#);
        assert!(doc.contains("<script>"));
        assert!(doc.contains(r#"console.log("hi")"#));
        assert!(doc.contains("catch (err)"));
    }

    #[test]
    fn unknown_language_is_escaped_not_executed() {
        let doc = code_document("ruby", "puts '<script>alert(1)</script>'");
        assert!(doc.contains("<title>Preview - ruby</title>"));
        assert!(!doc.contains("<script>alert(1)"));
        assert!(doc.contains("&lt;script&gt;"));
    }

    #[test]
    fn plain_text_document_preserves_whitespace() {
        let doc = plain_text_document("line one\n  indented");
        assert!(doc.contains("white-space: pre-wrap"));
        assert!(doc.contains("line one\n  indented"));
    }
}
