//! Response-rendering and code-preview pipeline.
//!
//! Takes a raw AI reply, extracts an optional fenced code block, picks a
//! per-language render strategy, produces a complete standalone document,
//! and escapes it for embedding in an isolated rendering surface. The whole
//! pipeline is a pure string transformation: no I/O, no shared state, and no
//! failure mode — every input string renders to something.

pub mod escape;
pub mod fence;
pub mod highlight;
pub mod strategy;

pub use fence::CodeBlock;
pub use strategy::RenderStrategy;

/// Render a raw reply into a preview document escaped for embedding in a
/// surface attribute (`srcdoc="…"`). Total over any input string.
pub fn render(response_text: &str) -> String {
    escape::escape_attribute(&render_document(response_text))
}

/// The standalone preview document before attribute escaping.
///
/// Callers that write the document straight to disk (rather than embedding
/// it) can use this form directly.
pub fn render_document(response_text: &str) -> String {
    match fence::extract(response_text) {
        Some(block) => {
            RenderStrategy::for_language(&block.language).build(&block.language, &block.body)
        }
        None => strategy::plain_text_document(response_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::escape::unescape_attribute;

    #[test]
    fn plain_reply_keeps_text_and_gains_no_script() {
        let doc = render_document("Sure!\nHere are two points:\n  - one\n  - two");
        assert!(doc.contains("Sure!\nHere are two points:\n  - one\n  - two"));
        assert!(!doc.contains("<script"));
    }

    #[test]
    fn plain_reply_with_markup_cannot_execute() {
        let doc = render_document("try <script>alert(1)</script> maybe");
        assert!(!doc.contains("<script>alert(1)"));
    }

    #[test]
    fn html_block_renders_as_standalone_document() {
        let doc = render_document("Here:\n```html\n<div>x</div>\n```");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<div>x</div>"));
    }

    #[test]
    fn javascript_block_lands_in_a_script_element() {
        let doc = render_document("```javascript\nconsole.log(\"hi\")\n```");
        assert!(doc.contains("<script>"));
        assert!(doc.contains("console.log(\"hi\")"));
    }

    #[test]
    fn python_block_gets_keyword_markers() {
        let doc = render_document("```python\ndef f():\n    return 1\n```");
        assert!(doc.contains("<span class=keyword>def</span>"));
        assert!(doc.contains("<span class=keyword>return</span>"));
    }

    #[test]
    fn unknown_tag_falls_back_to_code_block() {
        let doc = render_document("```ruby\nputs 1\n```");
        assert!(doc.contains("<title>Preview - ruby</title>"));
        assert!(doc.contains("puts 1"));
    }

    #[test]
    fn unbalanced_fence_takes_plain_path() {
        let doc = render_document("```python\ndef f(): pass");
        assert!(doc.contains("```python"));
        assert!(doc.contains("<title>Preview</title>"));
    }

    #[test]
    fn render_escape_round_trips_to_the_document() {
        let inputs = [
            "plain",
            "```html\n<div class=\"a\">&</div>\n```",
            "```python\nprint('x')\n```",
        ];
        for input in inputs {
            assert_eq!(unescape_attribute(&render(input)), render_document(input));
        }
    }

    #[test]
    fn render_is_idempotent_across_calls() {
        let input = "```javascript\nconsole.log(1)\n```";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn empty_input_still_renders() {
        let doc = render("");
        assert!(!doc.is_empty());
    }
}
