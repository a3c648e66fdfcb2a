//! Fenced-code-block extraction from chat replies.

use regex::Regex;
use std::sync::OnceLock;

/// A fenced code block pulled out of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Lower-cased tag from the opening fence; empty when the fence had none.
    pub language: String,
    /// Block contents with the fence markers stripped and surrounding
    /// whitespace trimmed.
    pub body: String,
}

static FENCE: OnceLock<Regex> = OnceLock::new();

// Three backticks, an optional language tag, a newline, then a non-greedy
// body up to the next newline-backtick-fence. First match wins.
fn fence_pattern() -> &'static Regex {
    FENCE.get_or_init(|| Regex::new(r"(?s)```([\w-]*)\n(.*?)\n```").unwrap())
}

/// Extract the first fenced code block from a reply, if there is one.
///
/// An opening fence with no closing marker does not match; the caller falls
/// through to the plain-text rendering path.
pub fn extract(response_text: &str) -> Option<CodeBlock> {
    let caps = fence_pattern().captures(response_text)?;
    let language = caps.get(1).map_or("", |m| m.as_str()).to_lowercase();
    let body = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
    Some(CodeBlock { language, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_tagged_block() {
        let block = extract("Here you go:\n```python\ndef f():\n    return 1\n```\nEnjoy!").unwrap();
        assert_eq!(block.language, "python");
        assert_eq!(block.body, "def f():\n    return 1");
    }

    #[test]
    fn tag_is_lowercased() {
        let block = extract("```HTML\n<div>x</div>\n```").unwrap();
        assert_eq!(block.language, "html");
    }

    #[test]
    fn tag_is_optional() {
        let block = extract("```\nno tag here\n```").unwrap();
        assert_eq!(block.language, "");
        assert_eq!(block.body, "no tag here");
    }

    #[test]
    fn body_is_trimmed() {
        let block = extract("```js\n\n  alert(1)  \n\n```").unwrap();
        assert_eq!(block.body, "alert(1)");
    }

    #[test]
    fn first_block_wins_non_greedily() {
        let block = extract("```python\nfirst\n```\ntext\n```html\nsecond\n```").unwrap();
        assert_eq!(block.language, "python");
        assert_eq!(block.body, "first");
    }

    #[test]
    fn unbalanced_fence_does_not_match() {
        assert_eq!(extract("```python\ndef f(): pass"), None);
        assert_eq!(extract("no fences at all"), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn hyphenated_tags_are_accepted() {
        let block = extract("```objective-c\nNSLog(@\"hi\");\n```").unwrap();
        assert_eq!(block.language, "objective-c");
    }
}
