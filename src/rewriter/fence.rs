//! Fence Detection
//!
//! Recognizes Markdown code fence delimiters.
//! Only backtick fences are handled; tilde fences and indented code blocks are plain text here.

use std::sync::LazyLock;

use regex::Regex;

/// The backtick run that opens and closes a code block
pub const FENCE_MARKER: &str = "```";

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```([^\s`]*)$").expect("fence pattern is valid"));

/// A recognized fence delimiter line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence<'a> {
    language: &'a str,
}

impl<'a> Fence<'a> {
    /// The language tag following the backticks (empty when untagged)
    pub fn language(&self) -> &'a str {
        self.language
    }

    pub fn is_untagged(&self) -> bool {
        self.language.is_empty()
    }
}

/// Match an already-trimmed line against the fence delimiter form
///
/// Returns `None` for anything that is not exactly three backticks
/// optionally followed by a tag without whitespace or further backticks.
pub fn parse_fence(trimmed: &str) -> Option<Fence<'_>> {
    let captures = FENCE_RE.captures(trimmed)?;
    let language = captures.get(1).map_or("", |m| m.as_str());
    Some(Fence { language })
}

/// Line terminator carried by a raw line
pub fn line_ending(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_fence() {
        let fence = parse_fence("```").unwrap();
        assert!(fence.is_untagged());
        assert_eq!(fence.language(), "");
    }

    #[test]
    fn test_tagged_fence() {
        let fence = parse_fence("```python").unwrap();
        assert!(!fence.is_untagged());
        assert_eq!(fence.language(), "python");
    }

    #[test]
    fn test_tag_with_punctuation() {
        let fence = parse_fence("```c++").unwrap();
        assert_eq!(fence.language(), "c++");
    }

    #[test]
    fn test_not_a_fence() {
        assert!(parse_fence("").is_none());
        assert!(parse_fence("``").is_none());
        assert!(parse_fence("text ```").is_none());
        assert!(parse_fence("```rust ignore").is_none());
        assert!(parse_fence("~~~").is_none());
    }

    #[test]
    fn test_extra_backticks_rejected() {
        assert!(parse_fence("````").is_none());
        assert!(parse_fence("```a`b").is_none());
    }

    #[test]
    fn test_line_ending() {
        assert_eq!(line_ending("abc\r\n"), "\r\n");
        assert_eq!(line_ending("abc\n"), "\n");
        assert_eq!(line_ending("abc"), "");
    }
}
