//! Rewrite Rules
//!
//! The immutable configuration a rewrite pass runs against.

use anyhow::{Result, bail};

/// Header lines removed by default
pub const DEFAULT_HEADERS: [&str; 2] = ["##### **Output**", "##### **Code**"];

/// Tag applied to untagged opening fences by default
pub const DEFAULT_TAG: &str = "output";

/// Header strings to strip and the tag for untagged fences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRules {
    headers: Vec<String>,
    default_tag: String,
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
            default_tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl RewriteRules {
    /// Build a validated rule set
    ///
    /// Headers are matched against trimmed lines, so they are stored trimmed.
    /// The tag must itself form a tagged fence when appended to the marker,
    /// otherwise a second pass would annotate the same fence again.
    pub fn new<I, S>(headers: I, default_tag: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trimmed_headers = Vec::new();
        for header in headers {
            let header = header.as_ref().trim();
            if header.is_empty() {
                bail!("Header strings must not be blank");
            }
            trimmed_headers.push(header.to_string());
        }

        let default_tag = default_tag.into();
        if default_tag.is_empty() {
            bail!("Default fence tag must not be empty");
        }
        if default_tag.chars().any(|c| c.is_whitespace() || c == '`') {
            bail!(
                "Default fence tag '{}' must not contain whitespace or backticks",
                default_tag
            );
        }

        Ok(Self {
            headers: trimmed_headers,
            default_tag,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Check whether a trimmed line is one of the configured headers
    pub fn is_header(&self, trimmed: &str) -> bool {
        self.headers.iter().any(|h| h == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RewriteRules::default();
        assert_eq!(rules.default_tag(), "output");
        assert!(rules.is_header("##### **Output**"));
        assert!(rules.is_header("##### **Code**"));
        assert!(!rules.is_header("##### **Notes**"));
    }

    #[test]
    fn test_headers_are_trimmed() {
        let rules = RewriteRules::new(["  ## Result  "], "text").unwrap();
        assert_eq!(rules.headers(), ["## Result".to_string()]);
        assert!(rules.is_header("## Result"));
    }

    #[test]
    fn test_blank_header_rejected() {
        assert!(RewriteRules::new(["   "], "output").is_err());
    }

    #[test]
    fn test_invalid_tags_rejected() {
        let no_headers: [&str; 0] = [];
        assert!(RewriteRules::new(no_headers, "").is_err());
        assert!(RewriteRules::new(no_headers, "two words").is_err());
        assert!(RewriteRules::new(no_headers, "a`b").is_err());
        assert!(RewriteRules::new(no_headers, "console").is_ok());
    }
}
