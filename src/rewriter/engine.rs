//! Rewrite Engine
//!
//! Single-pass, fence-aware line rewriting.
//! Lines stream through a two-state machine; nothing is indexed or mutated in place.

use std::borrow::Cow;
use std::fmt;
use std::iter::{Enumerate, Peekable};
use std::str::SplitInclusive;

use super::fence::{FENCE_MARKER, line_ending, parse_fence};
use super::rules::RewriteRules;

/// Whether the scan currently sits inside a fenced code block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    OutsideCode,
    InsideCode,
}

/// A single modification made during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// A header line was dropped, possibly together with the blank line after it
    HeaderRemoved {
        line: usize,
        header: String,
        blank_dropped: bool,
    },
    /// An untagged opening fence received the default tag
    FenceAnnotated { line: usize, tag: String },
}

impl Edit {
    /// 1-based line number in the original document
    pub fn line(&self) -> usize {
        match self {
            Edit::HeaderRemoved { line, .. } | Edit::FenceAnnotated { line, .. } => *line,
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::HeaderRemoved {
                line,
                header,
                blank_dropped,
            } => {
                write!(f, "Removing header '{}' at line {}", header, line)?;
                if *blank_dropped {
                    write!(f, " (with following blank line)")?;
                }
                Ok(())
            }
            Edit::FenceAnnotated { line, tag } => {
                write!(f, "Annotating un-tagged code block at line {} with '{}'", line, tag)
            }
        }
    }
}

/// Lazy rewriter over the raw lines of a document
///
/// Yields output lines with their terminators. Unchanged lines are borrowed
/// from the input.
pub struct RewriteIter<'a, 'r> {
    lines: Peekable<Enumerate<SplitInclusive<'a, char>>>,
    rules: &'r RewriteRules,
    state: ScanState,
    edits: Vec<Edit>,
}

impl<'a, 'r> RewriteIter<'a, 'r> {
    pub fn new(content: &'a str, rules: &'r RewriteRules) -> Self {
        Self {
            lines: content.split_inclusive('\n').enumerate().peekable(),
            rules,
            state: ScanState::default(),
            edits: Vec::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Consume the iterator, returning the recorded edits and final state
    pub fn finish(self) -> (Vec<Edit>, ScanState) {
        (self.edits, self.state)
    }
}

impl<'a> Iterator for RewriteIter<'a, '_> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, line) = self.lines.next()?;
            let trimmed = line.trim();

            if self.state == ScanState::OutsideCode && self.rules.is_header(trimmed) {
                let blank_dropped = self
                    .lines
                    .next_if(|(_, next)| next.trim().is_empty())
                    .is_some();
                self.edits.push(Edit::HeaderRemoved {
                    line: idx + 1,
                    header: trimmed.to_string(),
                    blank_dropped,
                });
                continue;
            }

            let Some(fence) = parse_fence(trimmed) else {
                return Some(Cow::Borrowed(line));
            };

            return Some(match self.state {
                ScanState::OutsideCode => {
                    self.state = ScanState::InsideCode;
                    if fence.is_untagged() {
                        let tag = self.rules.default_tag();
                        self.edits.push(Edit::FenceAnnotated {
                            line: idx + 1,
                            tag: tag.to_string(),
                        });
                        Cow::Owned(format!("{}{}{}", FENCE_MARKER, tag, line_ending(line)))
                    } else {
                        Cow::Borrowed(line)
                    }
                }
                ScanState::InsideCode => {
                    self.state = ScanState::OutsideCode;
                    Cow::Borrowed(line)
                }
            });
        }
    }
}

/// Result of rewriting a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub content: String,
    pub edits: Vec<Edit>,
    pub final_state: ScanState,
}

impl Rewritten {
    /// True if any line was dropped or substituted
    pub fn changed(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn differs_from(&self, original: &str) -> bool {
        self.content != original
    }

    /// The document ended inside a code block that was never closed
    pub fn unterminated_fence(&self) -> bool {
        self.final_state == ScanState::InsideCode
    }
}

/// Rewrite a full document against the given rules
pub fn rewrite_document(content: &str, rules: &RewriteRules) -> Rewritten {
    let mut iter = RewriteIter::new(content, rules);
    let content: String = iter.by_ref().collect();
    let (edits, final_state) = iter.finish();

    Rewritten {
        content,
        edits,
        final_state,
    }
}
