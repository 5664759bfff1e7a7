//! Markdown Line Rewriter
//!
//! Strips designated header lines and tags untagged code fences,
//! skipping everything inside fenced code blocks.

pub mod engine;
pub mod fence;
pub mod rules;

pub use engine::{Edit, RewriteIter, Rewritten, ScanState, rewrite_document};
pub use fence::{Fence, parse_fence};
pub use rules::{DEFAULT_HEADERS, DEFAULT_TAG, RewriteRules};
