//! Markdown Reformatter
//!
//! Walks a directory tree and normalizes Markdown files.
//!
//! This library provides:
//! - Fence-aware line rewriting (header removal, fence tagging)
//! - Markdown file discovery
//! - Per-file processing with batch error isolation
//! - Configuration management

pub mod config;
pub mod discovery;
pub mod processor;
pub mod rewriter;

// Re-exports for clean public API
pub use config::Config;
pub use discovery::discover_markdown_files;
pub use processor::{FileOutcome, Mode, RunSummary, process_file, run};
pub use rewriter::{Edit, RewriteRules, Rewritten, rewrite_document};
