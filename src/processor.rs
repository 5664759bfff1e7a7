//! File Processor
//!
//! Reads, rewrites and persists Markdown files one at a time.
//! A failure on one file is reported and never stops the batch.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::discovery::discover_markdown_files;
use crate::rewriter::{Edit, RewriteRules, rewrite_document};

/// Whether rewritten content is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Write,
    /// Report what would change without touching any file
    DryRun,
}

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    Rewritten { edits: Vec<Edit> },
    WouldRewrite { edits: Vec<Edit> },
}

/// Totals for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub rewritten: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// Rewrite one file in place if, and only if, its content changes
pub fn process_file(path: &Path, rules: &RewriteRules, mode: Mode) -> Result<FileOutcome> {
    log::info!("Processing file: {}", path.display());

    let original = fs::read_to_string(path)
        .with_context(|| format!("Could not read file {}", path.display()))?;

    let rewritten = rewrite_document(&original, rules);
    for edit in &rewritten.edits {
        log::info!("  - {}", edit);
    }
    if rewritten.unterminated_fence() {
        log::debug!("  - Code block left open at end of {}", path.display());
    }

    if !(rewritten.changed() && rewritten.differs_from(&original)) {
        log::info!("  - No changes needed for {}", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    match mode {
        Mode::DryRun => {
            log::info!("Would reformat {} (dry run)", path.display());
            Ok(FileOutcome::WouldRewrite {
                edits: rewritten.edits,
            })
        }
        Mode::Write => {
            fs::write(path, &rewritten.content)
                .with_context(|| format!("Could not write to file {}", path.display()))?;
            log::info!("Successfully reformatted and saved {}", path.display());
            Ok(FileOutcome::Rewritten {
                edits: rewritten.edits,
            })
        }
    }
}

/// Process every Markdown file under the configured directory
pub fn run(config: &Config) -> Result<RunSummary> {
    log::info!("Starting scan in directory: {}", config.directory.display());

    let files = discover_markdown_files(&config.directory);
    let mut summary = RunSummary {
        discovered: files.len(),
        ..RunSummary::default()
    };

    if files.is_empty() {
        log::warn!("No Markdown (.md) files found in the specified directory.");
        return Ok(summary);
    }

    for file in &files {
        match process_file(file, &config.rules, config.mode) {
            Ok(FileOutcome::Unchanged) => summary.unchanged += 1,
            Ok(FileOutcome::Rewritten { .. } | FileOutcome::WouldRewrite { .. }) => {
                summary.rewritten += 1
            }
            Err(e) => {
                log::error!("{:#}", e);
                summary.failed += 1;
            }
        }
    }

    log::info!(
        "Processing complete: {} rewritten, {} unchanged, {} failed",
        summary.rewritten,
        summary.unchanged,
        summary.failed
    );

    Ok(summary)
}
