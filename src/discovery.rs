//! Markdown file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File name suffix identifying Markdown files
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Recursively collect Markdown files under `root` in traversal order
///
/// Symlinked files are kept but linked directories are not descended.
/// Entries that cannot be read are logged and skipped.
pub fn discover_markdown_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files
}

fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(MARKDOWN_EXTENSION))
        .unwrap_or(false)
}
