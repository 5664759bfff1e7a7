//! Configuration management for the Markdown reformatter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Rule file discovery and loading (TOML)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;

use crate::processor::Mode;
use crate::rewriter::{DEFAULT_HEADERS, DEFAULT_TAG, RewriteRules};

/// Rule file looked up at the root of the target directory
pub const PROJECT_CONFIG_FILE: &str = ".md-reformat.toml";

/// Command-line arguments for the Markdown reformatter
#[derive(Debug, Parser)]
#[command(name = "md-reformat")]
#[command(about = "Reformat specific items in Markdown files")]
#[command(version)]
pub struct Args {
    /// Directory to scan for Markdown files
    #[arg(long, help = "The directory containing Markdown files to process")]
    pub directory: PathBuf,

    /// Explicit rule file overriding any discovered one
    #[arg(long, help = "TOML file with 'headers' and 'default_tag' keys")]
    pub config: Option<PathBuf>,

    /// Report changes without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Log level for console output
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// On-disk rule file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    pub headers: Option<Vec<String>>,
    pub default_tag: Option<String>,
}

impl RulesFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Merge with the built-in defaults and validate
    pub fn into_rules(self) -> Result<RewriteRules> {
        let headers = self
            .headers
            .unwrap_or_else(|| DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect());
        let default_tag = self.default_tag.unwrap_or_else(|| DEFAULT_TAG.to_string());
        RewriteRules::new(headers, default_tag)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the scan
    pub directory: PathBuf,
    pub rules: RewriteRules,
    /// Rule file the rules came from, if any
    pub rules_path: Option<PathBuf>,
    pub mode: Mode,
}

impl Config {
    /// Create configuration from parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_args_with_config_dir(args, dirs::config_dir().as_deref())
    }

    /// Same as [`Config::from_args`] with an explicit user config directory
    ///
    /// `None` disables the user-global rule file (useful for testing).
    pub fn from_args_with_config_dir(args: Args, user_config_dir: Option<&Path>) -> Result<Self> {
        if !args.directory.is_dir() {
            bail!(
                "The provided path '{}' is not a valid directory.",
                args.directory.display()
            );
        }

        let rules_path = match args.config {
            Some(explicit) => Some(explicit),
            None => Self::discover_rules_file(&args.directory, user_config_dir),
        };

        let rules = match &rules_path {
            Some(path) => {
                log::info!("Loading rules from {}", path.display());
                RulesFile::load(path)?
                    .into_rules()
                    .with_context(|| format!("Invalid rules in {}", path.display()))?
            }
            None => RewriteRules::default(),
        };

        let mode = if args.dry_run {
            Mode::DryRun
        } else {
            Mode::Write
        };

        Ok(Config {
            directory: args.directory,
            rules,
            rules_path,
            mode,
        })
    }

    /// Project file first, then the user-global one
    fn discover_rules_file(directory: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
        let project = directory.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            return Some(project);
        }

        user_config_dir
            .map(|dir| dir.join("md-reformat").join("config.toml"))
            .filter(|path| path.is_file())
    }
}
