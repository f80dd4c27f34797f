//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Default seconds to wait before deleting temporary HTML files.
///
/// Long enough for browsers to finish loading the files even on slow
/// machines. Overridable via `MDVIEW_CLEANUP_DELAY`.
pub const DEFAULT_CLEANUP_DELAY: u64 = 30;

/// Command line configuration for mdview.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdview", version, about, long_about = None, arg_required_else_help = true)]
pub struct Config {
    /// Markdown file(s) to view
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Open a native window instead of the default browser
    #[arg(short, long)]
    pub window: bool,

    /// Keep the generated HTML file(s) instead of deleting them after viewing
    #[arg(short, long)]
    pub keep: bool,

    /// View the bundled README instead of file arguments
    #[arg(short, long)]
    pub readme: bool,

    /// Internal sweeper entry point: delete FILE arguments after this many
    /// seconds, then exit.
    #[arg(long, hide = true, value_name = "SECONDS")]
    pub sweep_delay: Option<u64>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates the argument combination.
    ///
    /// # Errors
    ///
    /// Returns error if no input files were given and `--readme` was not
    /// requested. (Sweeper invocations carry their own paths.)
    pub fn validate(&self) -> Result<()> {
        if self.sweep_delay.is_none() && !self.readme && self.files.is_empty() {
            bail!("no input files; pass at least one Markdown file or use --readme");
        }

        Ok(())
    }
}

/// Returns the cleanup delay in seconds, honoring `MDVIEW_CLEANUP_DELAY`.
///
/// Read once at startup. Non-numeric or non-positive overrides fall back to
/// the default rather than erroring.
pub fn cleanup_delay() -> u64 {
    parse_cleanup_delay(std::env::var("MDVIEW_CLEANUP_DELAY").ok())
}

fn parse_cleanup_delay(raw: Option<String>) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|seconds| *seconds > 0)
        .map(|seconds| seconds as u64)
        .unwrap_or(DEFAULT_CLEANUP_DELAY)
}
