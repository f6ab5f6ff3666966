//! CLI structure and argument parsing for `doctable`.
//!
//! One subcommand per maintenance pass:
//!
//! ```bash
//! doctable fix-links --catalog docs/sphinx-packages.rst --docs-dir docs/pdoc
//! doctable sync-versions --catalog docs/sphinx-packages.rst
//! doctable validate-links --catalog docs/sphinx-packages.rst --concurrency 10
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure for the `doctable` command.
#[derive(Parser, Debug)]
#[command(name = "doctable")]
#[command(version)]
#[command(about = "Keep a generated documentation catalog consistent with reality", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Report format for pass summaries
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Available subcommands, one per catalog maintenance pass.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove API links for packages without generated documentation
    FixLinks {
        /// Path to the catalog file
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// Root of the generated-docs tree. A missing root is not an
        /// error: every API link is then treated as unconfirmed.
        #[arg(long = "docs-dir", value_name = "DIR")]
        docs_dir: PathBuf,
    },

    /// Rewrite version cells from the installed-package registry
    SyncVersions {
        /// Path to the catalog file
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// Registry query command producing `name==version` lines
        /// (default: `pip list --format=freeze`)
        #[arg(long = "freeze-cmd", value_name = "CMD")]
        freeze_cmd: Option<String>,
    },

    /// Probe every manual link and blank out the dead ones
    ValidateLinks {
        /// Path to the catalog file
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// Number of URLs probed concurrently
        #[arg(long, value_name = "N", default_value_t = 10)]
        concurrency: usize,

        /// Per-request probe timeout in seconds
        #[arg(long, value_name = "SECS", default_value_t = 5)]
        timeout: u64,
    },
}

/// Output format for pass reports.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted output (default)
    Text,
    /// Machine-readable JSON for scripting
    Json,
}
