//! doctable CLI - keep a generated documentation catalog honest
//!
//! Each maintenance pass is exposed as its own subcommand so the passes can
//! run independently in a docs pipeline. A pass exits zero on success
//! (including "nothing to do") and non-zero when its required input is
//! missing or the registry query fails.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    match cli.command {
        Commands::FixLinks { catalog, docs_dir } => {
            commands::fix_links(&catalog, &docs_dir, cli.format)?;
        },
        Commands::SyncVersions {
            catalog,
            freeze_cmd,
        } => {
            commands::sync_versions(&catalog, freeze_cmd.as_deref(), cli.format)?;
        },
        Commands::ValidateLinks {
            catalog,
            concurrency,
            timeout,
        } => {
            commands::validate_links(
                &catalog,
                concurrency,
                Duration::from_secs(timeout),
                cli.format,
            )
            .await?;
        },
    }

    Ok(())
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
