//! `validate-links` command - probe manual links and blank out dead ones.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use doctable_core::{Catalog, LinkChecker, passes};

use crate::cli::OutputFormat;
use crate::commands::preview;

pub async fn execute(
    catalog_path: &Path,
    concurrency: usize,
    timeout: Duration,
    format: OutputFormat,
) -> Result<()> {
    let mut catalog = Catalog::load(catalog_path)
        .with_context(|| format!("cannot validate links in {}", catalog_path.display()))?;

    let urls = passes::collect_manual_urls(&catalog);
    println!("found {} distinct manual links to validate", urls.len());

    let checker = LinkChecker::with_timeout(timeout)?;
    let liveness = checker.check_all(&urls, concurrency).await;

    let report = passes::prune_manual_links(&mut catalog, &liveness);
    catalog
        .save(catalog_path)
        .with_context(|| format!("failed to write {}", catalog_path.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("{} kept {} valid manual links", "✓".green(), report.valid);
            println!(
                "{} removed {} broken manual links",
                "✓".green(),
                report.removed
            );
            if !report.removed_urls.is_empty() {
                println!("  removed: {}", preview(&report.removed_urls, 20));
            }
        },
    }

    Ok(())
}
