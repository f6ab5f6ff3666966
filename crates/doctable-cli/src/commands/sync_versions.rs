//! `sync-versions` command - rewrite version cells from the registry.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use doctable_core::registry::DEFAULT_FREEZE_COMMAND;
use doctable_core::{Catalog, InstalledPackages, passes};

use crate::cli::OutputFormat;
use crate::commands::preview;

pub fn execute(catalog_path: &Path, freeze_cmd: Option<&str>, format: OutputFormat) -> Result<()> {
    let command: Vec<String> = match freeze_cmd {
        Some(raw) => raw.split_whitespace().map(str::to_owned).collect(),
        None => DEFAULT_FREEZE_COMMAND.iter().map(|s| (*s).to_owned()).collect(),
    };

    // Query before touching the catalog: a failing registry must not leave
    // a half-updated document behind.
    let installed = InstalledPackages::query(&command)?;

    let mut catalog = Catalog::load(catalog_path)
        .with_context(|| format!("cannot sync versions in {}", catalog_path.display()))?;
    let report = passes::sync_versions(&mut catalog, &installed);
    catalog
        .save(catalog_path)
        .with_context(|| format!("failed to write {}", catalog_path.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!(
                "{} registry snapshot holds {} entries",
                "✓".green(),
                installed.len()
            );
            println!("{} synced {} version cells", "✓".green(), report.synced);
            if !report.missing.is_empty() {
                println!(
                    "{} {} packages not in registry, left unchanged: {}",
                    "⚠".yellow(),
                    report.missing.len(),
                    preview(&report.missing, 20)
                );
            }
        },
    }

    Ok(())
}
