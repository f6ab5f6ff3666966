//! `fix-links` command - prune API links without generated documentation.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use doctable_core::{Catalog, inventory, passes};

use crate::cli::OutputFormat;
use crate::commands::preview;

pub fn execute(catalog_path: &Path, docs_dir: &Path, format: OutputFormat) -> Result<()> {
    if !docs_dir.exists() {
        eprintln!(
            "{} generated-docs root not found: {}",
            "⚠".yellow(),
            docs_dir.display()
        );
        eprintln!("  every API link will be treated as unconfirmed");
    }

    let generated = inventory::scan(docs_dir)
        .with_context(|| format!("failed to scan {}", docs_dir.display()))?;

    let mut catalog = Catalog::load(catalog_path)
        .with_context(|| format!("cannot fix API links in {}", catalog_path.display()))?;
    let report = passes::prune_api_links(&mut catalog, &generated);
    catalog
        .save(catalog_path)
        .with_context(|| format!("failed to write {}", catalog_path.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!(
                "{} found {} packages with generated docs",
                "✓".green(),
                generated.len()
            );
            if !generated.is_empty() {
                let names: Vec<String> = generated.iter().cloned().collect();
                println!("  {}", preview(&names, 15));
            }
            println!("{} kept {} API links", "✓".green(), report.kept);
            println!("{} removed {} API links", "✓".green(), report.removed);
            if !report.removed_packages.is_empty() {
                println!("  removed: {}", preview(&report.removed_packages, 20));
            }
        },
    }

    Ok(())
}
