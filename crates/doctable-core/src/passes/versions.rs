//! Pass B: synchronize version cells with the installed-package registry.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::matcher;
use crate::registry::InstalledPackages;

/// Summary of a version-sync run.
#[derive(Debug, Serialize)]
pub struct VersionReport {
    /// Version cells rewritten from the registry. A cell whose value
    /// already matched is still counted here: the pass writes it again,
    /// identically.
    pub synced: usize,
    /// Packages named in the catalog but absent from the registry; their
    /// cells were left untouched.
    pub missing: Vec<String>,
}

/// Rewrites every version continuation cell with the installed version of
/// the package named on the preceding row-start line. Lookup misses never
/// overwrite the existing value, so a stale `Latest` placeholder survives
/// until the package is actually installed.
pub fn sync_versions(catalog: &mut Catalog, installed: &InstalledPackages) -> VersionReport {
    let mut report = VersionReport {
        synced: 0,
        missing: Vec::new(),
    };

    for index in 0..catalog.len().saturating_sub(1) {
        let (Some(start), Some(continuation)) = (catalog.line(index), catalog.line(index + 1))
        else {
            continue;
        };
        let Some(row) = matcher::version_row(start, continuation) else {
            continue;
        };
        match installed.lookup(&row.package) {
            Some(version) => {
                debug!("syncing {} to {version} (line {})", row.package, index + 1);
                catalog.replace_line(index + 1, format!("{}- {version}", row.indent));
                report.synced += 1;
            },
            None => report.missing.push(row.package),
        }
    }

    report
}
