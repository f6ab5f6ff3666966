//! Pass C: prune manual links whose external URL is dead.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::matcher::{self, LineMatch};

/// Summary of a manual-link pruning run.
#[derive(Debug, Serialize)]
pub struct ManualLinkReport {
    /// Manual-link rows whose URL answered a probe.
    pub valid: usize,
    /// Manual-link rows replaced with an `N/A` cell.
    pub removed: usize,
    /// The dead URLs, in document order, one entry per affected row.
    pub removed_urls: Vec<String>,
}

/// Collects the distinct URLs referenced by manual-link rows.
///
/// The set is what gets probed: a URL shared by several rows is checked
/// exactly once regardless of how often it appears.
pub fn collect_manual_urls(catalog: &Catalog) -> BTreeSet<String> {
    catalog
        .lines()
        .iter()
        .filter_map(|line| match matcher::classify(line) {
            Some(LineMatch::ManualLink { url, .. }) => Some(url),
            _ => None,
        })
        .collect()
}

/// Rewrites every manual-link row whose URL is marked dead in `liveness`
/// into an `N/A` cell with preserved indentation. URLs missing from the
/// map are treated as live and left alone; the rewrite must never outrun
/// the probes.
pub fn prune_manual_links(
    catalog: &mut Catalog,
    liveness: &HashMap<String, bool>,
) -> ManualLinkReport {
    let mut report = ManualLinkReport {
        valid: 0,
        removed: 0,
        removed_urls: Vec::new(),
    };

    for index in 0..catalog.len() {
        let Some(line) = catalog.line(index) else {
            continue;
        };
        let Some(LineMatch::ManualLink { url, indent }) = matcher::classify(line) else {
            continue;
        };
        if liveness.get(&url).copied().unwrap_or(true) {
            report.valid += 1;
        } else {
            debug!("removing dead manual link {url} (line {index})");
            catalog.replace_line(index, format!("{indent}- N/A"));
            report.removed += 1;
            report.removed_urls.push(url);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
   * - good-pkg
     - 1.0
     - `Manual <https://good.example>`_
     - `link <pdoc/good-pkg/index.html>`_
   * - dead-pkg
     - 2.0
     - `Manual <https://dead.example>`_
     - `link <pdoc/dead-pkg/index.html>`_
";

    #[test]
    fn collect_deduplicates_urls() {
        let catalog = Catalog::from_content(
            "     - `Manual <https://shared.example>`_\n\
                  - filler\n     - `Manual <https://shared.example>`_\n",
        );
        let urls = collect_manual_urls(&catalog);
        assert_eq!(urls, BTreeSet::from(["https://shared.example".to_owned()]));
    }

    #[test]
    fn dead_rows_become_na_cells() {
        let mut catalog = Catalog::from_content(FIXTURE);
        let liveness = HashMap::from([
            ("https://good.example".to_owned(), true),
            ("https://dead.example".to_owned(), false),
        ]);

        let report = prune_manual_links(&mut catalog, &liveness);

        assert_eq!(report.valid, 1);
        assert_eq!(report.removed, 1);
        assert_eq!(report.removed_urls, vec!["https://dead.example".to_owned()]);
        assert_eq!(
            catalog.line(2),
            Some("     - `Manual <https://good.example>`_")
        );
        assert_eq!(catalog.line(6), Some("     - N/A"));
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn unprobed_urls_are_left_alone() {
        let mut catalog = Catalog::from_content(FIXTURE);
        let report = prune_manual_links(&mut catalog, &HashMap::new());
        assert_eq!(report.removed, 0);
        assert_eq!(report.valid, 2);
    }

    #[test]
    fn second_run_is_a_no_op() {
        let mut catalog = Catalog::from_content(FIXTURE);
        let liveness = HashMap::from([("https://dead.example".to_owned(), false)]);

        prune_manual_links(&mut catalog, &liveness);
        let first = catalog.content();
        let report = prune_manual_links(&mut catalog, &liveness);

        assert_eq!(catalog.content(), first);
        assert_eq!(report.removed, 0);
    }
}
