//! Pass A: prune API links whose generated docs were never produced.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::matcher::{self, LineMatch};

/// Summary of an API-link pruning run.
#[derive(Debug, Serialize)]
pub struct ApiLinkReport {
    /// API-link rows whose package had generated output.
    pub kept: usize,
    /// API-link rows blanked out.
    pub removed: usize,
    /// Package names whose links were removed, in document order.
    pub removed_packages: Vec<String>,
}

/// Blanks out every API-link row whose package (exact case) is absent from
/// `generated`. The cell keeps its indentation so the surrounding table
/// stays aligned; already-empty cells do not match and are left alone,
/// which makes a re-run a no-op.
pub fn prune_api_links(catalog: &mut Catalog, generated: &BTreeSet<String>) -> ApiLinkReport {
    let mut report = ApiLinkReport {
        kept: 0,
        removed: 0,
        removed_packages: Vec::new(),
    };

    for index in 0..catalog.len() {
        let Some(line) = catalog.line(index) else {
            continue;
        };
        let Some(LineMatch::ApiLink { package, indent }) = matcher::classify(line) else {
            continue;
        };
        if generated.contains(&package) {
            report.kept += 1;
        } else {
            debug!("removing API link for {package} (line {index})");
            catalog.replace_line(index, format!("{indent}- "));
            report.removed += 1;
            report.removed_packages.push(package);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
   * - sphinx-copybutton
     - 0.5.2
     - `Manual <https://sphinx-copybutton.readthedocs.io/>`_
     - `link <pdoc/sphinx-copybutton/index.html>`_
   * - sphinx-kml
     - Latest
     - `Manual <https://example.org/kml/>`_
     - `link <pdoc/sphinx-kml/index.html>`_
";

    #[test]
    fn prunes_links_without_generated_output() {
        let mut catalog = Catalog::from_content(FIXTURE);
        let generated = BTreeSet::from(["sphinx-copybutton".to_owned()]);

        let report = prune_api_links(&mut catalog, &generated);

        assert_eq!(report.kept, 1);
        assert_eq!(report.removed, 1);
        assert_eq!(report.removed_packages, vec!["sphinx-kml".to_owned()]);
        assert_eq!(
            catalog.line(3),
            Some("     - `link <pdoc/sphinx-copybutton/index.html>`_")
        );
        assert_eq!(catalog.line(7), Some("     - "));
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn empty_inventory_prunes_everything() {
        let mut catalog = Catalog::from_content(FIXTURE);
        let report = prune_api_links(&mut catalog, &BTreeSet::new());
        assert_eq!(report.kept, 0);
        assert_eq!(report.removed, 2);
    }

    #[test]
    fn second_run_is_a_no_op() {
        let mut catalog = Catalog::from_content(FIXTURE);
        let generated = BTreeSet::from(["sphinx-copybutton".to_owned()]);

        prune_api_links(&mut catalog, &generated);
        let first = catalog.content();
        let report = prune_api_links(&mut catalog, &generated);

        assert_eq!(catalog.content(), first);
        assert_eq!(report.removed, 0);
        assert_eq!(report.kept, 1);
    }

    #[test]
    fn package_match_is_exact_case() {
        let mut catalog =
            Catalog::from_content("     - `link <pdoc/MyPkg/index.html>`_\n");
        let generated = BTreeSet::from(["mypkg".to_owned()]);

        let report = prune_api_links(&mut catalog, &generated);
        assert_eq!(report.removed, 1);
    }
}
