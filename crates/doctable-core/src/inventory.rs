//! Inventory of generated API documentation output.
//!
//! Scans the tree the documentation generator writes into and answers one
//! question: which packages ended up with usable output? A package counts
//! if it has a directory holding a non-empty `index.html`, or a non-empty
//! standalone `<name>.html` at the top level. The scanner's own cache
//! directory (`__pycache__`) never counts, and a bare top-level
//! `index.html` is the site index, not a package.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::Result;

/// Scans `root` and returns the set of package names with non-empty
/// generated output.
///
/// A missing root is not an error: it yields the empty set, and the
/// API-link pass will then prune every link. That is the intended
/// degrade-to-safe behavior for a fresh environment where docs were never
/// generated.
pub fn scan(root: &Path) -> Result<BTreeSet<String>> {
    let mut generated = BTreeSet::new();

    if !root.exists() {
        warn!("generated-docs root not found: {}", root.display());
        return Ok(generated);
    }

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == "__pycache__" {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            let index = path.join("index.html");
            if non_empty_file(&index) {
                generated.insert(name);
            }
        } else if path.extension().is_some_and(|ext| ext == "html") {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            if stem != "index" && non_empty_file(&path) {
                generated.insert(stem);
            }
        }
    }

    debug!("found {} packages with generated docs", generated.len());
    Ok(generated)
}

fn non_empty_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.len() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_root_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = scan(&dir.path().join("no-such-dir")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn directory_with_populated_index_counts() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("sphinx-copybutton");
        fs::create_dir(&pkg).unwrap();
        fs::write(pkg.join("index.html"), "<html></html>").unwrap();

        let set = scan(dir.path()).unwrap();
        assert!(set.contains("sphinx-copybutton"));
    }

    #[test]
    fn directory_with_empty_index_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("broken");
        fs::create_dir(&pkg).unwrap();
        fs::write(pkg.join("index.html"), "").unwrap();

        let empty_dir = dir.path().join("never-ran");
        fs::create_dir(&empty_dir).unwrap();

        let set = scan(dir.path()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn standalone_html_counts_under_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mymodule.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let set = scan(dir.path()).unwrap();
        assert_eq!(set, BTreeSet::from(["mymodule".to_owned()]));
    }

    #[test]
    fn top_level_index_and_pycache_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let cache = dir.path().join("__pycache__");
        fs::create_dir(&cache).unwrap();
        fs::write(cache.join("index.html"), "<html></html>").unwrap();

        let set = scan(dir.path()).unwrap();
        assert!(set.is_empty());
    }
}
