//! Positional line classifier for catalog rows.
//!
//! This module is the single place that knows what the catalog's list-table
//! rows look like. Matching is anchored to the start of the line plus the
//! required indentation so that `link` or `Manual` occurring inside an
//! unrelated cell can never match. The literal markers are case-sensitive;
//! case-insensitivity of package names is the concern of the lookups
//! downstream, not of the classifier.
//!
//! Three shapes are recognized:
//!
//! ```text
//!      - `link <pdoc/<package>/index.html>`_       API-link cell
//!      - `Manual <https://example.org/docs/>`_     manual-link cell
//!    * - <package>                                 version row, start line
//!      - Latest | 1.2.3                            version row, continuation
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static API_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s+)- `link <pdoc/([^/]+)/index\.html>`_").expect("hard-coded regex")
});

#[allow(clippy::expect_used)]
static MANUAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s+)- `Manual <([^>]+)>`_").expect("hard-coded regex"));

#[allow(clippy::expect_used)]
static ROW_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\*\s*-\s+([A-Za-z0-9_-]+)\s*$").expect("hard-coded regex"));

#[allow(clippy::expect_used)]
static VERSION_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s+)-\s+(Latest|[0-9][0-9.]*)\s*$").expect("hard-coded regex"));

/// A single line recognized as a catalog fact.
///
/// `indent` is the exact leading whitespace of the matched line, preserved
/// so a replacement cell can be re-synthesized with identical alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// A link to locally generated API documentation.
    ApiLink {
        /// Package name embedded in the generated-docs path.
        package: String,
        /// Leading whitespace of the line.
        indent: String,
    },
    /// A link to an externally hosted manual.
    ManualLink {
        /// The referenced URL, verbatim.
        url: String,
        /// Leading whitespace of the line.
        indent: String,
    },
}

/// A two-line version unit: a table-row start naming the package, followed
/// by a continuation cell holding `Latest` or a dotted numeric version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRow {
    /// Package name from the row-start line.
    pub package: String,
    /// Leading whitespace of the continuation line.
    pub indent: String,
    /// Version token currently in the continuation cell.
    pub current: String,
}

/// Classifies a single line. Lines that are not an API-link or manual-link
/// cell yield `None` and must be passed through unchanged.
pub fn classify(line: &str) -> Option<LineMatch> {
    if let Some(caps) = API_LINK.captures(line) {
        return Some(LineMatch::ApiLink {
            package: caps[2].to_owned(),
            indent: caps[1].to_owned(),
        });
    }
    if let Some(caps) = MANUAL_LINK.captures(line) {
        return Some(LineMatch::ManualLink {
            url: caps[2].to_owned(),
            indent: caps[1].to_owned(),
        });
    }
    None
}

/// Probes a pair of consecutive lines for a version unit.
pub fn version_row(start: &str, continuation: &str) -> Option<VersionRow> {
    let start_caps = ROW_START.captures(start)?;
    let cont_caps = VERSION_CELL.captures(continuation)?;
    Some(VersionRow {
        package: start_caps[1].to_owned(),
        indent: cont_caps[1].to_owned(),
        current: cont_caps[2].to_owned(),
    })
}
