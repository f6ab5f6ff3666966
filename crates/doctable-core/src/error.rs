//! Error types and handling for doctable-core operations.
//!
//! Errors are split into whole-pass precondition failures (a missing catalog
//! file, a failed registry query) and per-row or per-URL failures. Only the
//! former surface as `Err` values; the latter are recovered locally by the
//! pass that observed them, worst case leaving a row unchanged.

use thiserror::Error;

/// The main error type for doctable-core operations.
///
/// All public fallible functions in doctable-core return `Result<T, Error>`.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading and writing the catalog file and walking the
    /// generated-docs tree. The underlying `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Covers construction of the HTTP client used for liveness probes.
    /// Per-URL probe failures are never surfaced through this variant;
    /// they resolve to a dead-link verdict inside the probe state machine.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A required input file does not exist.
    ///
    /// Fatal for the pass that needed it. Note that a missing
    /// generated-docs root is *not* reported through this variant: the
    /// inventory degrades to the empty set instead.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The installed-package registry query failed or produced output with
    /// no parseable `name==version` pairs.
    ///
    /// Fatal for the version-sync pass; no partial updates are attempted.
    #[error("Registry query failed: {0}")]
    Registry(String),
}

/// Result type alias for doctable-core operations.
pub type Result<T> = std::result::Result<T, Error>;
