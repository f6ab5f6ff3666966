//! The three catalog maintenance passes.
//!
//! Each pass is an independent, idempotent function over an in-memory
//! [`Catalog`](crate::Catalog): it replaces individual lines, never inserts
//! or deletes them, and leaves every line it does not recognize untouched.
//! Persistence is the caller's job, which keeps the passes testable against
//! string fixtures.

mod api_links;
mod manual_links;
mod versions;

pub use api_links::{ApiLinkReport, prune_api_links};
pub use manual_links::{ManualLinkReport, collect_manual_urls, prune_manual_links};
pub use versions::{VersionReport, sync_versions};
