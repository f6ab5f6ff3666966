//! # doctable-core
//!
//! Core functionality for doctable - a maintenance toolkit for generated
//! documentation catalogs.
//!
//! The catalog is a line-oriented list-table listing documentation-extension
//! packages: each package cluster carries a name, an installed version, a
//! link to its externally hosted manual, and a link to locally generated API
//! documentation. Three independent, idempotent passes keep that table
//! consistent with reality:
//!
//! - **API-link pruning**: drop `link` cells whose generated output was
//!   never produced, cross-checked against the generated-docs tree.
//! - **Version sync**: rewrite version cells from the installed-package
//!   registry, tolerating hyphen/underscore naming drift.
//! - **Manual-link pruning**: probe every distinct external manual URL with
//!   a bounded worker pool and blank out the dead ones.
//!
//! Every pass operates on an in-memory [`Catalog`] and obeys two contracts:
//! the total line count never changes, and lines the pass does not recognize
//! are left byte-identical.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctable_core::{Catalog, inventory, passes};
//! use std::path::Path;
//!
//! let mut catalog = Catalog::load(Path::new("docs/sphinx-packages.rst"))?;
//! let generated = inventory::scan(Path::new("docs/pdoc"))?;
//! let report = passes::prune_api_links(&mut catalog, &generated);
//! catalog.save(Path::new("docs/sphinx-packages.rst"))?;
//! println!("kept {} API links, removed {}", report.kept, report.removed);
//! # Ok::<(), doctable_core::Error>(())
//! ```

/// Line-oriented catalog document I/O
pub mod catalog;
/// Error types and result aliases
pub mod error;
/// Generated-docs output inventory
pub mod inventory;
/// Positional line classifier for catalog rows
pub mod matcher;
/// The three catalog maintenance passes
pub mod passes;
/// URL liveness probing with HEAD-then-GET fallback
pub mod probe;
/// Installed-package registry query and name normalization
pub mod registry;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use matcher::{LineMatch, VersionRow};
pub use passes::{ApiLinkReport, ManualLinkReport, VersionReport};
pub use probe::{LinkChecker, ProbeOutcome};
pub use registry::InstalledPackages;
