//! Line-oriented access to the catalog document.
//!
//! The catalog file is treated as an ordered sequence of lines. The only
//! mutation any pass may perform is replacing a single line by its index,
//! which keeps the surrounding table structure intact: the line count of a
//! document never changes between [`Catalog::load`] and [`Catalog::save`].

use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// An in-memory catalog document.
///
/// Owned exclusively by the pass currently running. Passes receive it as
/// `&mut Catalog` and edit lines in place; persistence is a separate,
/// explicit [`save`](Catalog::save) call so passes stay unit-testable
/// against purely in-memory fixtures.
#[derive(Debug, Clone)]
pub struct Catalog {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Catalog {
    /// Loads the catalog from `path`.
    ///
    /// A missing file is [`Error::NotFound`]: every pass requires the
    /// catalog to exist before it can do anything.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "catalog file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        debug!("loaded catalog from {}", path.display());
        Ok(Self::from_content(&content))
    }

    /// Builds a catalog from raw text. Used by `load` and by tests that
    /// exercise passes against in-memory fixtures.
    pub fn from_content(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_owned).collect(),
            trailing_newline: content.ends_with('\n'),
        }
    }

    /// Writes the full line sequence back to `path`, reproducing the
    /// original trailing-newline state. Best-effort, non-transactional.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.content())?;
        debug!("wrote {} lines to {}", self.lines.len(), path.display());
        Ok(())
    }

    /// Reassembles the document text.
    pub fn content(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }

    /// The line at `index`, if in bounds.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines, in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replaces the line at `index`. Out-of-bounds indices are ignored;
    /// passes only ever hand back indices they obtained from iteration.
    pub fn replace_line(&mut self, index: usize, text: String) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = text;
        }
    }

    /// Number of lines in the document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
