//! Installed-package registry query and name normalization.
//!
//! Pass B needs to know which version of every package is actually
//! installed. The registry is queried through an external freeze-style
//! command (`pip list --format=freeze` by default) producing one
//! `name==version` pair per line. Package naming in the catalog drifts
//! from the registry's canonical names in predictable ways (hyphen vs
//! underscore, case), so the map is keyed by normalized name and lookups
//! retry with the separators swapped.

use std::collections::HashMap;
use std::process::Command;

use tracing::{debug, warn};

use crate::{Error, Result};

/// The default registry query, matching a Python package environment.
pub const DEFAULT_FREEZE_COMMAND: &[&str] = &["pip", "list", "--format=freeze"];

/// A read-only snapshot of the installed package set, keyed by normalized
/// package name.
#[derive(Debug, Clone, Default)]
pub struct InstalledPackages {
    versions: HashMap<String, String>,
}

impl InstalledPackages {
    /// Runs `command` and parses its stdout as freeze output.
    ///
    /// A command that cannot be spawned, exits non-zero, or produces no
    /// parseable pairs at all is [`Error::Registry`]: the version-sync pass
    /// must not run against a half-missing registry.
    pub fn query(command: &[String]) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| Error::Registry("empty freeze command".to_owned()))?;

        let output = Command::new(program).args(args).output().map_err(|err| {
            Error::Registry(format!("failed to run {}: {err}", command.join(" ")))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Registry(format!(
                "{} exited with {}: {}",
                command.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let installed = Self::parse(&stdout);
        if installed.is_empty() {
            return Err(Error::Registry(format!(
                "{} produced no name==version pairs",
                command.join(" ")
            )));
        }
        Ok(installed)
    }

    /// Parses freeze output. Lines without a `==` separator (editable
    /// installs, direct references) are skipped with a warning.
    pub fn parse(output: &str) -> Self {
        let mut versions = HashMap::new();
        for line in output.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once("==") {
                Some((name, version)) => {
                    let name = name.trim().to_lowercase();
                    let version = version.trim().to_owned();
                    // Key both spellings; both forms describe the same
                    // install, so last-write-wins is harmless.
                    versions.insert(name.replace('_', "-"), version.clone());
                    versions.insert(name, version);
                },
                None => warn!("skipping unparseable registry line: {line}"),
            }
        }
        debug!("registry snapshot holds {} entries", versions.len());
        Self { versions }
    }

    /// Looks up `name` case-insensitively, retrying with `-` and `_`
    /// swapped when the exact normalized form misses.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let key = name.to_lowercase();
        self.versions
            .get(&key)
            .or_else(|| self.versions.get(&key.replace('-', "_")))
            .or_else(|| self.versions.get(&key.replace('_', "-")))
            .map(String::as_str)
    }

    /// Number of distinct keys in the snapshot.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
