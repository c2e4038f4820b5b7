// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::error::ConfigError;

/// The ordered list of known instrument names.
///
/// The list is immutable once built and is shared by reference count, so cloning a
/// manifest (or a resolver holding one) never copies the names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstrumentManifest {
    names: Arc<[String]>,
}

impl InstrumentManifest {
    /// Creates a manifest from the given names, keeping their order.
    pub fn new<I, S>(names: I) -> InstrumentManifest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InstrumentManifest {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a manifest from a JSON file containing an array of instrument names.
    /// Collection files share the same format.
    pub fn load(path: &Path) -> Result<InstrumentManifest, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let names: Vec<String> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Manifest {
                path: path.to_path_buf(),
                source,
            })?;

        let manifest = InstrumentManifest::new(names);
        for duplicate in manifest.duplicates() {
            warn!(
                path = %path.display(),
                instrument = duplicate,
                "Instrument is listed more than once"
            );
        }
        info!(
            path = %path.display(),
            instruments = manifest.len(),
            "Loaded instrument manifest"
        );

        Ok(manifest)
    }

    /// Gets the instrument names in manifest order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Gets a shared handle to the names.
    pub fn shared(&self) -> Arc<[String]> {
        Arc::clone(&self.names)
    }

    /// Returns true if the given instrument is listed.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names that appear more than once, reported once each in first-seen order.
    fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.names
            .iter()
            .filter(|name| !seen.insert(name.as_str()) && reported.insert(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}
