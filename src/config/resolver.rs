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
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use super::error::ConfigError;
use crate::instruments::DEFAULT_SOUNDFONT;

/// The default manifest file name inside the soundfont directory.
const DEFAULT_MANIFEST: &str = "names.json";

/// The configuration for an instrument resolver.
#[derive(Deserialize, Clone, Debug)]
pub struct ResolverConfig {
    /// The directory that contains the soundfont directory.
    assets_dir: String,

    /// The soundfont directory name, also used as the first CDN path segment.
    #[serde(default = "default_soundfont")]
    soundfont: String,

    /// The instrument manifest. Relative paths are resolved against the soundfont directory.
    manifest: Option<String>,

    /// An optional collection restricting the instruments. Resolved like the manifest.
    collection: Option<String>,
}

fn default_soundfont() -> String {
    DEFAULT_SOUNDFONT.to_string()
}

impl ResolverConfig {
    /// Creates a new resolver configuration.
    pub fn new(
        assets_dir: &str,
        soundfont: Option<&str>,
        manifest: Option<&str>,
        collection: Option<&str>,
    ) -> ResolverConfig {
        ResolverConfig {
            assets_dir: assets_dir.to_string(),
            soundfont: soundfont.map_or_else(default_soundfont, str::to_string),
            manifest: manifest.map(str::to_string),
            collection: collection.map(str::to_string),
        }
    }

    /// Parse a resolver configuration from a file. The format follows the file extension.
    pub fn deserialize(path: &Path) -> Result<ResolverConfig, ConfigError> {
        Ok(Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<ResolverConfig>()?)
    }

    /// Gets the assets directory.
    pub fn assets_dir(&self) -> PathBuf {
        PathBuf::from(&self.assets_dir)
    }

    /// Gets the soundfont directory name.
    pub fn soundfont(&self) -> &str {
        &self.soundfont
    }

    /// Gets the manifest path.
    pub fn manifest_path(&self) -> PathBuf {
        self.resolve(self.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST))
    }

    /// Gets the collection path, if one is configured.
    pub fn collection_path(&self) -> Option<PathBuf> {
        self.collection.as_deref().map(|path| self.resolve(path))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        self.assets_dir().join(&self.soundfont).join(path)
    }
}
