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
use std::fmt;
use std::fs;
use std::path::{self, Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{ConfigError, InstrumentManifest, ResolverConfig};
use crate::notes::{normalize_note, SampleNote, SAMPLE_EXTENSION};
use crate::util::{filename_display, is_sample_file_name};

/// The soundfont directory used when none is configured.
pub const DEFAULT_SOUNDFONT: &str = "FluidR3_GM";

/// Appended to an instrument name to form its sample directory name.
pub const DIRECTORY_SUFFIX: &str = "-mp3";

/// Errors returned by instrument lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstrumentError {
    #[error(
        "Instrument \"{name}\" not found. Available instruments: {}",
        .available.join(", ")
    )]
    UnknownInstrument {
        name: String,
        available: Arc<[String]>,
    },

    #[error("Instrument directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },
}

/// The inclusive range of MIDI pitches covered by an instrument's samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchRange {
    lowest: i32,
    highest: i32,
}

impl PitchRange {
    pub fn lowest(&self) -> i32 {
        self.lowest
    }

    pub fn highest(&self) -> i32 {
        self.highest
    }

    pub fn contains(&self, pitch: i32) -> bool {
        (self.lowest..=self.highest).contains(&pitch)
    }

    fn include(self, pitch: i32) -> PitchRange {
        PitchRange {
            lowest: self.lowest.min(pitch),
            highest: self.highest.max(pitch),
        }
    }
}

impl fmt::Display for PitchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lowest, self.highest)
    }
}

/// Resolves instrument names to sample directories, sample files and CDN URLs.
///
/// A resolver is immutable after construction. Clones share the manifest.
#[derive(Debug, Clone)]
pub struct InstrumentResolver {
    /// The directory containing the soundfont directory. Always absolute.
    assets_dir: PathBuf,
    /// The soundfont directory name.
    soundfont: String,
    /// The known instruments.
    manifest: InstrumentManifest,
}

impl InstrumentResolver {
    /// Creates a resolver over the given assets directory using the default soundfont.
    /// A relative directory is made absolute against the current directory.
    pub fn new(assets_dir: impl AsRef<Path>, manifest: InstrumentManifest) -> InstrumentResolver {
        let assets_dir = assets_dir.as_ref();
        InstrumentResolver {
            assets_dir: path::absolute(assets_dir).unwrap_or_else(|_| assets_dir.to_path_buf()),
            soundfont: DEFAULT_SOUNDFONT.to_string(),
            manifest,
        }
    }

    /// Uses the given soundfont directory name instead of the default.
    pub fn with_soundfont(mut self, soundfont: &str) -> InstrumentResolver {
        self.soundfont = soundfont.to_string();
        self
    }

    /// Creates a resolver from a configuration, loading its manifest and collection.
    pub fn from_config(config: &ResolverConfig) -> Result<InstrumentResolver, ConfigError> {
        let manifest = InstrumentManifest::load(&config.manifest_path())?;
        let resolver =
            InstrumentResolver::new(config.assets_dir(), manifest).with_soundfont(config.soundfont());

        match config.collection_path() {
            Some(path) => {
                let collection = InstrumentManifest::load(&path)?;
                Ok(resolver.with_collection(collection.names())?)
            }
            None => Ok(resolver),
        }
    }

    /// Returns a resolver that only knows the instruments in the collection, in collection
    /// order. Every entry must be known to this resolver.
    pub fn with_collection<S: AsRef<str>>(
        &self,
        collection: &[S],
    ) -> Result<InstrumentResolver, InstrumentError> {
        for name in collection {
            self.check(name.as_ref())?;
        }

        Ok(InstrumentResolver {
            assets_dir: self.assets_dir.clone(),
            soundfont: self.soundfont.clone(),
            manifest: InstrumentManifest::new(collection.iter().map(AsRef::<str>::as_ref)),
        })
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn soundfont(&self) -> &str {
        &self.soundfont
    }

    /// The directory holding one sample directory per instrument.
    pub fn soundfont_dir(&self) -> PathBuf {
        self.assets_dir.join(&self.soundfont)
    }

    pub fn manifest(&self) -> &InstrumentManifest {
        &self.manifest
    }

    /// Gets all known instrument names in manifest order.
    pub fn instrument_names(&self) -> &[String] {
        self.manifest.names()
    }

    /// Gets the sample directory for the given instrument. Does not touch the filesystem.
    pub fn instrument_path(&self, name: &str) -> Result<PathBuf, InstrumentError> {
        self.check(name)?;
        Ok(self.soundfont_dir().join(directory_name(name)))
    }

    /// Lists the sample files of the given instrument in directory order.
    pub fn instrument_files(&self, name: &str) -> Result<Vec<PathBuf>, InstrumentError> {
        let path = self.instrument_path(name)?;
        let not_found = || InstrumentError::DirectoryNotFound { path: path.clone() };

        if !path.is_dir() {
            return Err(not_found());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&path).map_err(|_| not_found())? {
            let entry = entry.map_err(|_| not_found())?;
            let file = entry.path();

            if file.is_dir() {
                continue;
            }
            if is_sample_file_name(&entry.file_name()) {
                files.push(file);
            }
        }

        debug!(
            instrument = name,
            path = %path.display(),
            samples = files.len(),
            "Listed instrument samples"
        );
        Ok(files)
    }

    /// Builds the CDN URL of a note sample. The note is normalized with [`normalize_note`].
    pub fn instrument_note_url(
        &self,
        cdn_prefix: &str,
        name: &str,
        note: &str,
    ) -> Result<String, InstrumentError> {
        self.check(name)?;

        let separator = if cdn_prefix.ends_with('/') { "" } else { "/" };
        Ok(format!(
            "{}{}{}/{}/{}{}",
            cdn_prefix,
            separator,
            self.soundfont,
            directory_name(name),
            normalize_note(note),
            SAMPLE_EXTENSION
        ))
    }

    /// Computes the pitch range covered by the instrument's samples. Samples whose names
    /// are not notes are skipped. Returns None if no sample has a note name.
    pub fn pitch_range(&self, name: &str) -> Result<Option<PitchRange>, InstrumentError> {
        let range = self
            .instrument_files(name)?
            .iter()
            .filter_map(|file| {
                let file_name = filename_display(file);
                match SampleNote::from_file_name(file_name) {
                    Ok(note) => Some(note.pitch()),
                    Err(e) => {
                        warn!(
                            instrument = name,
                            file = file_name,
                            err = %e,
                            "Skipping sample without a note name"
                        );
                        None
                    }
                }
            })
            .fold(None, |range: Option<PitchRange>, pitch| {
                Some(match range {
                    Some(range) => range.include(pitch),
                    None => PitchRange {
                        lowest: pitch,
                        highest: pitch,
                    },
                })
            });

        Ok(range)
    }

    fn check(&self, name: &str) -> Result<(), InstrumentError> {
        if self.manifest.contains(name) {
            Ok(())
        } else {
            Err(InstrumentError::UnknownInstrument {
                name: name.to_string(),
                available: self.manifest.shared(),
            })
        }
    }
}

/// The sample directory name for an instrument.
pub fn directory_name(name: &str) -> String {
    format!("{}{}", name, DIRECTORY_SUFFIX)
}
