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

//! Accessors for a static tree of per-instrument sample files.
//!
//! The tree is laid out as `<assets dir>/<soundfont>/<instrument>-mp3/<note>.mp3`,
//! with a `names.json` manifest listing the instruments. This crate provides:
//! - Instrument name lookup against the manifest
//! - Local directory and sample file resolution
//! - CDN URL construction for individual notes
//! - Sample file name parsing and per-instrument pitch ranges
//! - Verification of an asset tree against its manifest

pub mod config;
pub mod instruments;
pub mod notes;
pub mod verify;

mod util;

#[cfg(test)]
mod testutil;

pub use crate::config::{ConfigError, InstrumentManifest, ResolverConfig};
pub use crate::instruments::{InstrumentError, InstrumentResolver, PitchRange, DEFAULT_SOUNDFONT};
pub use crate::notes::{normalize_note, NoteError, NoteName, SampleNote};
pub use crate::verify::{verify_assets, Issue, Severity, VerificationReport};
