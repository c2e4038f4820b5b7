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

//! Filesystem fixtures for asset tree tests.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::instruments::directory_name;

/// Creates an instrument sample directory under `<assets_dir>/<soundfont>` holding empty
/// files with the given names, and returns the directory.
pub fn create_instrument(
    assets_dir: &Path,
    soundfont: &str,
    instrument: &str,
    files: &[&str],
) -> Result<PathBuf, Box<dyn Error>> {
    let dir = assets_dir.join(soundfont).join(directory_name(instrument));
    fs::create_dir_all(&dir)?;

    for file in files {
        fs::write(dir.join(file), b"")?;
    }

    Ok(dir)
}

/// Writes a JSON manifest listing the given instruments.
pub fn write_manifest(path: &Path, instruments: &[&str]) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(instruments)?)?;
    Ok(())
}
