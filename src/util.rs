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

use std::ffi::OsStr;
use std::path::Path;

use crate::notes::SAMPLE_EXTENSION;

/// Extracts a displayable file name from a path, returning a fallback if the name is unreadable.
pub fn filename_display(path: &Path) -> &str {
    path.file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("unreadable file name")
}

/// Returns true if the file name carries the sample extension. Unreadable names never match.
pub fn is_sample_file_name(file_name: &OsStr) -> bool {
    file_name
        .to_str()
        .is_some_and(|name| name.ends_with(SAMPLE_EXTENSION))
}

#[cfg(test)]
mod test {
    use std::ffi::OsStr;
    use std::path::Path;

    use crate::util::{filename_display, is_sample_file_name};

    #[test]
    fn test_filename_display() {
        assert_eq!("C4.mp3", filename_display(Path::new("/srv/violin-mp3/C4.mp3")));
        assert_eq!("unreadable file name", filename_display(Path::new("/")));
    }

    #[test]
    fn test_is_sample_file_name() {
        assert!(is_sample_file_name(OsStr::new("C4.mp3")));
        assert!(is_sample_file_name(OsStr::new(".mp3")));
        assert!(!is_sample_file_name(OsStr::new("C4.MP3")));
        assert!(!is_sample_file_name(OsStr::new("C4.mp3.bak")));
        assert!(!is_sample_file_name(OsStr::new("names.json")));
    }
}
