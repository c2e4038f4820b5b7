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

//! Note identifiers as they appear in sample file names.
//!
//! Samples are named with flat-style note names and an octave, e.g. `Ab3.mp3`.

use std::fmt;
use std::str::FromStr;

/// The sample file extension, including the leading dot.
pub const SAMPLE_EXTENSION: &str = ".mp3";

/// Rewrites a note identifier into the token used by sample file names.
///
/// Every `#` becomes `b`. This is a literal substitution rather than an enharmonic
/// conversion, so `A#3` becomes `Ab3`.
pub fn normalize_note(note: &str) -> String {
    note.replace('#', "b")
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("Empty note name")]
    Empty,

    #[error("Invalid note name: {0}")]
    InvalidNoteName(String),

    #[error("Invalid octave: {0}")]
    InvalidOctave(String),
}

/// One of the twelve note names used by sample files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoteName {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl NoteName {
    const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::Db,
        NoteName::D,
        NoteName::Eb,
        NoteName::E,
        NoteName::F,
        NoteName::Gb,
        NoteName::G,
        NoteName::Ab,
        NoteName::A,
        NoteName::Bb,
        NoteName::B,
    ];

    /// Semitones above C.
    pub fn semitone(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Db => "Db",
            NoteName::D => "D",
            NoteName::Eb => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Gb => "Gb",
            NoteName::G => "G",
            NoteName::Ab => "Ab",
            NoteName::A => "A",
            NoteName::Bb => "Bb",
            NoteName::B => "B",
        }
    }
}

impl FromStr for NoteName {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| NoteError::InvalidNoteName(s.to_string()))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note parsed from a sample file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleNote {
    name: NoteName,
    octave: i32,
}

impl SampleNote {
    /// Creates a note. Fails if the octave puts the pitch outside the `i32` range.
    pub fn new(name: NoteName, octave: i32) -> Result<SampleNote, NoteError> {
        match checked_pitch(name, octave) {
            Some(_) => Ok(SampleNote { name, octave }),
            None => Err(NoteError::InvalidOctave(octave.to_string())),
        }
    }

    /// Parses a sample file name such as `Ab3.mp3` or `C-1.mp3`. The extension is optional.
    pub fn from_file_name(file_name: &str) -> Result<SampleNote, NoteError> {
        file_name
            .strip_suffix(SAMPLE_EXTENSION)
            .unwrap_or(file_name)
            .parse()
    }

    pub fn name(&self) -> NoteName {
        self.name
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// The MIDI pitch of this note. C4 is 60.
    pub fn pitch(&self) -> i32 {
        // Construction rejects octaves whose pitch overflows.
        (self.octave + 1) * 12 + self.name.semitone()
    }
}

impl FromStr for SampleNote {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.char_indices();
        let (_, letter) = chars.next().ok_or(NoteError::Empty)?;

        // A 'b' in second position marks a flat, otherwise the name is one letter.
        let split = match chars.next() {
            Some((index, 'b')) => index + 'b'.len_utf8(),
            Some((index, _)) => index,
            None => letter.len_utf8(),
        };
        let (name, octave) = s.split_at(split);

        let name = name.parse::<NoteName>()?;
        let octave = octave
            .parse::<i32>()
            .map_err(|_| NoteError::InvalidOctave(octave.to_string()))?;

        SampleNote::new(name, octave)
    }
}

/// `(octave + 1) * 12 + semitone`, or None on overflow.
fn checked_pitch(name: NoteName, octave: i32) -> Option<i32> {
    octave
        .checked_add(1)?
        .checked_mul(12)?
        .checked_add(name.semitone())
}

impl fmt::Display for SampleNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

#[cfg(test)]
mod test {
    use super::{normalize_note, NoteError, NoteName, SampleNote};

    #[test]
    fn normalize() {
        assert_eq!(normalize_note("A#3"), "Ab3");
        assert_eq!(normalize_note("Bb3"), "Bb3");
        assert_eq!(normalize_note("C4"), "C4");
        assert_eq!(normalize_note("B#3"), "Bb3");
        assert_eq!(normalize_note("C##4"), "Cbb4");
    }

    #[test]
    fn parse_file_names() -> Result<(), NoteError> {
        let a0 = SampleNote::from_file_name("A0.mp3")?;
        assert_eq!(a0, SampleNote::new(NoteName::A, 0)?);
        assert_eq!(a0.pitch(), 21);

        assert_eq!(SampleNote::from_file_name("C4.mp3")?.pitch(), 60);
        assert_eq!(SampleNote::from_file_name("Bb3.mp3")?.pitch(), 58);
        assert_eq!(SampleNote::from_file_name("C8")?.pitch(), 108);
        assert_eq!(SampleNote::from_file_name("C-1.mp3")?.pitch(), 0);
        assert_eq!(SampleNote::from_file_name("Gb7.mp3")?.to_string(), "Gb7");
        Ok(())
    }

    #[test]
    fn parse_failures() {
        assert_eq!(SampleNote::from_file_name(".mp3"), Err(NoteError::Empty));
        assert_eq!(
            SampleNote::from_file_name("H2.mp3"),
            Err(NoteError::InvalidNoteName("H".into()))
        );
        assert_eq!(
            SampleNote::from_file_name("A.mp3"),
            Err(NoteError::InvalidOctave("".into()))
        );
        assert_eq!(
            SampleNote::from_file_name("Fb2.mp3"),
            Err(NoteError::InvalidNoteName("Fb".into()))
        );
        assert_eq!(
            SampleNote::from_file_name("A#3.mp3"),
            Err(NoteError::InvalidOctave("#3".into()))
        );
        assert_eq!(
            SampleNote::from_file_name("A3.wav"),
            Err(NoteError::InvalidOctave("3.wav".into()))
        );
    }

    #[test]
    fn octave_overflow() -> Result<(), NoteError> {
        assert_eq!(
            SampleNote::from_file_name("C200000000.mp3"),
            Err(NoteError::InvalidOctave("200000000".into()))
        );
        assert_eq!(
            SampleNote::from_file_name("C-2147483648.mp3"),
            Err(NoteError::InvalidOctave("-2147483648".into()))
        );
        assert_eq!(
            SampleNote::from_file_name("B2147483647.mp3"),
            Err(NoteError::InvalidOctave("2147483647".into()))
        );
        assert!(SampleNote::new(NoteName::B, i32::MAX / 12 - 1).is_err());

        let high = SampleNote::new(NoteName::C, 178956969)?;
        assert_eq!(high.pitch(), 2147483640);
        let low = SampleNote::from_file_name("C-178956970.mp3")?;
        assert_eq!(low.pitch(), -2147483628);
        Ok(())
    }

    #[test]
    fn note_names() {
        assert_eq!("Eb".parse::<NoteName>(), Ok(NoteName::Eb));
        assert_eq!(NoteName::Eb.semitone(), 3);
        assert_eq!(NoteName::B.semitone(), 11);
        assert!("D#".parse::<NoteName>().is_err());
    }
}
