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

use std::collections::BTreeMap;
use std::fmt;
use std::fs;

use crate::instruments::{InstrumentError, InstrumentResolver, DIRECTORY_SUFFIX};
use crate::notes::SampleNote;
use crate::util::filename_display;

/// Severity level for a verification issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single verification issue found during checking.
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: Severity,
    pub category: &'static str,
    pub instrument: String,
    pub message: String,
}

/// Result of verifying an asset tree.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub issues: Vec<Issue>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: VerificationReport) {
        self.issues.extend(other.issues);
    }
}

/// Groups issues by instrument name.
impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "\u{2705} All instruments passed verification.");
        }

        let mut by_instrument: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
        for issue in &self.issues {
            by_instrument
                .entry(&issue.instrument)
                .or_default()
                .push(issue);
        }

        for (instrument, issues) in &by_instrument {
            let has_errors = issues.iter().any(|i| i.severity == Severity::Error);
            let icon = if has_errors {
                "\u{274c}"
            } else {
                "\u{26a0}\u{fe0f} "
            };
            writeln!(f, "{} {}", icon, instrument)?;
            for issue in issues {
                let severity_icon = match issue.severity {
                    Severity::Warning => "\u{26a0}\u{fe0f} ",
                    Severity::Error => "\u{274c}",
                };
                writeln!(
                    f,
                    "   {} [{}] {}",
                    severity_icon, issue.category, issue.message
                )?;
            }
        }

        writeln!(
            f,
            "\nSummary: {} issue(s) found across {} instrument(s).",
            self.issues.len(),
            by_instrument.len()
        )
    }
}

/// Checks one listed instrument's sample directory.
pub fn check_instrument(resolver: &InstrumentResolver, name: &str) -> Vec<Issue> {
    let issue = |severity: Severity, category: &'static str, message: String| Issue {
        severity,
        category,
        instrument: name.to_string(),
        message,
    };

    let files = match resolver.instrument_files(name) {
        Ok(files) => files,
        Err(e @ InstrumentError::DirectoryNotFound { .. }) => {
            return vec![issue(Severity::Error, "missing-directory", e.to_string())];
        }
        Err(e @ InstrumentError::UnknownInstrument { .. }) => {
            return vec![issue(Severity::Error, "unknown-instrument", e.to_string())];
        }
    };

    if files.is_empty() {
        return vec![issue(
            Severity::Warning,
            "no-samples",
            "directory contains no samples".to_string(),
        )];
    }

    files
        .iter()
        .filter_map(|file| {
            let file_name = filename_display(file);
            SampleNote::from_file_name(file_name).err().map(|e| {
                issue(
                    Severity::Warning,
                    "unparseable-sample",
                    format!("sample \"{}\" is not named by note: {}", file_name, e),
                )
            })
        })
        .collect()
}

/// Finds sample directories in the soundfont directory that the manifest does not list.
/// A missing soundfont directory yields no issues.
pub fn check_unlisted_directories(resolver: &InstrumentResolver) -> Vec<Issue> {
    let Ok(entries) = fs::read_dir(resolver.soundfont_dir()) else {
        return Vec::new();
    };

    let mut unlisted: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            filename_display(&path)
                .strip_suffix(DIRECTORY_SUFFIX)
                .map(str::to_string)
        })
        .filter(|instrument| !resolver.manifest().contains(instrument))
        .collect();
    unlisted.sort();

    unlisted
        .into_iter()
        .map(|instrument| Issue {
            severity: Severity::Warning,
            category: "unlisted-directory",
            message: format!(
                "directory \"{}{}\" is not listed in the manifest",
                instrument, DIRECTORY_SUFFIX
            ),
            instrument,
        })
        .collect()
}

/// Verifies every listed instrument and looks for unlisted sample directories.
pub fn verify_assets(resolver: &InstrumentResolver) -> VerificationReport {
    let mut report = VerificationReport::default();
    for name in resolver.instrument_names() {
        report.issues.extend(check_instrument(resolver, name));
    }
    report.issues.extend(check_unlisted_directories(resolver));
    report
}
