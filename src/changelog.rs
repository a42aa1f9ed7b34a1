//! Changelog maintenance.
//!
//! The changelog is a Markdown document whose version sections start with a
//! `## <version> - <date>` heading, newest first. Recording a release
//! prepends the new heading and extracts whatever free-form text sat above
//! the previous version heading. That text is the author's unreleased notes
//! and becomes the release body.

use crate::error::{ChangelogError, Result};
use chrono::NaiveDate;
use regex::Regex;
use semver::Version;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Line that starts a prior version section.
fn heading_pattern() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"(?m)^## [0-9]+").expect("valid heading pattern"))
}

/// A changelog file at a configured path.
#[derive(Debug, Clone)]
pub struct Changelog {
    path: PathBuf,
}

impl Changelog {
    /// Bind to the changelog at `path`. The file must exist; an empty file
    /// is valid.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the changelog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a release: prepend a `## {version} - {date}` heading and
    /// return the notes that sat above the previous version heading.
    ///
    /// If no previous heading exists the notes are empty rather than the
    /// whole document, so history is never duplicated into a release body.
    /// Read and write failures are fatal; a partially written changelog is
    /// not rolled back.
    pub fn record_release(&self, version: &Version, date: NaiveDate) -> Result<String> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| ChangelogError::ReadFailed {
                path: self.path.clone(),
                source: e,
            })?;

        let heading = format!("## {} - {}\n\n", version, date.format("%Y-%m-%d"));

        let notes = if contents.is_empty() {
            String::new()
        } else {
            match heading_pattern().find(&contents) {
                Some(m) => contents[..m.start()].to_string(),
                None => String::new(),
            }
        };

        std::fs::write(&self.path, format!("{heading}{contents}")).map_err(|e| {
            ChangelogError::WriteFailed {
                path: self.path.clone(),
                source: e,
            }
        })?;

        Ok(notes)
    }
}
