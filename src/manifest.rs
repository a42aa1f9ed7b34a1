//! JSON manifest access.
//!
//! A manifest (`package.json`, `bower.json`) must carry a string `version`
//! field. The first configured manifest is authoritative for the current
//! version; every configured manifest receives the bumped version so the
//! copies never drift.

use crate::error::{Result, VersionError};
use semver::Version;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// One JSON manifest file, held in memory between load and save.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Value,
}

impl Manifest {
    /// Load a manifest and verify it carries a string `version` field.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| VersionError::ManifestUpdateFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to read file: {e}"),
            })?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| VersionError::ManifestUpdateFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to parse JSON: {e}"),
            })?;

        if !document.get("version").map(Value::is_string).unwrap_or(false) {
            return Err(VersionError::MissingVersion {
                path: path.to_path_buf(),
            }
            .into());
        }

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Path this manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Package name, when the manifest declares one.
    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// Current semantic version.
    pub fn version(&self) -> Result<Version> {
        let raw = self
            .document
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| VersionError::MissingVersion {
                path: self.path.clone(),
            })?;

        Version::parse(raw).map_err(|e| {
            VersionError::ParseFailed {
                version: raw.to_string(),
                source: e,
            }
            .into()
        })
    }

    /// Replace the `version` field in memory.
    pub fn set_version(&mut self, version: &Version) {
        self.document["version"] = Value::String(version.to_string());
    }

    /// Write the manifest back, pretty-printed with a trailing newline.
    pub fn save(&self) -> Result<()> {
        let mut rendered = serde_json::to_string_pretty(&self.document)?;
        rendered.push('\n');

        std::fs::write(&self.path, rendered).map_err(|e| {
            VersionError::ManifestUpdateFailed {
                path: self.path.clone(),
                reason: format!("Failed to write file: {e}"),
            }
            .into()
        })
    }
}
