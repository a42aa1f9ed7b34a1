//! Error types for herald release operations.
//!
//! All fatal errors bubble up to the top-level CLI through [`ReleaseError`];
//! the only best-effort step (git revision capture) logs its failure instead
//! of raising.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for herald operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all herald operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// CLI argument and configuration errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Version parsing and manifest update errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Changelog read/write errors
    #[error("Changelog error: {0}")]
    Changelog(#[from] ChangelogError),

    /// GitHub API errors
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// No GitHub credentials could be resolved
    #[error("GitHub token not provided. Set GITHUB_TOKEN or GH_TOKEN, or pass --github-token.")]
    MissingCredentials,
}

/// Version management errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Version string did not parse as a semantic version
    #[error("Failed to parse version '{version}': {source}")]
    ParseFailed {
        /// Version string
        version: String,
        /// Parsing error
        #[source]
        source: semver::Error,
    },

    /// Manifest has no version field
    #[error("Manifest {path} has no 'version' field")]
    MissingVersion {
        /// Path to the manifest
        path: PathBuf,
    },

    /// Failed to read or write a manifest
    #[error("Failed to update manifest at {path}: {reason}")]
    ManifestUpdateFailed {
        /// Path to the manifest
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

/// Changelog errors
///
/// Both variants are fatal: a partially written changelog is considered
/// unrecoverable for that run and no rollback is attempted.
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// Changelog could not be read
    #[error("Failed to read changelog at {path}: {source}")]
    ReadFailed {
        /// Path to the changelog
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Changelog could not be written
    #[error("Failed to write changelog at {path}: {source}")]
    WriteFailed {
        /// Path to the changelog
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// GitHub API errors
#[derive(Error, Debug)]
pub enum GitHubError {
    /// Credentials were rejected (401/403)
    #[error("GitHub authentication failed (HTTP {status}): {message}")]
    Auth {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Target resource does not exist (404)
    #[error("GitHub resource not found: {message}")]
    NotFound {
        /// Response body
        message: String,
    },

    /// The release conflicts with existing state (409/422)
    #[error("GitHub release conflict: {message}")]
    Conflict {
        /// Response body
        message: String,
    },

    /// Network failure, timeout, or unexpected status
    #[error("GitHub transport error: {message}")]
    Transport {
        /// Failure description
        message: String,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("request timed out: {error}")
        } else {
            error.to_string()
        };
        GitHubError::Transport { message }
    }
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Cli(CliError::MissingCredentials) => vec![
                "Export a token: export GITHUB_TOKEN=<personal access token>".to_string(),
                "Or pass it explicitly: --github-token <token>".to_string(),
            ],
            ReleaseError::GitHub(GitHubError::Auth { .. }) => vec![
                "Verify the token is valid and has not expired".to_string(),
                "The token needs 'repo' scope to manage releases".to_string(),
            ],
            ReleaseError::GitHub(GitHubError::Transport { .. }) => vec![
                "Check network connectivity to api.github.com".to_string(),
                "Transient failure: re-running the release is safe, it updates in place"
                    .to_string(),
            ],
            ReleaseError::GitHub(GitHubError::Conflict { .. }) => vec![
                "A release for this tag or name appeared since the lookup".to_string(),
                "Re-run the release to pick up the existing release and update it".to_string(),
            ],
            ReleaseError::Version(VersionError::MissingVersion { path }) => {
                vec![format!("Add a \"version\" field to {}", path.display())]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_has_suggestions() {
        let err = ReleaseError::Cli(CliError::MissingCredentials);
        assert!(!err.recovery_suggestions().is_empty());
    }

    #[test]
    fn github_errors_render_status() {
        let err = GitHubError::Auth {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert!(err.to_string().contains("401"));
    }
}
