//! Best-effort git queries.
//!
//! Release provenance only: the one git operation herald performs is reading
//! the current commit hash. Tagging and pushing belong to the surrounding
//! workflow, not to this tool.

use std::path::Path;

/// Capture the current commit hash of the repository at `repo_root`.
///
/// Best-effort: spawn failures and non-zero exits are logged and yield
/// `None`. Callers carry the absence explicitly and must tolerate it; a
/// release without provenance is still a release.
pub async fn capture_revision(repo_root: &Path) -> Option<String> {
    let output = match tokio::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(repo_root)
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            log::warn!("failed to spawn git rev-parse: {e}");
            return None;
        }
    };

    if !output.status.success() {
        log::warn!(
            "git rev-parse HEAD failed ({}): {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if revision.is_empty() {
        log::warn!("git rev-parse HEAD produced no output");
        return None;
    }

    Some(revision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_repository_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(capture_revision(dir.path()).await, None);
    }

    #[tokio::test]
    async fn missing_directory_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert_eq!(capture_revision(&gone).await, None);
    }
}
