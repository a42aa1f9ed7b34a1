//! End-to-end release flow.
//!
//! Sequence: load and bump manifests, record the changelog, capture the git
//! revision, then hand a release plan to the orchestrator. Every step feeds
//! the next through typed values; the only shared state is the
//! [`BuildContext`] built here and passed down by reference.

use crate::changelog::Changelog;
use crate::cli::{Args, Command, OutputManager};
use crate::error::{CliError, Result};
use crate::git;
use crate::github::{Credentials, GitHubClient};
use crate::manifest::Manifest;
use crate::release::{BuildContext, ReleaseOrchestrator, ReleasePlan};
use crate::version::ReleaseNames;

/// Run the `release` command.
pub async fn execute_release(args: &Args, output: &OutputManager) -> Result<i32> {
    let Command::Release {
        bump,
        repo,
        changelog,
        manifests,
        project_root,
        github_token,
        github_username,
        publish,
    } = &args.command;

    let (owner, repo_name) = parse_repo(repo)?;
    let token = github_token
        .clone()
        .or_else(|| std::env::var("GH_TOKEN").ok())
        .ok_or(CliError::MissingCredentials)?;

    // Bump every configured manifest; the first is authoritative for the
    // current version
    let mut loaded = Vec::with_capacity(manifests.len());
    for path in manifests {
        loaded.push(Manifest::load(path)?);
    }
    let Some(first) = loaded.first() else {
        return Err(CliError::InvalidArguments {
            reason: "at least one --manifest is required".to_string(),
        }
        .into());
    };

    let current = first.version()?;
    let next = bump.apply(&current);
    output.progress(&format!("Bumping version: {current} -> {next}"));
    for manifest in &mut loaded {
        manifest.set_version(&next);
        manifest.save()?;
        output.indent(&manifest.path().display().to_string());
    }
    output.success(&format!("Version bumped to {next}"));

    // Changelog heading + notes extraction; failures here stop the release
    let today = chrono::Local::now().date_naive();
    let notes = Changelog::new(changelog.clone()).record_release(&next, today)?;
    output.success("Changelog updated, release notes extracted");

    // Best-effort provenance
    let context = BuildContext {
        revision: git::capture_revision(project_root).await,
    };
    match &context.revision {
        Some(revision) => output.progress(&format!("Git revision: {revision}")),
        None => output.warn("Git revision unavailable; release will not carry provenance"),
    }

    let names = ReleaseNames::from_version(&next);
    let release_name = names.release_name.clone();

    let progress_output = output.clone();
    let client = GitHubClient::new(owner, repo_name, Credentials {
        username: github_username.clone(),
        token,
    })?
    .with_progress(move |line| progress_output.indent(line));

    output.progress(&format!(
        "Searching for existing GitHub release: {release_name}"
    ));
    let plan = ReleasePlan {
        names,
        notes,
        draft: !publish,
    };
    let outcome = ReleaseOrchestrator::new(client).run(plan, &context).await?;

    output.success(&format!(
        "GitHub release {release_name} {} successfully",
        outcome.verb()
    ));
    if !outcome.release().html_url.is_empty() {
        output.indent(&outcome.release().html_url);
    }

    Ok(0)
}

/// Split an `OWNER/NAME` repository argument.
fn parse_repo(repo: &str) -> Result<(String, String)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(CliError::InvalidArguments {
            reason: format!("--repo must be OWNER/NAME, got '{repo}'"),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_repo_splits_owner_and_name() {
        let (owner, name) = parse_repo("GoogleChrome/accessibility-developer-tools").unwrap();
        assert_eq!(owner, "GoogleChrome");
        assert_eq!(name, "accessibility-developer-tools");
    }

    #[test]
    fn parse_repo_rejects_malformed_input() {
        assert!(parse_repo("no-slash").is_err());
        assert!(parse_repo("/name").is_err());
        assert!(parse_repo("owner/").is_err());
        assert!(parse_repo("a/b/c").is_err());
    }
}
