//! CLI surface tests.
//!
//! These exercise the usage-error paths only; nothing here talks to the
//! network or mutates a repository.

use assert_cmd::Command;
use predicates::prelude::*;

fn herald() -> Command {
    let mut cmd = Command::cargo_bin("herald").unwrap();
    cmd.env_remove("GITHUB_TOKEN").env_remove("GH_TOKEN");
    cmd
}

#[test]
fn no_arguments_is_a_usage_error() {
    herald()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn release_without_type_is_a_usage_error() {
    herald()
        .args(["release", "--repo", "owner/repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<TYPE>"));
}

#[test]
fn release_without_repo_is_a_usage_error() {
    herald()
        .args(["release", "patch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--repo"));
}

#[test]
fn malformed_repo_is_rejected_before_any_side_effect() {
    let dir = tempfile::tempdir().unwrap();
    herald()
        .current_dir(dir.path())
        .args(["release", "patch", "--repo", "not-a-repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OWNER/NAME"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_token_fails_before_touching_files() {
    let dir = tempfile::tempdir().unwrap();
    herald()
        .current_dir(dir.path())
        .args(["release", "patch", "--repo", "owner/repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn help_lists_the_release_command() {
    herald()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("release"));
}
