//! Command line argument parsing.

use crate::version::VersionBump;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Changelog-driven GitHub release publishing
#[derive(Parser, Debug)]
#[command(
    name = "herald",
    version,
    about = "Changelog-driven GitHub release publishing",
    long_about = "Bump the manifest version, record the changelog, and publish \
a GitHub release whose body is the notes sitting above the previous changelog \
heading.

Usage:
  herald release prerelease --repo GoogleChrome/accessibility-developer-tools
  herald release patch --repo owner/repo --manifest package.json --manifest bower.json"
)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output (errors still reach stderr)
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bump the version, record the changelog, and publish a GitHub release
    Release {
        /// Release type selecting the version-bump semantics
        #[arg(value_enum, value_name = "TYPE")]
        bump: VersionBump,

        /// GitHub repository as OWNER/NAME
        #[arg(long, value_name = "OWNER/NAME")]
        repo: String,

        /// Changelog file, version sections newest first
        #[arg(long, value_name = "PATH", default_value = "Changelog.md")]
        changelog: PathBuf,

        /// JSON manifest to bump; repeatable, the first is authoritative
        #[arg(long = "manifest", value_name = "PATH", default_value = "package.json")]
        manifests: Vec<PathBuf>,

        /// Project root the git revision is read from
        #[arg(long, value_name = "DIR", default_value = ".")]
        project_root: PathBuf,

        /// GitHub token; GH_TOKEN is consulted as a fallback
        #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
        github_token: Option<String>,

        /// GitHub username; with it the token is sent as a basic-auth password
        #[arg(long, value_name = "USER")]
        github_username: Option<String>,

        /// Publish immediately instead of creating a draft release
        #[arg(long)]
        publish: bool,
    },
}

impl Command {
    /// Command name for error reporting
    pub fn name(&self) -> &'static str {
        match self {
            Command::Release { .. } => "release",
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
