//! # herald
//!
//! Changelog-driven GitHub release publishing for JavaScript library
//! repositories.
//!
//! One `herald release <type>` invocation bumps the JSON manifest version,
//! prepends a dated heading to the changelog, extracts the unreleased notes
//! sitting above the previous heading, reads the current git commit for
//! provenance, and idempotently creates or updates a draft GitHub release
//! named after the bumped version.
//!
//! ## Features
//!
//! - **Idempotent publishing**: releases are looked up by name first; an
//!   existing release is updated in place, its body extended rather than
//!   replaced
//! - **node-semver bump semantics**: `prerelease` bumps drive an `rc.N`
//!   counter, release bumps finalize a pending candidate
//! - **Explicit provenance**: the captured git revision is optional and
//!   carried openly, never smuggled through global state
//!
//! ## Usage
//!
//! ```bash
//! herald release prerelease --repo owner/repo   # 1.2.3 -> 1.2.4-rc.0
//! herald release patch --repo owner/repo        # finalize or bump patch
//! herald release minor --repo owner/repo --publish
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod changelog;
pub mod cli;
pub mod error;
pub mod git;
pub mod github;
pub mod manifest;
pub mod release;
pub mod version;

// Re-export main types for public API
pub use changelog::Changelog;
pub use cli::Args;
pub use error::{ChangelogError, CliError, GitHubError, ReleaseError, Result, VersionError};
pub use github::{Credentials, GitHubClient, ReleaseDescriptor, ReleaseHost, RemoteRelease};
pub use manifest::Manifest;
pub use release::{BuildContext, ReleaseOrchestrator, ReleaseOutcome, ReleasePlan};
pub use version::{ReleaseNames, VersionBump};
