//! GitHub repository client for release operations.
//!
//! The orchestrator talks to the hosting service through the [`ReleaseHost`]
//! trait; [`GitHubClient`] is the production implementation over the GitHub
//! REST API. Tests substitute their own host.

mod client;
mod types;

pub use client::GitHubClient;
pub use types::{Credentials, ReleaseDescriptor, RemoteRelease};

use crate::error::Result;
use std::future::Future;

/// Release operations a hosting service must provide.
///
/// All three operations are fallible at the transport/auth layer only;
/// "release does not exist" is a value, not an error.
pub trait ReleaseHost {
    /// Find a release by its display name under the bound repository.
    fn find_release_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<RemoteRelease>>>;

    /// Create a new release.
    fn create_release(
        &self,
        descriptor: &ReleaseDescriptor,
    ) -> impl Future<Output = Result<RemoteRelease>>;

    /// Update an existing release's metadata and body.
    fn update_release(
        &self,
        existing: &RemoteRelease,
        descriptor: &ReleaseDescriptor,
    ) -> impl Future<Output = Result<RemoteRelease>>;
}
