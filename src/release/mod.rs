//! Release orchestration.
//!
//! One orchestrator run drives the publish end to end: resolve the release
//! descriptor, look the release name up on the host, then create or update
//! it, never both. Release names are unique per repository, so the branch
//! is decided by the lookup and nothing else.

use crate::error::{ReleaseError, Result};
use crate::github::{ReleaseDescriptor, ReleaseHost, RemoteRelease};
use crate::version::ReleaseNames;

/// Metadata captured once per build invocation and passed by reference to
/// the steps that need it.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    /// Current commit hash, when revision capture succeeded
    pub revision: Option<String>,
}

/// Inputs for one release attempt.
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    /// Tag and display names for the release
    pub names: ReleaseNames,
    /// Notes extracted from the changelog
    pub notes: String,
    /// Whether the release is created as a draft
    pub draft: bool,
}

/// How the release landed on the host.
#[derive(Debug, Clone)]
pub enum ReleaseOutcome {
    /// No release with this name existed; one was created
    Created(RemoteRelease),
    /// A release with this name existed; its body was extended
    Updated(RemoteRelease),
}

impl ReleaseOutcome {
    /// The release as the host reported it back.
    pub fn release(&self) -> &RemoteRelease {
        match self {
            ReleaseOutcome::Created(release) | ReleaseOutcome::Updated(release) => release,
        }
    }

    /// Past-tense verb for reporting.
    pub fn verb(&self) -> &'static str {
        match self {
            ReleaseOutcome::Created(_) => "created",
            ReleaseOutcome::Updated(_) => "updated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Resolving,
    LookingUp,
    Creating,
    Updating,
    Done,
    Failed,
}

/// Sequences one release attempt against a [`ReleaseHost`].
///
/// `run` consumes the orchestrator: terminal states end it and a fresh
/// instance is required per attempt.
pub struct ReleaseOrchestrator<H: ReleaseHost> {
    host: H,
    phase: Phase,
}

impl<H: ReleaseHost> ReleaseOrchestrator<H> {
    /// Create an orchestrator bound to a host.
    pub fn new(host: H) -> Self {
        Self {
            host,
            phase: Phase::Idle,
        }
    }

    /// Run the release to completion.
    ///
    /// Any host error is terminal for the whole release; nothing after the
    /// failing call executes.
    pub async fn run(
        mut self,
        plan: ReleasePlan,
        context: &BuildContext,
    ) -> Result<ReleaseOutcome> {
        self.phase = Phase::Resolving;
        let mut descriptor = ReleaseDescriptor {
            tag_name: plan.names.tag_name.clone(),
            name: plan.names.release_name.clone(),
            body: plan.notes,
            draft: plan.draft,
            target_commitish: context.revision.clone(),
        };

        self.phase = Phase::LookingUp;
        log::info!("searching for existing release: {}", descriptor.name);
        let lookup = self.host.find_release_by_name(&descriptor.name).await;
        let existing = match lookup {
            Ok(existing) => existing,
            Err(error) => return Err(self.fail(error)),
        };

        let outcome = match existing {
            Some(existing) => {
                self.phase = Phase::Updating;
                // Append, not replace: notes added by hand on the existing
                // draft survive the update
                descriptor.body = format!(
                    "{}\n{}",
                    descriptor.body,
                    existing.body.as_deref().unwrap_or_default()
                );
                log::info!("updating release {} (id {})", descriptor.name, existing.id);
                let updated = self.host.update_release(&existing, &descriptor).await;
                match updated {
                    Ok(release) => ReleaseOutcome::Updated(release),
                    Err(error) => return Err(self.fail(error)),
                }
            }
            None => {
                self.phase = Phase::Creating;
                log::info!("creating release {}", descriptor.name);
                let created = self.host.create_release(&descriptor).await;
                match created {
                    Ok(release) => ReleaseOutcome::Created(release),
                    Err(error) => return Err(self.fail(error)),
                }
            }
        };

        self.phase = Phase::Done;
        Ok(outcome)
    }

    fn fail(&mut self, error: ReleaseError) -> ReleaseError {
        log::error!("release failed during {:?}: {error}", self.phase);
        self.phase = Phase::Failed;
        error
    }
}
