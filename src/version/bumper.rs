//! Semantic version bumping with `rc` prerelease support.
//!
//! Follows node-semver `inc` semantics: releasing a version that already
//! carries a prerelease finalizes it rather than skipping a number, and
//! `prerelease` bumps either increment an existing `rc.N` counter or open a
//! new `rc.0` on the next patch version.

use clap::ValueEnum;
use semver::{BuildMetadata, Prerelease, Version};

/// Release type selecting the version-bump semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VersionBump {
    /// Next release candidate (`1.2.3` → `1.2.4-rc.0`, `1.2.4-rc.0` → `1.2.4-rc.1`)
    Prerelease,
    /// Patch release (`1.2.3` → `1.2.4`, `1.2.4-rc.1` → `1.2.4`)
    Patch,
    /// Minor release (`1.2.3` → `1.3.0`)
    Minor,
    /// Major release (`1.2.3` → `2.0.0`)
    Major,
}

impl VersionBump {
    /// Compute the version that follows `current` for this release type.
    pub fn apply(&self, current: &Version) -> Version {
        let mut next = current.clone();
        next.build = BuildMetadata::EMPTY;

        match self {
            VersionBump::Major => {
                // 2.0.0-rc.1 finalizes to 2.0.0; anything else moves to the next major
                if !current.pre.is_empty() && current.minor == 0 && current.patch == 0 {
                    next.pre = Prerelease::EMPTY;
                } else {
                    next.major += 1;
                    next.minor = 0;
                    next.patch = 0;
                    next.pre = Prerelease::EMPTY;
                }
            }
            VersionBump::Minor => {
                if !current.pre.is_empty() && current.patch == 0 {
                    next.pre = Prerelease::EMPTY;
                } else {
                    next.minor += 1;
                    next.patch = 0;
                    next.pre = Prerelease::EMPTY;
                }
            }
            VersionBump::Patch => {
                if !current.pre.is_empty() {
                    next.pre = Prerelease::EMPTY;
                } else {
                    next.patch += 1;
                }
            }
            VersionBump::Prerelease => match rc_number(&current.pre) {
                Some(n) => next.pre = rc_prerelease(n + 1),
                None => {
                    if current.pre.is_empty() {
                        next.patch += 1;
                    }
                    next.pre = rc_prerelease(0);
                }
            },
        }

        next
    }
}

fn rc_prerelease(n: u64) -> Prerelease {
    Prerelease::new(&format!("rc.{n}")).expect("rc identifier is a valid prerelease")
}

fn rc_number(pre: &Prerelease) -> Option<u64> {
    pre.as_str().strip_prefix("rc.")?.parse().ok()
}
