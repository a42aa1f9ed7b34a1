//! Version naming for releases.
//!
//! Derives the git tag and the public release name from a manifest version.
//! The tag keeps any prerelease suffix; the release name strips an `-rc.N`
//! suffix so that successive release candidates all land on the same draft
//! release.

mod bumper;

pub use bumper::VersionBump;

use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

/// Tag and display names derived from a manifest version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNames {
    /// Git tag for the release, prerelease suffix retained (e.g. `v2.0.0-rc.1`)
    pub tag_name: String,
    /// Public release name, any `-rc.N` suffix stripped (e.g. `v2.0.0`)
    pub release_name: String,
}

impl ReleaseNames {
    /// Derive names from a semantic version.
    ///
    /// Only `rc` prereleases are recognized; any other prerelease suffix
    /// passes through into the release name unchanged, since the bump
    /// workflow never produces one.
    pub fn from_version(version: &Version) -> Self {
        static RC_SUFFIX: OnceLock<Regex> = OnceLock::new();
        let rc = RC_SUFFIX.get_or_init(|| Regex::new(r"-rc\.[0-9]+").expect("valid rc pattern"));

        let tag_name = format!("v{version}");
        let release_name = rc.replace(&tag_name, "").into_owned();

        Self {
            tag_name,
            release_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &str) -> ReleaseNames {
        ReleaseNames::from_version(&Version::parse(v).unwrap())
    }

    #[test]
    fn plain_version_keeps_name_and_tag_equal() {
        let n = names("1.2.0");
        assert_eq!(n.tag_name, "v1.2.0");
        assert_eq!(n.release_name, "v1.2.0");
    }

    #[test]
    fn rc_suffix_is_stripped_from_release_name_only() {
        let n = names("2.0.0-rc.1");
        assert_eq!(n.tag_name, "v2.0.0-rc.1");
        assert_eq!(n.release_name, "v2.0.0");
    }

    #[test]
    fn multi_digit_rc_suffix_is_stripped() {
        let n = names("0.9.3-rc.12");
        assert_eq!(n.release_name, "v0.9.3");
    }

    #[test]
    fn unrecognized_prerelease_suffix_passes_through() {
        let n = names("1.0.0-beta.1");
        assert_eq!(n.tag_name, "v1.0.0-beta.1");
        assert_eq!(n.release_name, "v1.0.0-beta.1");
    }
}
