//! Wire types for the GitHub release API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload describing a release to create or update.
///
/// Field names match the GitHub REST API, so the descriptor serializes
/// directly as the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDescriptor {
    /// Git tag the release points at (prerelease suffix retained)
    pub tag_name: String,
    /// Display name of the release (prerelease suffix stripped)
    pub name: String,
    /// Release notes body
    pub body: String,
    /// Whether the release is created as a draft
    pub draft: bool,
    /// Commit the tag should point at when it does not exist yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
}

/// A release resource that exists on GitHub.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteRelease {
    /// Release ID, used for updates
    pub id: u64,
    /// Tag the release points at
    pub tag_name: String,
    /// Display name; GitHub allows null here
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes body; null for releases created without one
    #[serde(default)]
    pub body: Option<String>,
    /// Whether the release is still a draft
    #[serde(default)]
    pub draft: bool,
    /// Browser URL of the release
    #[serde(default)]
    pub html_url: String,
}

/// Resolved GitHub credentials.
///
/// With a username the client sends HTTP basic auth (username + token as
/// password); with a token alone it sends a bearer token.
#[derive(Clone)]
pub struct Credentials {
    /// Account username, for basic auth
    pub username: Option<String>,
    /// Personal access token (or password)
    pub token: String,
}

impl fmt::Debug for Credentials {
    // The token must never reach logs or error output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_serializes_github_field_names() {
        let descriptor = ReleaseDescriptor {
            tag_name: "v2.0.0-rc.1".to_string(),
            name: "v2.0.0".to_string(),
            body: "notes".to_string(),
            draft: true,
            target_commitish: None,
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["tag_name"], "v2.0.0-rc.1");
        assert_eq!(value["name"], "v2.0.0");
        assert_eq!(value["draft"], true);
        // Absent commitish is omitted entirely, not sent as null
        assert!(value.get("target_commitish").is_none());
    }

    #[test]
    fn descriptor_includes_commitish_when_present() {
        let descriptor = ReleaseDescriptor {
            tag_name: "v1.0.0".to_string(),
            name: "v1.0.0".to_string(),
            body: String::new(),
            draft: true,
            target_commitish: Some("abc123".to_string()),
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["target_commitish"], "abc123");
    }

    #[test]
    fn remote_release_tolerates_null_name_and_body() {
        let release: RemoteRelease = serde_json::from_str(
            r#"{"id": 7, "tag_name": "v1.0.0", "name": null, "body": null}"#,
        )
        .unwrap();

        assert_eq!(release.id, 7);
        assert_eq!(release.name, None);
        assert_eq!(release.body, None);
        assert!(!release.draft);
    }

    #[test]
    fn credentials_debug_redacts_token() {
        let credentials = Credentials {
            username: Some("octocat".to_string()),
            token: "ghp_secret".to_string(),
        };

        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("octocat"));
    }
}
