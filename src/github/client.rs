//! GitHub REST client bound to one repository.

use super::{Credentials, ReleaseDescriptor, ReleaseHost, RemoteRelease};
use crate::error::{GitHubError, Result};
use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Every request is bounded; a hang surfaces as a transport error instead
/// of stalling the release.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const RELEASES_PER_PAGE: usize = 100;

type ProgressFn = dyn Fn(&str) + Send + Sync;

/// Minimal GitHub client scoped to a single `owner/repo`.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
    credentials: Credentials,
    progress: Option<Box<ProgressFn>>,
}

impl GitHubClient {
    /// Create a client for `owner/repo` with resolved credentials.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("herald/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GitHubError::from)?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            owner: owner.into(),
            repo: repo.into(),
            credentials,
            progress: None,
        })
    }

    /// Route request/response progress lines through `progress`.
    ///
    /// The client reports what it is doing without owning the output
    /// mechanism; the caller decides where the lines go.
    pub fn with_progress<F>(mut self, progress: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Override the API base URL (GitHub Enterprise, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn trace(&self, message: &str) {
        log::debug!("{message}");
        if let Some(progress) = &self.progress {
            progress(message);
        }
    }

    fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.base_url, self.owner, self.repo
        )
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(reqwest::header::ACCEPT, "application/vnd.github+json");
        match &self.credentials.username {
            Some(username) => request.basic_auth(username, Some(&self.credentials.token)),
            None => request.bearer_auth(&self.credentials.token),
        }
    }
}

impl ReleaseHost for GitHubClient {
    async fn find_release_by_name(&self, name: &str) -> Result<Option<RemoteRelease>> {
        let mut page = 1usize;
        loop {
            let url = format!(
                "{}?per_page={}&page={}",
                self.releases_url(),
                RELEASES_PER_PAGE,
                page
            );
            self.trace(&format!("GET {url}"));

            let response = self
                .authenticate(self.http.get(&url))
                .send()
                .await
                .map_err(GitHubError::from)?;
            if !response.status().is_success() {
                return Err(reject(response).await.into());
            }

            let releases: Vec<RemoteRelease> =
                response.json().await.map_err(GitHubError::from)?;
            self.trace(&format!("page {page}: {} release(s)", releases.len()));

            if let Some(found) = releases.iter().find(|r| r.name.as_deref() == Some(name)) {
                return Ok(Some(found.clone()));
            }
            if releases.len() < RELEASES_PER_PAGE {
                return Ok(None);
            }
            page += 1;
        }
    }

    async fn create_release(&self, descriptor: &ReleaseDescriptor) -> Result<RemoteRelease> {
        let url = self.releases_url();
        self.trace(&format!("POST {url} ({})", descriptor.name));

        let response = self
            .authenticate(self.http.post(&url))
            .json(descriptor)
            .send()
            .await
            .map_err(GitHubError::from)?;
        if !response.status().is_success() {
            return Err(reject(response).await.into());
        }

        let release: RemoteRelease = response.json().await.map_err(GitHubError::from)?;
        self.trace(&format!(
            "created release {} (id {})",
            descriptor.name, release.id
        ));
        Ok(release)
    }

    async fn update_release(
        &self,
        existing: &RemoteRelease,
        descriptor: &ReleaseDescriptor,
    ) -> Result<RemoteRelease> {
        let url = format!("{}/{}", self.releases_url(), existing.id);
        self.trace(&format!("PATCH {url} ({})", descriptor.name));

        let response = self
            .authenticate(self.http.patch(&url))
            .json(descriptor)
            .send()
            .await
            .map_err(GitHubError::from)?;
        if !response.status().is_success() {
            return Err(reject(response).await.into());
        }

        let release: RemoteRelease = response.json().await.map_err(GitHubError::from)?;
        self.trace(&format!(
            "updated release {} (id {})",
            descriptor.name, release.id
        ));
        Ok(release)
    }
}

/// Consume a non-success response into the error taxonomy.
async fn reject(response: Response) -> GitHubError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    classify(status, message)
}

fn classify(status: StatusCode, message: String) -> GitHubError {
    match status.as_u16() {
        401 | 403 => GitHubError::Auth {
            status: status.as_u16(),
            message,
        },
        404 => GitHubError::NotFound { message },
        409 | 422 => GitHubError::Conflict { message },
        _ => GitHubError::Transport {
            message: format!("HTTP {status}: {message}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_auth() {
        match classify(StatusCode::UNAUTHORIZED, "bad credentials".to_string()) {
            GitHubError::Auth { status: 401, .. } => {}
            other => panic!("expected Auth, got {other:?}"),
        }
        match classify(StatusCode::FORBIDDEN, String::new()) {
            GitHubError::Auth { status: 403, .. } => {}
            other => panic!("expected Auth, got {other:?}"),
        }
    }

    #[test]
    fn not_found_and_validation_map_to_their_classes() {
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, String::new()),
            GitHubError::NotFound { .. }
        ));
        assert!(matches!(
            classify(StatusCode::UNPROCESSABLE_ENTITY, String::new()),
            GitHubError::Conflict { .. }
        ));
        assert!(matches!(
            classify(StatusCode::CONFLICT, String::new()),
            GitHubError::Conflict { .. }
        ));
    }

    #[test]
    fn server_errors_map_to_transport() {
        match classify(StatusCode::BAD_GATEWAY, "oops".to_string()) {
            GitHubError::Transport { message } => assert!(message.contains("502")),
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[test]
    fn client_builds_with_bearer_credentials() {
        let client = GitHubClient::new(
            "GoogleChrome",
            "accessibility-developer-tools",
            Credentials {
                username: None,
                token: "token".to_string(),
            },
        )
        .unwrap();
        assert!(client.releases_url().ends_with(
            "/repos/GoogleChrome/accessibility-developer-tools/releases"
        ));
    }

    #[test]
    fn base_url_override_is_respected() {
        let client = GitHubClient::new(
            "owner",
            "repo",
            Credentials {
                username: Some("user".to_string()),
                token: "token".to_string(),
            },
        )
        .unwrap()
        .with_base_url("http://127.0.0.1:9999");
        assert_eq!(
            client.releases_url(),
            "http://127.0.0.1:9999/repos/owner/repo/releases"
        );
    }
}
