//! GitHub release resolution
//!
//! Looks up the latest release of `{owner}/{name}` through the GitHub REST
//! API and returns its source tarball URL. One request per project, no
//! retries: any failure is fatal to the run.

use std::time::Duration;

use serde::Deserialize;

use crate::config::{defaults, urls};
use crate::core::project::Project;
use crate::core::resolver::ArtifactResolver;
use crate::error::ResolveError;

/// The part of the "latest release" payload we care about
#[derive(Debug, Deserialize)]
struct LatestRelease {
    #[serde(default)]
    tarball_url: Option<String>,
}

/// Resolver backed by the GitHub releases API
#[derive(Debug, Clone)]
pub struct GithubResolver {
    /// HTTP client
    client: reqwest::Client,
    /// API base URL
    api_url: String,
    /// Bearer token attached to every request
    token: Option<String>,
}

impl GithubResolver {
    /// Create a resolver against a custom API base URL, picking up `GITHUB_TOKEN`
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let token = std::env::var(urls::GITHUB_TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty());
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(defaults::HTTP_TIMEOUT_SECS))
                .connect_timeout(Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS))
                .user_agent(format!("stagegen/{}", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            api_url: api_url.into(),
            token,
        }
    }

    /// Replace the bearer token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Whether requests are authenticated
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl ArtifactResolver for GithubResolver {
    async fn resolve(&self, project: &Project) -> Result<String, ResolveError> {
        let owner = project
            .owner
            .as_deref()
            .ok_or_else(|| ResolveError::MissingOwner {
                project: project.name.clone(),
            })?;
        let url = urls::latest_release(&self.api_url, owner, &project.name);
        tracing::debug!("Fetching latest release of {owner}/{}", project.name);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ResolveError::NetworkError {
                url: url.clone(),
                error: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::HttpStatus {
                project: project.name.clone(),
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::NetworkError {
                url: url.clone(),
                error: e.to_string(),
            })?;
        let release: LatestRelease =
            serde_json::from_str(&body).map_err(|e| ResolveError::MalformedResponse {
                url: url.clone(),
                error: e.to_string(),
            })?;

        release.tarball_url.ok_or_else(|| ResolveError::MissingTarball {
            owner: owner.to_string(),
            project: project.name.clone(),
        })
    }
}
