//! Gateways for reading pull request state through Octocrab.
//!
//! This module provides trait-based gateways for communicating with the GitHub
//! API. The trait-based design enables mocking in tests while the Octocrab
//! implementations handle real HTTP requests.

use async_trait::async_trait;
use http::header::{ACCEPT, HeaderMap, HeaderValue};
use http::{StatusCode, Uri};
use octocrab::{Octocrab, Page};

use super::error::ValidatorError;
use super::locator::{PersonalAccessToken, PullRequestLocator};
use super::models::{ApiCommit, ApiPullRequest, CommitSummary, PullRequestContext};

/// Media type that makes the contents endpoint return the raw file body
/// instead of a base64 wrapper.
const RAW_CONTENT_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

/// Builds an Octocrab client for the given token and API base URL.
///
/// This helper consolidates the shared logic for parsing the base URI and
/// constructing an authenticated Octocrab client.
///
/// # Errors
///
/// Returns `ValidatorError::InvalidUrl` when the base URI cannot be parsed or
/// `ValidatorError::Api` when Octocrab fails to construct a client.
fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, ValidatorError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ValidatorError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| ValidatorError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}

/// Gateway that can load pull request metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch the pull request metadata.
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestContext, ValidatorError>;
}

/// Gateway that can read file contents from a repository branch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryContentGateway: Send + Sync {
    /// Fetch the raw contents of `path` at `reference`, or `None` when the
    /// file does not exist on that branch.
    async fn file_content(
        &self,
        locator: &PullRequestLocator,
        path: &str,
        reference: &str,
    ) -> Result<Option<String>, ValidatorError>;
}

/// Gateway that can list the commits on a pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitListGateway: Send + Sync {
    /// Fetch every commit on the pull request in order.
    async fn list_commits(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<CommitSummary>, ValidatorError>;
}

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and pull request locator.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::InvalidUrl` when the base URI cannot be parsed
    /// or `ValidatorError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &PullRequestLocator,
    ) -> Result<Self, ValidatorError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn pull_request(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestContext, ValidatorError> {
        self.client
            .get::<ApiPullRequest, _, _>(locator.pull_request_path(), None::<&()>)
            .await
            .map(ApiPullRequest::into)
            .map_err(|error| map_octocrab_error("pull request", &error))
    }
}

#[async_trait]
impl RepositoryContentGateway for OctocrabGateway {
    async fn file_content(
        &self,
        locator: &PullRequestLocator,
        path: &str,
        reference: &str,
    ) -> Result<Option<String>, ValidatorError> {
        let uri: Uri = locator
            .contents_path(path, reference)
            .parse::<Uri>()
            .map_err(|error| ValidatorError::InvalidUrl(error.to_string()))?;

        let response = self
            .client
            ._get_with_headers(uri, Some(raw_content_headers()))
            .await
            .map_err(|error| map_octocrab_error("repository contents", &error))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::OK => {
                let body = self
                    .client
                    .body_to_string(response)
                    .await
                    .map_err(|error| ValidatorError::Api {
                        message: format!("repository contents response decode failed: {error}"),
                    })?;
                Ok(Some(body))
            }
            status => {
                let body = self
                    .client
                    .body_to_string(response)
                    .await
                    .unwrap_or_else(|_| String::new());

                Err(map_http_error(
                    "repository contents",
                    status,
                    extract_github_message(&body),
                ))
            }
        }
    }
}

#[async_trait]
impl CommitListGateway for OctocrabGateway {
    async fn list_commits(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<CommitSummary>, ValidatorError> {
        let page = self
            .client
            .get::<Page<ApiCommit>, _, _>(locator.commits_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("pull request commits", &error))?;

        self.client
            .all_pages(page)
            .await
            .map(|commits| commits.into_iter().map(ApiCommit::into).collect())
            .map_err(|error| map_octocrab_error("pull request commits", &error))
    }
}

fn raw_content_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(RAW_CONTENT_MEDIA_TYPE));
    headers
}

// --- Error mapping helpers ---

/// Checks if a GitHub error status indicates an authentication failure.
const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ValidatorError {
    if let octocrab::Error::GitHub { source, .. } = error {
        if is_rate_limit_error(source) {
            return ValidatorError::RateLimitExceeded {
                message: format!("{operation} failed: {message}", message = source.message),
            };
        }

        return if is_auth_failure(source.status_code) {
            ValidatorError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            ValidatorError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return ValidatorError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ValidatorError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> ValidatorError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && message.to_lowercase().contains("rate limit"))
    {
        ValidatorError::RateLimitExceeded {
            message: format!("{operation} failed: {message}"),
        }
    } else if is_auth_failure(status) {
        ValidatorError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        ValidatorError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}
