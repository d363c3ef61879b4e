//! URL parsing and identity wrappers for pull request validation.

use url::Url;

use super::error::ValidatorError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ValidatorError> {
        if value.is_empty() {
            return Err(ValidatorError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ValidatorError> {
        if value.is_empty() {
            return Err(ValidatorError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    pub(crate) const fn new(value: u64) -> Result<Self, ValidatorError> {
        if value == 0 {
            return Err(ValidatorError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::MissingToken` when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ValidatorError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidatorError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, ValidatorError> {
    if host.eq_ignore_ascii_case("github.com") {
        Url::parse("https://api.github.com")
            .map_err(|error| ValidatorError::InvalidUrl(error.to_string()))
    } else {
        // `Url::host_str` already brackets IPv6 literals.
        let authority = if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| ValidatorError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| ValidatorError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api/v3");
        Ok(api_url)
    }
}

/// Derives the GitHub API base URL from a parsed URL.
fn derive_api_base(parsed: &Url) -> Result<Url, ValidatorError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| ValidatorError::InvalidUrl("URL must include a host".to_owned()))?;

    derive_api_base_from_host(parsed.scheme(), host, parsed.port())
}

/// Parsed pull request URL and derived API base.
///
/// The locator identifies the pull request being validated and builds the
/// request paths used by the gateways: the pull request itself, its commit
/// list, and repository file contents at a ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Parses a GitHub pull request URL in the form
    /// `https://github.com/<owner>/<repo>/pull/<number>`.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::InvalidUrl` when parsing fails,
    /// `MissingPathSegments` when the URL path is not
    /// `/owner/repo/pull/<number>`, and `InvalidPullRequestNumber` when the
    /// final segment is not a positive integer.
    pub fn parse(input: &str) -> Result<Self, ValidatorError> {
        let parsed =
            Url::parse(input).map_err(|error| ValidatorError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or(ValidatorError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(ValidatorError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(ValidatorError::MissingPathSegments)?;
        let marker = segments.next().ok_or(ValidatorError::MissingPathSegments)?;
        let number_segment = segments.next().ok_or(ValidatorError::MissingPathSegments)?;

        if marker != "pull" {
            return Err(ValidatorError::MissingPathSegments);
        }

        if number_segment.is_empty() {
            return Err(ValidatorError::MissingPathSegments);
        }

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let number = number_segment
            .parse::<u64>()
            .map_err(|_| ValidatorError::InvalidPullRequestNumber)
            .and_then(PullRequestNumber::new)?;

        let api_base = derive_api_base(&parsed)?;

        Ok(Self {
            api_base,
            owner,
            repository,
            number,
        })
    }

    /// API base URL derived from the pull request host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }

    pub(crate) fn commits_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls/{}/commits",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }

    pub(crate) fn contents_path(&self, file_path: &str, reference: &str) -> String {
        format!(
            "/repos/{}/{}/contents/{}?ref={}",
            self.owner.as_str(),
            self.repository.as_str(),
            file_path.trim_start_matches('/'),
            reference
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{PersonalAccessToken, PullRequestLocator, ValidatorError};

    #[rstest]
    #[case::github_com("https://github.com/octo/cat/pull/42", "https://api.github.com/")]
    #[case::enterprise(
        "https://ghe.example.com/octo/cat/pull/42",
        "https://ghe.example.com/api/v3"
    )]
    fn parse_derives_api_base(#[case] url: &str, #[case] expected_base: &str) {
        let locator = PullRequestLocator::parse(url).expect("should parse pull request URL");

        assert_eq!(locator.api_base().as_str(), expected_base, "api base");
        assert_eq!(locator.owner().as_str(), "octo", "owner");
        assert_eq!(locator.repository().as_str(), "cat", "repository");
        assert_eq!(locator.number().get(), 42, "number");
    }

    #[rstest]
    #[case::not_a_url("not a url")]
    #[case::missing_number("https://github.com/octo/cat/pull")]
    #[case::wrong_marker("https://github.com/octo/cat/issues/42")]
    fn parse_rejects_malformed_urls(#[case] url: &str) {
        let result = PullRequestLocator::parse(url);
        assert!(result.is_err(), "expected parse failure for {url}");
    }

    #[rstest]
    fn parse_rejects_zero_pull_request_number() {
        let result = PullRequestLocator::parse("https://github.com/octo/cat/pull/0");
        assert_eq!(result, Err(ValidatorError::InvalidPullRequestNumber));
    }

    #[rstest]
    fn request_paths_include_owner_repo_and_number() {
        let locator = PullRequestLocator::parse("https://github.com/octo/cat/pull/7")
            .expect("should parse pull request URL");

        assert_eq!(locator.pull_request_path(), "/repos/octo/cat/pulls/7");
        assert_eq!(locator.commits_path(), "/repos/octo/cat/pulls/7/commits");
        assert_eq!(
            locator.contents_path(".github/validation.yml", "feature/login"),
            "/repos/octo/cat/contents/.github/validation.yml?ref=feature/login"
        );
    }

    #[rstest]
    fn token_rejects_blank_input() {
        assert_eq!(
            PersonalAccessToken::new("   "),
            Err(ValidatorError::MissingToken)
        );
    }

    #[rstest]
    fn token_trims_whitespace() {
        let token = PersonalAccessToken::new(" ghp_abc ").expect("token should be accepted");
        assert_eq!(token.value(), "ghp_abc");
    }
}
