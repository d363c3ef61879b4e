//! Rule configuration discovery across priority-ordered sources.
//!
//! The effective configuration can live in several places: an explicitly
//! configured path on the pull request branch, the same path in the local
//! working tree, one of the conventional template locations (remote then
//! local), or front matter embedded in the pull request body itself. Sources
//! are tried strictly in that order and the first one that yields a usable
//! document wins. Resolution never fails the caller; when every source is
//! exhausted the empty configuration is returned and no checks run.

use std::fmt;

use super::document::{self, DocumentError, DocumentKind};
use super::model::RuleConfig;
use crate::github::ValidatorError;
use crate::github::gateway::RepositoryContentGateway;
use crate::github::locator::PullRequestLocator;
use crate::workspace::LocalWorkspace;

/// Conventional template locations, searched in order when no explicit path
/// is configured.
const CONVENTIONAL_TEMPLATE_PATHS: [&str; 6] = [
    ".github/pull_request_template.md",
    ".github/PULL_REQUEST_TEMPLATE.md",
    "docs/pull_request_template.md",
    "docs/PULL_REQUEST_TEMPLATE.md",
    "pull_request_template.md",
    "PULL_REQUEST_TEMPLATE.md",
];

/// Inputs for one resolution pass.
///
/// Resolved options travel on this value rather than through process
/// environment state.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionRequest<'a> {
    /// Pull request body, used as the last-resort front matter source.
    pub body: &'a str,
    /// Explicitly configured rule document path, when present.
    pub explicit_path: Option<&'a str>,
    /// Branch to fetch remote candidates from; resolution is local-only when
    /// absent.
    pub branch: Option<&'a str>,
}

/// One candidate location for the rule document.
enum RuleSource<'a> {
    Remote { path: &'a str, branch: &'a str },
    Local { path: &'a str },
    Body,
}

impl fmt::Display for RuleSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote { path, branch } => write!(f, "{path} on branch {branch}"),
            Self::Local { path } => write!(f, "local file {path}"),
            Self::Body => write!(f, "pull request body"),
        }
    }
}

/// Why a candidate did not supply the configuration.
enum CandidateFailure {
    /// The document does not exist at this source.
    Missing,
    /// The source could not be read at all.
    Read(ValidatorError),
    /// The document exists but does not carry usable rules.
    Document(DocumentError),
}

impl CandidateFailure {
    fn log(&self, source: &RuleSource<'_>) {
        match self {
            Self::Missing => tracing::debug!("no rule document at {source}"),
            Self::Read(error) => {
                tracing::warn!("failed to read rule source {source}: {error}");
            }
            Self::Document(error) => {
                tracing::debug!("rule source {source} rejected: {error}");
            }
        }
    }
}

/// Walks the candidate sources and produces the effective configuration.
pub struct RuleResolver<'ctx, Content>
where
    Content: RepositoryContentGateway,
{
    content: &'ctx Content,
    workspace: &'ctx LocalWorkspace,
    locator: &'ctx PullRequestLocator,
}

impl<'ctx, Content> RuleResolver<'ctx, Content>
where
    Content: RepositoryContentGateway,
{
    /// Creates a resolver over the given content gateway and working tree.
    #[must_use]
    pub const fn new(
        content: &'ctx Content,
        workspace: &'ctx LocalWorkspace,
        locator: &'ctx PullRequestLocator,
    ) -> Self {
        Self {
            content,
            workspace,
            locator,
        }
    }

    /// Resolves the effective rule configuration for `request`.
    ///
    /// Sources are attempted sequentially; every failure is logged and treated
    /// as "try the next one". When no source succeeds the empty configuration
    /// is returned, degrading to "no checks enforced" rather than an error.
    pub async fn resolve(&self, request: &ResolutionRequest<'_>) -> RuleConfig {
        for source in sources(request) {
            match self.attempt(&source, request).await {
                Ok(config) => {
                    tracing::debug!("resolved validation rules from {source}");
                    return config;
                }
                Err(failure) => failure.log(&source),
            }
        }

        tracing::debug!("no rule source yielded a configuration; all checks disabled");
        RuleConfig::default()
    }

    async fn attempt(
        &self,
        source: &RuleSource<'_>,
        request: &ResolutionRequest<'_>,
    ) -> Result<RuleConfig, CandidateFailure> {
        let (kind, text) = match source {
            RuleSource::Remote { path, branch } => {
                let text = self
                    .content
                    .file_content(self.locator, path, branch)
                    .await
                    .map_err(CandidateFailure::Read)?
                    .ok_or(CandidateFailure::Missing)?;
                (document::kind_for_path(path), text)
            }
            RuleSource::Local { path } => {
                let text = self
                    .workspace
                    .read_file(path)
                    .map_err(CandidateFailure::Read)?
                    .ok_or(CandidateFailure::Missing)?;
                (document::kind_for_path(path), text)
            }
            RuleSource::Body => (DocumentKind::Markdown, request.body.to_owned()),
        };

        document::parse_rule_document(kind, &text).map_err(CandidateFailure::Document)
    }
}

/// Builds the candidate list for `request` in strict priority order.
fn sources<'a>(request: &ResolutionRequest<'a>) -> Vec<RuleSource<'a>> {
    let mut candidates = Vec::new();

    if let Some(path) = request.explicit_path {
        if let Some(branch) = request.branch {
            candidates.push(RuleSource::Remote { path, branch });
        }
        candidates.push(RuleSource::Local { path });
    }

    if let Some(branch) = request.branch {
        for path in CONVENTIONAL_TEMPLATE_PATHS {
            candidates.push(RuleSource::Remote { path, branch });
        }
    }
    for path in CONVENTIONAL_TEMPLATE_PATHS {
        candidates.push(RuleSource::Local { path });
    }

    candidates.push(RuleSource::Body);
    candidates
}
