//! Data models representing the pull request content under validation.

use serde::Deserialize;

/// Everything the rule evaluators need to know about a pull request.
///
/// The context is a plain value: evaluation is a pure function of this
/// struct and the resolved rule configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestContext {
    /// Pull request number.
    pub number: u64,
    /// Pull request description, empty when the author supplied none.
    pub body: String,
    /// Names of the labels currently applied.
    pub labels: Vec<String>,
    /// Logins of the current assignees.
    pub assignees: Vec<String>,
    /// Logins of the users from whom a review was requested.
    pub requested_reviewers: Vec<String>,
    /// Names of the teams from whom a review was requested.
    pub requested_teams: Vec<String>,
    /// Commits embedded on the context, possibly incomplete.
    ///
    /// The semantic-commit evaluator only trusts this list when its length
    /// matches [`commit_count`](Self::commit_count); otherwise it fetches the
    /// full list through the commits gateway.
    pub commits: Vec<CommitSummary>,
    /// Number of commits the pull request reports.
    pub commit_count: u64,
    /// Head branch name, used to resolve rule files from the PR's branch.
    pub head_ref: Option<String>,
}

/// A single commit as seen by the semantic-commit evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Abbreviated commit id (first seven characters of the SHA).
    pub short_id: String,
    /// Full commit message; only the first line is validated.
    pub message: String,
}

impl CommitSummary {
    /// First line of the commit message.
    #[must_use]
    pub fn first_line(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) body: Option<String>,
    #[serde(default)]
    pub(super) labels: Vec<ApiLabel>,
    #[serde(default)]
    pub(super) assignees: Vec<ApiUser>,
    #[serde(default)]
    pub(super) requested_reviewers: Vec<ApiUser>,
    #[serde(default)]
    pub(super) requested_teams: Vec<ApiTeam>,
    #[serde(default)]
    pub(super) commits: u64,
    pub(super) head: Option<ApiRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLabel {
    pub(super) name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiTeam {
    pub(super) name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRef {
    #[serde(rename = "ref")]
    pub(super) reference: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommit {
    pub(super) sha: String,
    pub(super) commit: ApiCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommitDetail {
    pub(super) message: String,
}

impl From<ApiPullRequest> for PullRequestContext {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            body: value.body.unwrap_or_default(),
            labels: collect_names(value.labels.into_iter().map(|label| label.name)),
            assignees: collect_names(value.assignees.into_iter().map(|user| user.login)),
            requested_reviewers: collect_names(
                value.requested_reviewers.into_iter().map(|user| user.login),
            ),
            requested_teams: collect_names(value.requested_teams.into_iter().map(|team| team.name)),
            commits: Vec::new(),
            commit_count: value.commits,
            head_ref: value.head.and_then(|head| head.reference),
        }
    }
}

impl From<ApiCommit> for CommitSummary {
    fn from(value: ApiCommit) -> Self {
        let short_id = value.sha.get(..7).unwrap_or(value.sha.as_str()).to_owned();
        Self {
            short_id,
            message: value.commit.message,
        }
    }
}

fn collect_names(values: impl Iterator<Item = Option<String>>) -> Vec<String> {
    values.flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::{ApiCommit, ApiCommitDetail, ApiPullRequest, CommitSummary, PullRequestContext};

    #[test]
    fn api_pull_request_maps_collections_and_head() {
        let api: ApiPullRequest = serde_json::from_value(serde_json::json!({
            "number": 12,
            "body": "Fixes #1",
            "labels": [{ "name": "bug" }, { "name": null }],
            "assignees": [{ "login": "alice" }],
            "requested_reviewers": [{ "login": "bob" }],
            "requested_teams": [{ "name": "platform" }],
            "commits": 3,
            "head": { "ref": "feature/login" }
        }))
        .expect("payload should deserialise");

        let context = PullRequestContext::from(api);

        assert_eq!(context.number, 12);
        assert_eq!(context.body, "Fixes #1");
        assert_eq!(context.labels, vec!["bug".to_owned()], "null names dropped");
        assert_eq!(context.assignees, vec!["alice".to_owned()]);
        assert_eq!(context.requested_reviewers, vec!["bob".to_owned()]);
        assert_eq!(context.requested_teams, vec!["platform".to_owned()]);
        assert_eq!(context.commit_count, 3);
        assert!(context.commits.is_empty(), "commit list is not embedded");
        assert_eq!(context.head_ref.as_deref(), Some("feature/login"));
    }

    #[test]
    fn api_pull_request_tolerates_missing_body_and_head() {
        let api: ApiPullRequest =
            serde_json::from_value(serde_json::json!({ "number": 1, "body": null }))
                .expect("payload should deserialise");

        let context = PullRequestContext::from(api);

        assert_eq!(context.body, "");
        assert!(context.head_ref.is_none());
        assert_eq!(context.commit_count, 0);
    }

    #[test]
    fn commit_summary_shortens_sha_and_exposes_first_line() {
        let commit = CommitSummary::from(ApiCommit {
            sha: "abcdef0123456789".to_owned(),
            commit: ApiCommitDetail {
                message: "feat(ui): add button\n\nLonger description".to_owned(),
            },
        });

        assert_eq!(commit.short_id, "abcdef0");
        assert_eq!(commit.first_line(), "feat(ui): add button");
    }

    #[test]
    fn commit_summary_keeps_short_shas_whole() {
        let commit = CommitSummary::from(ApiCommit {
            sha: "abc".to_owned(),
            commit: ApiCommitDetail {
                message: "fix: typo".to_owned(),
            },
        });

        assert_eq!(commit.short_id, "abc");
    }
}
