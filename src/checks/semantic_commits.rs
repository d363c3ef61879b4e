//! Semantic commit message check.
//!
//! Every commit's first message line must follow the
//! `type(scope)!: subject` convention, with the scope and `!` optional.
//! The configuration may further restrict the allowed types and scopes.

use std::sync::LazyLock;

use regex::Regex;

use crate::github::gateway::CommitListGateway;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{CommitSummary, PullRequestContext};
use crate::rules::model::SemanticCommitRules;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a fixed literal exercised by tests"
)]
static SEMANTIC_COMMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)(?:\(([A-Za-z0-9_-]+)\))?!?: .+").expect("commit pattern should compile")
});

/// Validates the pull request's commits against `rules`.
///
/// Uses the commit list already embedded on the context when its length
/// matches the pull request's reported commit count; otherwise fetches the
/// full list through `commits`. A fetch failure becomes a single violation
/// rather than aborting the remaining checks.
pub async fn evaluate<Commits>(
    context: &PullRequestContext,
    rules: &SemanticCommitRules,
    commits: &Commits,
    locator: &PullRequestLocator,
) -> Option<String>
where
    Commits: CommitListGateway,
{
    let embedded_matches = usize::try_from(context.commit_count)
        .is_ok_and(|count| context.commits.len() == count);
    if embedded_matches {
        return check(&context.commits, rules);
    }

    match commits.list_commits(locator).await {
        Ok(fetched) => check(&fetched, rules),
        Err(error) => Some(format!("Failed to validate semantic commits: {error}")),
    }
}

/// Checks every commit's first line, aggregating all failures into one
/// violation.
#[must_use]
pub fn check(commits: &[CommitSummary], rules: &SemanticCommitRules) -> Option<String> {
    let failures: Vec<String> = commits
        .iter()
        .filter_map(|commit| commit_failure(commit, rules))
        .collect();

    if failures.is_empty() {
        None
    } else {
        Some(format!(
            "Semantic commit validation failed: {details}",
            details = failures.join("; ")
        ))
    }
}

fn commit_failure(commit: &CommitSummary, rules: &SemanticCommitRules) -> Option<String> {
    let line = commit.first_line();
    let Some(captures) = SEMANTIC_COMMIT.captures(line) else {
        return Some(describe(
            commit,
            "message does not follow type(scope): subject",
        ));
    };

    let commit_type = captures.get(1).map_or("", |found| found.as_str());
    if !rules.types.is_empty() && !rules.types.iter().any(|allowed| allowed == commit_type) {
        return Some(describe(
            commit,
            &format!(
                "type \"{commit_type}\" is not allowed (allowed: {types})",
                types = rules.types.join(", ")
            ),
        ));
    }

    let scope = captures.get(2).map(|found| found.as_str());
    let allowed_scopes = rules
        .allowed_scopes
        .as_deref()
        .filter(|scopes| !scopes.is_empty());
    if let (Some(given), Some(permitted)) = (scope, allowed_scopes)
        && !permitted.iter().any(|allowed| allowed == given)
    {
        return Some(describe(
            commit,
            &format!(
                "scope \"{given}\" is not allowed (allowed: {scopes})",
                scopes = permitted.join(", ")
            ),
        ));
    }

    None
}

fn describe(commit: &CommitSummary, reason: &str) -> String {
    format!(
        "{short_id} \"{line}\": {reason}",
        short_id = commit.short_id,
        line = commit.first_line()
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{check, evaluate};
    use crate::github::gateway::MockCommitListGateway;
    use crate::github::models::{CommitSummary, PullRequestContext};
    use crate::github::{PullRequestLocator, ValidatorError};
    use crate::rules::model::SemanticCommitRules;

    fn commit(short_id: &str, message: &str) -> CommitSummary {
        CommitSummary {
            short_id: short_id.to_owned(),
            message: message.to_owned(),
        }
    }

    fn rules(types: &[&str], scopes: Option<&[&str]>) -> SemanticCommitRules {
        SemanticCommitRules {
            enabled: true,
            types: types.iter().map(|value| (*value).to_owned()).collect(),
            allowed_scopes: scopes
                .map(|values| values.iter().map(|value| (*value).to_owned()).collect()),
        }
    }

    fn locator() -> PullRequestLocator {
        PullRequestLocator::parse("https://github.com/owner/repo/pull/5")
            .expect("should create pull request locator")
    }

    #[rstest]
    #[case::plain_type("feat: add button")]
    #[case::with_scope("feat(ui): add button")]
    #[case::breaking_change("fix(api)!: drop legacy field")]
    #[case::multiline_body("feat(ui): add button\n\nLonger explanation.")]
    fn conforming_messages_pass(#[case] message: &str) {
        let commits = vec![commit("abc1234", message)];

        assert_eq!(check(&commits, &rules(&["feat", "fix"], Some(&["ui", "api"]))), None);
    }

    #[rstest]
    #[case::no_separator("update the readme", "does not follow")]
    #[case::missing_subject("feat(ui):", "does not follow")]
    #[case::bad_scope_characters("feat(u i): thing", "does not follow")]
    fn malformed_messages_fail(#[case] message: &str, #[case] expected: &str) {
        let commits = vec![commit("abc1234", message)];

        let violation =
            check(&commits, &rules(&[], None)).expect("should report a violation");

        assert!(violation.contains("abc1234"), "got: {violation}");
        assert!(violation.contains(expected), "got: {violation}");
    }

    #[test]
    fn disallowed_type_names_the_type() {
        let commits = vec![commit("abc1234", "invalid: thing")];

        let violation =
            check(&commits, &rules(&["feat", "fix"], None)).expect("should report a violation");

        assert!(violation.contains("type \"invalid\""), "got: {violation}");
        assert!(violation.contains("feat, fix"), "got: {violation}");
    }

    #[test]
    fn disallowed_scope_names_the_scope() {
        let commits = vec![commit("abc1234", "feat(db): add migration")];

        let violation = check(&commits, &rules(&["feat"], Some(&["ui", "api"])))
            .expect("should report a violation");

        assert!(violation.contains("scope \"db\""), "got: {violation}");
    }

    #[test]
    fn empty_type_list_permits_any_type() {
        let commits = vec![commit("abc1234", "chore: tidy up")];

        assert_eq!(check(&commits, &rules(&[], None)), None);
    }

    #[test]
    fn scopeless_commit_passes_scope_restrictions() {
        let commits = vec![commit("abc1234", "feat: add button")];

        assert_eq!(check(&commits, &rules(&["feat"], Some(&["ui"]))), None);
    }

    #[test]
    fn failures_aggregate_into_one_violation() {
        let commits = vec![
            commit("abc1234", "bad message"),
            commit("def5678", "invalid: thing"),
        ];

        let violation =
            check(&commits, &rules(&["feat"], None)).expect("should report a violation");

        assert!(violation.contains("abc1234"), "got: {violation}");
        assert!(violation.contains("def5678"), "got: {violation}");
    }

    #[tokio::test]
    async fn embedded_commits_are_used_when_count_matches() {
        let gateway = MockCommitListGateway::new();
        let context = PullRequestContext {
            commits: vec![commit("abc1234", "feat: embedded")],
            commit_count: 1,
            ..PullRequestContext::default()
        };
        let target = locator();

        let result = evaluate(&context, &rules(&["feat"], None), &gateway, &target).await;

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn mismatched_count_triggers_a_fetch() {
        let mut gateway = MockCommitListGateway::new();
        gateway
            .expect_list_commits()
            .times(1)
            .returning(|_| Ok(vec![commit("abc1234", "feat: fetched")]));
        let context = PullRequestContext {
            commits: Vec::new(),
            commit_count: 1,
            ..PullRequestContext::default()
        };
        let target = locator();

        let result = evaluate(&context, &rules(&["feat"], None), &gateway, &target).await;

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn fetch_failure_becomes_a_single_violation() {
        let mut gateway = MockCommitListGateway::new();
        gateway.expect_list_commits().returning(|_| {
            Err(ValidatorError::Network {
                message: "connection reset".to_owned(),
            })
        });
        let context = PullRequestContext {
            commit_count: 3,
            ..PullRequestContext::default()
        };
        let target = locator();

        let violation = evaluate(&context, &rules(&["feat"], None), &gateway, &target)
            .await
            .expect("should report a violation");

        assert!(
            violation.contains("Failed to validate semantic commits"),
            "got: {violation}"
        );
    }
}
