//! Coordinates rule resolution and evaluation for one pull request.
//!
//! The orchestrator walks a small lifecycle: configuration loading, rule
//! evaluation, completion. Configuration loading never aborts a run; only a
//! missing pull request context does. Every enabled check runs to completion
//! and contributes a step to the report, so a single failing rule never hides
//! the others.

use std::fmt;

use crate::checks;
use crate::github::ValidatorError;
use crate::github::gateway::{CommitListGateway, RepositoryContentGateway};
use crate::github::locator::PullRequestLocator;
use crate::github::models::PullRequestContext;
use crate::report::{ValidationReport, ValidationStep};
use crate::rules::{ResolutionRequest, RuleResolver};
use crate::workspace::LocalWorkspace;

/// Lifecycle stage of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPhase {
    /// No work has happened yet.
    NotStarted,
    /// Resolving the effective rule configuration.
    ConfigLoading,
    /// Running the enabled rule evaluators.
    Evaluating,
    /// The run finished and produced a report.
    Completed {
        /// Whether the finished run passed.
        passed: bool,
    },
    /// The run stopped before evaluation could begin.
    Aborted,
}

impl fmt::Display for ValidationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("not started"),
            Self::ConfigLoading => f.write_str("loading configuration"),
            Self::Evaluating => f.write_str("evaluating rules"),
            Self::Completed { passed: true } => f.write_str("completed (passed)"),
            Self::Completed { passed: false } => f.write_str("completed (failed)"),
            Self::Aborted => f.write_str("aborted"),
        }
    }
}

/// Caller-supplied knobs for one validation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions<'a> {
    /// Explicit rule document path, tried ahead of the conventional template
    /// locations.
    pub config_path: Option<&'a str>,
    /// Branch for remote rule candidates; defaults to the pull request head
    /// branch.
    pub branch: Option<&'a str>,
}

/// Runs every enabled check against a pull request and collects the outcome.
pub struct ValidationOrchestrator<'ctx, Content, Commits>
where
    Content: RepositoryContentGateway,
    Commits: CommitListGateway,
{
    content: &'ctx Content,
    commits: &'ctx Commits,
    workspace: &'ctx LocalWorkspace,
    locator: &'ctx PullRequestLocator,
}

impl<'ctx, Content, Commits> ValidationOrchestrator<'ctx, Content, Commits>
where
    Content: RepositoryContentGateway,
    Commits: CommitListGateway,
{
    /// Creates an orchestrator over the given gateways and working tree.
    #[must_use]
    pub const fn new(
        content: &'ctx Content,
        commits: &'ctx Commits,
        workspace: &'ctx LocalWorkspace,
        locator: &'ctx PullRequestLocator,
    ) -> Self {
        Self {
            content,
            commits,
            workspace,
            locator,
        }
    }

    /// Validates `context` and reports every violation found.
    ///
    /// Checks run in a fixed order: labels, assignees, reviewers, issue
    /// reference, semantic commits, then each configured section in
    /// configuration order. Checks the configuration leaves disabled produce
    /// no step; an empty configuration therefore yields a passing report with
    /// no steps at all.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::MissingPullRequestContext` when `context` is
    /// absent; no other condition fails the run.
    pub async fn run(
        &self,
        context: Option<&PullRequestContext>,
        options: &ValidationOptions<'_>,
    ) -> Result<ValidationReport, ValidatorError> {
        let mut phase = ValidationPhase::NotStarted;

        let Some(context) = context else {
            advance(&mut phase, ValidationPhase::Aborted);
            return Err(ValidatorError::MissingPullRequestContext);
        };

        advance(&mut phase, ValidationPhase::ConfigLoading);
        let resolver = RuleResolver::new(self.content, self.workspace, self.locator);
        let request = ResolutionRequest {
            body: &context.body,
            explicit_path: options.config_path,
            branch: options.branch.or(context.head_ref.as_deref()),
        };
        let config = resolver.resolve(&request).await;

        advance(&mut phase, ValidationPhase::Evaluating);
        let mut errors = Vec::new();
        let mut steps = Vec::new();

        if config.require_labels {
            record(
                &mut steps,
                &mut errors,
                "Labels",
                checks::labels::check(&context.labels),
            );
        }
        if config.require_assignees > 0 {
            record(
                &mut steps,
                &mut errors,
                "Assignees",
                checks::assignees::check(&context.assignees, config.require_assignees),
            );
        }
        if config.require_reviewers > 0 {
            record(
                &mut steps,
                &mut errors,
                "Reviewers",
                checks::reviewers::check(
                    &context.requested_reviewers,
                    &context.requested_teams,
                    config.require_reviewers,
                ),
            );
        }
        if config.issue_reference_required() {
            record(
                &mut steps,
                &mut errors,
                "Issue reference",
                checks::issue_reference::check(&context.body),
            );
        }
        if let Some(rules) = config.semantic_commits.as_ref().filter(|r| r.enabled) {
            let violation =
                checks::semantic_commits::evaluate(context, rules, self.commits, self.locator)
                    .await;
            record(&mut steps, &mut errors, "Semantic commits", violation);
        }
        for (title, policy) in &config.sections {
            let violations = checks::sections::check(&context.body, title, policy);
            steps.push(ValidationStep {
                name: format!("Section \"{title}\""),
                passed: violations.is_empty(),
            });
            errors.extend(violations);
        }

        let passed = errors.is_empty();
        advance(&mut phase, ValidationPhase::Completed { passed });
        Ok(ValidationReport {
            passed,
            errors,
            steps,
        })
    }
}

fn advance(phase: &mut ValidationPhase, next: ValidationPhase) {
    tracing::debug!("validation phase: {phase} -> {next}");
    *phase = next;
}

fn record(
    steps: &mut Vec<ValidationStep>,
    errors: &mut Vec<String>,
    name: &str,
    violation: Option<String>,
) {
    steps.push(ValidationStep {
        name: name.to_owned(),
        passed: violation.is_none(),
    });
    if let Some(message) = violation {
        errors.push(message);
    }
}
