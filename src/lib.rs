//! Stickler library crate providing pull request description validation.
//!
//! The library wraps Octocrab to parse pull request URLs, validate tokens,
//! and retrieve pull request metadata, then resolves a validation rule
//! document from the repository, working tree, or pull request body and
//! evaluates the configured rules into an ordered report.

pub mod checks;
pub mod config;
pub mod github;
pub mod markdown;
pub mod orchestrator;
pub mod report;
pub mod rules;
pub mod workspace;

pub use config::SticklerConfig;
pub use github::{
    CommitListGateway, CommitSummary, OctocrabGateway, PersonalAccessToken, PullRequestContext,
    PullRequestGateway, PullRequestLocator, RepositoryContentGateway, ValidatorError,
};
pub use orchestrator::{ValidationOptions, ValidationOrchestrator};
pub use report::{ValidationReport, ValidationStep};
pub use rules::RuleConfig;
pub use workspace::LocalWorkspace;
