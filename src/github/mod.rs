//! GitHub pull request retrieval and token validation.
//!
//! This module wraps Octocrab to parse pull request URLs, validate personal
//! access tokens, and retrieve the pull request state that validation rules
//! inspect. Errors are mapped into user-friendly variants so that callers can
//! surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::ValidatorError;
pub use gateway::{
    CommitListGateway, OctocrabGateway, PullRequestGateway, RepositoryContentGateway,
};
pub use locator::{
    PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner,
};
pub use models::{CommitSummary, PullRequestContext};

#[cfg(test)]
pub use gateway::{MockCommitListGateway, MockPullRequestGateway, MockRepositoryContentGateway};
