//! Individual validation checks.
//!
//! Each submodule evaluates one rule against the pull request state and
//! reports violations as human-readable strings. Checks never abort the run;
//! the orchestrator collects every violation before producing the verdict.

pub mod assignees;
pub mod issue_reference;
pub mod labels;
pub mod reviewers;
pub mod sections;
pub mod semantic_commits;
