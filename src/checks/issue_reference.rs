//! Issue reference check.
//!
//! A pull request body satisfies the check when it links an issue with one
//! of GitHub's closing keywords, either in the same repository (`Fixes #12`)
//! or across repositories (`closes owner/repo#45`).

use std::sync::LazyLock;

use regex::Regex;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a fixed literal exercised by tests"
)]
static ISSUE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:closes|closed|close|fixes|fixed|fix|resolves|resolved|resolve):?\s*(?:[\w.-]+/[\w.-]+)?#\d+",
    )
    .expect("issue reference pattern should compile")
});

/// Requires a closing-keyword issue reference somewhere in `body`.
#[must_use]
pub fn check(body: &str) -> Option<String> {
    if ISSUE_REFERENCE.is_match(body) {
        None
    } else {
        Some(
            "Required issue reference is missing: link an issue with a closing keyword, \
             for example \"Fixes #123\" or \"Closes owner/repo#45\""
                .to_owned(),
        )
    }
}
