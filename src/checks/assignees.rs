//! Assignee count check.

/// Requires at least `minimum` assignees on the pull request.
///
/// The violation names the current assignees so the author can see how far
/// short the pull request falls.
#[must_use]
pub fn check(assignees: &[String], minimum: u32) -> Option<String> {
    let required = usize::try_from(minimum).unwrap_or(usize::MAX);
    if assignees.len() >= required {
        return None;
    }

    if assignees.is_empty() {
        Some(format!(
            "At least {minimum} assignee(s) must be set, but nobody is assigned"
        ))
    } else {
        Some(format!(
            "At least {minimum} assignee(s) must be set; currently assigned: {current}",
            current = assignees.join(", ")
        ))
    }
}
