//! Label presence check.

/// Requires at least one label on the pull request.
#[must_use]
pub fn check(labels: &[String]) -> Option<String> {
    if labels.is_empty() {
        Some("At least one label is required on the pull request".to_owned())
    } else {
        None
    }
}
