//! Requested reviewer count check.

/// Requires at least `minimum` review requests, counting individual
/// reviewers and teams together.
#[must_use]
pub fn check(reviewers: &[String], teams: &[String], minimum: u32) -> Option<String> {
    let required = usize::try_from(minimum).unwrap_or(usize::MAX);
    let requested = reviewers.len().saturating_add(teams.len());
    if requested >= required {
        return None;
    }

    if requested == 0 {
        Some(format!(
            "At least {minimum} review request(s) must be made, but none are requested"
        ))
    } else {
        let current: Vec<&str> = reviewers
            .iter()
            .chain(teams.iter())
            .map(String::as_str)
            .collect();
        Some(format!(
            "At least {minimum} review request(s) must be made; currently requested: {current}",
            current = current.join(", ")
        ))
    }
}
