//! Per-section checkbox rules.

use crate::markdown::checkbox::parse_checkboxes;
use crate::markdown::nested::unchecked_child_violations;
use crate::markdown::section::extract_section;
use crate::rules::model::{SectionPolicy, SectionRule};

/// Evaluates one configured section of the pull request body.
///
/// A missing (or empty) section is its own violation and the checkbox rules
/// are skipped for it. Otherwise the section's checkboxes are parsed and
/// checked against the policy, with the nested parent/child validation added
/// when the policy asks for it.
#[must_use]
pub fn check(body: &str, title: &str, policy: &SectionPolicy) -> Vec<String> {
    let content = extract_section(body, title);
    if content.is_empty() {
        return vec![format!(
            "Section \"{title}\" is missing from the pull request description"
        )];
    }

    let items = parse_checkboxes(&content);
    let mut violations = Vec::new();

    match policy.rule {
        SectionRule::AnyChecked => {
            if !items.iter().any(|item| item.checked) {
                violations.push(format!(
                    "Section \"{title}\" requires at least one checked item"
                ));
            }
        }
        SectionRule::AllChecked => {
            let unchecked: Vec<&str> = items
                .iter()
                .filter(|item| !item.checked)
                .map(|item| item.text.as_str())
                .collect();
            if !unchecked.is_empty() {
                violations.push(format!(
                    "Section \"{title}\" requires every item checked; unchecked: {remaining}",
                    remaining = unchecked.join(", ")
                ));
            }
        }
    }

    if policy.enforce_nested && items.iter().any(|item| item.checked) {
        violations.extend(unchecked_child_violations(title, &items));
    }

    violations
}
