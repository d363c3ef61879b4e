//! Typed validation rule configuration.
//!
//! Repositories declare their pull request rules as a YAML document, either
//! as a standalone file or nested under a `validation` key inside template
//! front matter. Every field is optional; an entirely absent configuration
//! disables every check.

use indexmap::IndexMap;
use serde::Deserialize;

/// Literal `issue_number` value that enables the issue-reference check. Any
/// other value, including absence, skips it.
const ISSUE_REFERENCE_REQUIRED: &str = "required";

/// Declarative validation rules for a repository's pull requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Tri-state issue-reference requirement. See
    /// [`RuleConfig::issue_reference_required`].
    pub issue_number: Option<String>,
    /// Requires at least one label when `true`.
    pub require_labels: bool,
    /// Minimum number of assignees; `0` disables the check.
    pub require_assignees: u32,
    /// Minimum number of requested reviewers and teams combined; `0`
    /// disables the check.
    pub require_reviewers: u32,
    /// Commit message convention rules.
    pub semantic_commits: Option<SemanticCommitRules>,
    /// Checkbox rules per body section, keyed by section title and evaluated
    /// in declaration order.
    pub sections: IndexMap<String, SectionPolicy>,
}

impl RuleConfig {
    /// Returns `true` when no check is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.issue_reference_required()
            && !self.require_labels
            && self.require_assignees == 0
            && self.require_reviewers == 0
            && !self.semantic_commits_enabled()
            && self.sections.is_empty()
    }

    /// Returns `true` only when `issue_number` is exactly the literal
    /// `"required"`.
    #[must_use]
    pub fn issue_reference_required(&self) -> bool {
        self.issue_number.as_deref() == Some(ISSUE_REFERENCE_REQUIRED)
    }

    /// Returns `true` when semantic commit checking is switched on.
    #[must_use]
    pub fn semantic_commits_enabled(&self) -> bool {
        self.semantic_commits
            .as_ref()
            .is_some_and(|rules| rules.enabled)
    }
}

/// Commit message convention rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SemanticCommitRules {
    /// Enables the check.
    pub enabled: bool,
    /// Allowed commit types; an empty list permits any type.
    pub types: Vec<String>,
    /// Allowed scopes; absence permits any scope.
    pub allowed_scopes: Option<Vec<String>>,
}

/// Checkbox rule applied to one named body section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionPolicy {
    /// Which checkbox states satisfy the section.
    pub rule: SectionRule,
    /// Additionally requires checked parents to have fully-checked direct
    /// children.
    #[serde(default)]
    pub enforce_nested: bool,
}

/// Checkbox satisfaction rule for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRule {
    /// At least one checkbox must be checked.
    AnyChecked,
    /// Every checkbox must be checked.
    AllChecked,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{RuleConfig, SectionRule};

    #[test]
    fn full_document_deserialises_with_section_order_preserved() {
        let yaml = r#"
issue_number: "required"
require_labels: true
require_assignees: 1
require_reviewers: 2
semantic_commits:
  enabled: true
  types: [feat, fix]
  allowed_scopes: [ui, api]
sections:
  "Checklist":
    rule: all_checked
    enforce_nested: true
  "Testing":
    rule: any_checked
"#;

        let config: RuleConfig = serde_yaml::from_str(yaml).expect("should deserialise");

        assert!(config.issue_reference_required());
        assert!(config.require_labels);
        assert_eq!(config.require_assignees, 1);
        assert_eq!(config.require_reviewers, 2);
        assert!(config.semantic_commits_enabled());
        let semantic = config
            .semantic_commits
            .as_ref()
            .expect("semantic rules should be present");
        assert_eq!(semantic.types, vec!["feat".to_owned(), "fix".to_owned()]);
        assert_eq!(
            semantic.allowed_scopes,
            Some(vec!["ui".to_owned(), "api".to_owned()])
        );

        let titles: Vec<&str> = config.sections.keys().map(String::as_str).collect();
        assert_eq!(titles, vec!["Checklist", "Testing"]);
        let checklist = config
            .sections
            .get("Checklist")
            .expect("Checklist should be present");
        assert_eq!(checklist.rule, SectionRule::AllChecked);
        assert!(checklist.enforce_nested);
        let testing = config
            .sections
            .get("Testing")
            .expect("Testing should be present");
        assert_eq!(testing.rule, SectionRule::AnyChecked);
        assert!(!testing.enforce_nested);
    }

    #[test]
    fn missing_fields_default_to_disabled() {
        let config: RuleConfig =
            serde_yaml::from_str("require_labels: true").expect("should deserialise");

        assert!(!config.is_empty());
        assert!(config.issue_number.is_none());
        assert_eq!(config.require_assignees, 0);
        assert_eq!(config.require_reviewers, 0);
        assert!(config.semantic_commits.is_none());
        assert!(config.sections.is_empty());
    }

    #[rstest]
    #[case::exact_literal(Some("required"), true)]
    #[case::different_value(Some("optional"), false)]
    #[case::wrong_case(Some("Required"), false)]
    #[case::absent(None, false)]
    fn only_the_required_literal_enables_issue_references(
        #[case] value: Option<&str>,
        #[case] expected: bool,
    ) {
        let config = RuleConfig {
            issue_number: value.map(ToOwned::to_owned),
            ..RuleConfig::default()
        };

        assert_eq!(config.issue_reference_required(), expected);
    }

    #[test]
    fn default_config_is_empty() {
        assert!(RuleConfig::default().is_empty());
    }

    #[test]
    fn unknown_section_rule_fails_deserialisation() {
        let yaml = "sections:\n  \"Checklist\":\n    rule: some_checked\n";

        let result: Result<RuleConfig, _> = serde_yaml::from_str(yaml);

        assert!(result.is_err(), "unknown rule values should be rejected");
    }

    #[test]
    fn disabled_semantic_commits_do_not_enable_the_check() {
        let yaml = "semantic_commits:\n  enabled: false\n  types: [feat]\n";

        let config: RuleConfig = serde_yaml::from_str(yaml).expect("should deserialise");

        assert!(!config.semantic_commits_enabled());
    }
}
