//! Candidate rule document parsing.
//!
//! Each configuration candidate is a text document whose interpretation
//! depends on its perceived kind: markdown-like documents carry their rules
//! inside front matter under a `validation` key, while anything else is read
//! as a YAML rule document in its own right.

use super::front_matter::front_matter_block;
use super::model::RuleConfig;

/// How a candidate document's content should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Front matter with a `validation` key inside a markdown body.
    Markdown,
    /// A whole-file YAML rule document.
    Yaml,
}

/// Derives the document kind from a candidate's file path.
///
/// Paths ending in `.md` or `.markdown` (case-insensitive) are markdown-like;
/// everything else is treated as direct YAML.
#[must_use]
pub fn kind_for_path(path: &str) -> DocumentKind {
    let lowered = path.to_lowercase();
    if lowered.ends_with(".md") || lowered.ends_with(".markdown") {
        DocumentKind::Markdown
    } else {
        DocumentKind::Yaml
    }
}

/// Reasons a candidate document fails to yield a configuration.
///
/// These are never fatal; the resolver logs them and moves to the next
/// candidate.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// A markdown document contained no front-matter block.
    #[error("no front matter block found")]
    MissingFrontMatter,
    /// Front matter was present but had no `validation` key.
    #[error("front matter has no validation key")]
    MissingValidationKey,
    /// The document parsed to something other than a non-empty mapping.
    #[error("document is not a non-empty mapping")]
    EmptyDocument,
    /// The YAML text or its typed interpretation failed to parse.
    #[error("YAML parse failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parses `content` as a rule document of the given kind.
///
/// # Errors
///
/// Returns a [`DocumentError`] describing why the candidate cannot supply a
/// configuration; callers treat every variant as "try the next candidate".
pub fn parse_rule_document(kind: DocumentKind, content: &str) -> Result<RuleConfig, DocumentError> {
    match kind {
        DocumentKind::Markdown => {
            let block = front_matter_block(content).ok_or(DocumentError::MissingFrontMatter)?;
            if block.trim().is_empty() {
                return Err(DocumentError::EmptyDocument);
            }
            let value: serde_yaml::Value = serde_yaml::from_str(block)?;
            let validation = value
                .get("validation")
                .ok_or(DocumentError::MissingValidationKey)?;
            typed_config(validation.clone())
        }
        DocumentKind::Yaml => {
            if content.trim().is_empty() {
                return Err(DocumentError::EmptyDocument);
            }
            let value: serde_yaml::Value = serde_yaml::from_str(content)?;
            typed_config(value)
        }
    }
}

/// Accepts only a populated mapping, then deserialises it into [`RuleConfig`].
fn typed_config(value: serde_yaml::Value) -> Result<RuleConfig, DocumentError> {
    let is_populated_mapping = value
        .as_mapping()
        .is_some_and(|mapping| !mapping.is_empty());
    if !is_populated_mapping {
        return Err(DocumentError::EmptyDocument);
    }
    serde_yaml::from_value(value).map_err(DocumentError::from)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DocumentError, DocumentKind, kind_for_path, parse_rule_document};

    #[rstest]
    #[case::markdown("docs/pull_request_template.md", DocumentKind::Markdown)]
    #[case::markdown_upper(".github/PULL_REQUEST_TEMPLATE.MD", DocumentKind::Markdown)]
    #[case::long_extension("notes.markdown", DocumentKind::Markdown)]
    #[case::yaml(".github/pr_rules.yaml", DocumentKind::Yaml)]
    #[case::yml("rules.yml", DocumentKind::Yaml)]
    #[case::extensionless("VALIDATION", DocumentKind::Yaml)]
    fn kind_follows_file_extension(#[case] path: &str, #[case] expected: DocumentKind) {
        assert_eq!(kind_for_path(path), expected);
    }

    #[test]
    fn yaml_document_parses_whole_file() {
        let config = parse_rule_document(DocumentKind::Yaml, "require_labels: true\n")
            .expect("should parse");

        assert!(config.require_labels);
    }

    #[test]
    fn markdown_document_reads_rules_under_validation_key() {
        let content = "<!--\n---\nvalidation:\n  require_assignees: 2\n---\n-->\n## Summary\n";

        let config =
            parse_rule_document(DocumentKind::Markdown, content).expect("should parse");

        assert_eq!(config.require_assignees, 2);
    }

    #[test]
    fn markdown_without_front_matter_is_rejected() {
        let error = parse_rule_document(DocumentKind::Markdown, "## Summary\nplain body\n")
            .expect_err("should fail");

        assert!(matches!(error, DocumentError::MissingFrontMatter));
    }

    #[test]
    fn markdown_front_matter_without_validation_key_is_rejected() {
        let content = "---\ntitle: unrelated metadata\n---\nbody\n";

        let error =
            parse_rule_document(DocumentKind::Markdown, content).expect_err("should fail");

        assert!(matches!(error, DocumentError::MissingValidationKey));
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace_only("   \n\n")]
    #[case::scalar("just a string\n")]
    #[case::empty_mapping("{}\n")]
    fn non_mapping_yaml_documents_are_rejected(#[case] content: &str) {
        let error =
            parse_rule_document(DocumentKind::Yaml, content).expect_err("should fail");

        assert!(
            matches!(error, DocumentError::EmptyDocument),
            "got {error:?} for {content:?}"
        );
    }

    #[test]
    fn comment_only_documents_are_rejected() {
        let result = parse_rule_document(DocumentKind::Yaml, "# nothing but a comment\n");

        assert!(result.is_err(), "comment-only documents carry no rules");
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let error = parse_rule_document(DocumentKind::Yaml, "require_labels: [unclosed\n")
            .expect_err("should fail");

        assert!(matches!(error, DocumentError::Yaml(_)));
    }

    #[test]
    fn empty_validation_mapping_is_rejected() {
        let content = "---\nvalidation: {}\n---\n";

        let error =
            parse_rule_document(DocumentKind::Markdown, content).expect_err("should fail");

        assert!(matches!(error, DocumentError::EmptyDocument));
    }
}
