//! Parent/child consistency checks over parsed checkbox lists.

use super::checkbox::CheckboxItem;

/// Reports checked items whose direct children are not all checked.
///
/// For each checked item, its subtree is the run of later items indented
/// strictly deeper than it, ending at the first item indented at or above
/// its own level. Direct children are the subtree items indented exactly as
/// deep as the first subtree item; anything deeper belongs to a later
/// parent's own pass. A parent with at least one unchecked direct child
/// produces exactly one violation naming it. Unchecked items and items
/// without children produce nothing.
#[must_use]
pub fn unchecked_child_violations(section: &str, items: &[CheckboxItem]) -> Vec<String> {
    let mut violations = Vec::new();

    for (position, parent) in items.iter().enumerate() {
        if !parent.checked {
            continue;
        }

        let subtree = items
            .iter()
            .skip(position + 1)
            .take_while(|item| item.indentation > parent.indentation);

        let mut child_level: Option<usize> = None;
        let mut has_unchecked_child = false;
        for item in subtree {
            let level = *child_level.get_or_insert(item.indentation);
            if item.indentation == level && !item.checked {
                has_unchecked_child = true;
            }
        }

        if has_unchecked_child {
            violations.push(format!(
                "Section \"{section}\": checked item \"{text}\" has unchecked sub-items",
                text = parent.text
            ));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::unchecked_child_violations;
    use crate::markdown::checkbox::parse_checkboxes;

    fn violations_for(text: &str) -> Vec<String> {
        unchecked_child_violations("Checklist", &parse_checkboxes(text))
    }

    #[test]
    fn checked_parent_with_unchecked_child_yields_one_violation() {
        let violations = violations_for("- [x] A\n    - [ ] B");

        assert_eq!(violations.len(), 1, "got {violations:?}");
        let first = violations.first().expect("should have a violation");
        assert!(first.contains("\"A\""), "should name the parent: {first}");
    }

    #[rstest]
    #[case::all_children_checked("- [x] A\n    - [x] B")]
    #[case::unchecked_parent_is_ignored("- [ ] A\n    - [ ] B")]
    #[case::childless_parent("- [x] A\n- [ ] B")]
    #[case::no_items("just prose")]
    fn consistent_lists_yield_no_violations(#[case] text: &str) {
        assert!(violations_for(text).is_empty(), "unexpected: {text:?}");
    }

    #[test]
    fn only_the_first_deeper_level_counts_as_direct_children() {
        // C sits deeper than A's direct-child level, so only B's own pass
        // inspects it.
        let violations = violations_for("- [x] A\n  - [x] B\n      - [ ] C");

        assert_eq!(violations.len(), 1, "got {violations:?}");
        let first = violations.first().expect("should have a violation");
        assert!(first.contains("\"B\""), "should name B: {first}");
    }

    #[test]
    fn subtree_ends_at_sibling_indentation() {
        let violations = violations_for("- [x] A\n  - [x] B\n- [x] C\n  - [ ] D");

        assert_eq!(violations.len(), 1, "got {violations:?}");
        let first = violations.first().expect("should have a violation");
        assert!(first.contains("\"C\""), "should name C: {first}");
    }

    #[test]
    fn each_failing_parent_is_reported_once() {
        let violations =
            violations_for("- [x] A\n  - [ ] B\n  - [ ] C\n- [x] D\n  - [ ] E");

        assert_eq!(violations.len(), 2, "got {violations:?}");
    }

    #[test]
    fn intermediate_shallower_items_are_not_direct_children() {
        // First deeper item fixes the child level at 4; the level-2 item is
        // inside the subtree but not a direct child.
        let violations = violations_for("- [x] A\n    - [x] B\n  - [ ] C");

        assert!(violations.is_empty(), "got {violations:?}");
    }
}
