//! Checkbox list parsing.

/// A checkbox list item in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxItem {
    /// Literal count of leading whitespace characters. Not normalized to
    /// nesting levels; tabs and spaces each count as one.
    pub indentation: usize,
    /// Whether the box is marked with `x` or `X`.
    pub checked: bool,
    /// Label text following the box.
    pub text: String,
}

/// Parses `text` into its checkbox items, preserving source line order.
///
/// A line matches when, after optional leading whitespace, it reads
/// `- [x] label`, `- [X] label`, or `- [ ] label`. Every other line is
/// silently skipped.
#[must_use]
pub fn parse_checkboxes(text: &str) -> Vec<CheckboxItem> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(raw: &str) -> Option<CheckboxItem> {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    let indentation = line.chars().take_while(|ch| ch.is_whitespace()).count();
    let rest = line.trim_start().strip_prefix("- [")?;

    let mut chars = rest.chars();
    let checked = match chars.next()? {
        'x' | 'X' => true,
        ' ' => false,
        _ => return None,
    };
    let text = chars.as_str().strip_prefix("] ")?;

    Some(CheckboxItem {
        indentation,
        checked,
        text: text.to_owned(),
    })
}
