//! Named section extraction from markdown bodies.

use regex::Regex;

/// Extracts the contents of the section titled `title` from `body`.
///
/// The section starts after the first heading line whose text equals `title`
/// (case-insensitive) and ends just before the next heading written with the
/// same marker, or at the end of the document. The returned text is trimmed
/// of surrounding whitespace.
///
/// Returns the empty string when no such heading exists, so callers see
/// "absent" and "present but empty" through the same value and must decide
/// which violation to report.
#[must_use]
pub fn extract_section(body: &str, title: &str) -> String {
    let escaped = regex::escape(title.trim());
    let pattern = format!(r"(?mi)^(#{{1,6}})[ \t]*{escaped}[ \t]*\r?$");
    let Ok(heading) = Regex::new(&pattern) else {
        return String::new();
    };
    let Some(captures) = heading.captures(body) else {
        return String::new();
    };

    let marker_len = captures
        .get(1)
        .map_or(0, |marker| marker.as_str().len());
    let content_start = captures.get(0).map_or(body.len(), |whole| whole.end());
    let Some(rest) = body.get(content_start..) else {
        return String::new();
    };

    // `#{n}` would also match deeper headings, so require the next character
    // to not be another marker.
    let boundary = format!(r"(?m)^#{{{marker_len}}}(?:[^#]|$)");
    let Ok(next_heading) = Regex::new(&boundary) else {
        return rest.trim().to_owned();
    };
    let content_end = next_heading
        .find(rest)
        .map_or(rest.len(), |found| found.start());
    rest.get(..content_end)
        .unwrap_or_default()
        .trim()
        .to_owned()
}
