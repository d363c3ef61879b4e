//! Front matter location inside markdown documents.

use std::sync::LazyLock;

use regex::Regex;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a fixed literal exercised by tests"
)]
static FRONT_MATTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^(?:<!--[ \t]*\r?\n)?---[ \t]*\r?\n(.*?)^---[ \t]*(?:\r?\n|\z)")
        .expect("front matter pattern should compile")
});

/// Locates the first front-matter block in `text` and returns its body.
///
/// A block is a region between two lines containing only `---`, optionally
/// preceded by an HTML comment opener on its own line so the block can hide
/// inside `<!-- … -->`. Returns `None` when no block exists.
#[must_use]
pub fn front_matter_block(text: &str) -> Option<&str> {
    FRONT_MATTER_BLOCK
        .captures(text)?
        .get(1)
        .map(|block| block.as_str())
}
