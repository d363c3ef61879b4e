//! Markdown parsing primitives for pull request bodies.
//!
//! Pull request descriptions are free-form markdown. The validation rules
//! only care about three shapes inside that text: named sections bounded by
//! headings, checkbox list items, and the indentation relationships between
//! those items. Each concern lives in its own submodule.

pub mod checkbox;
pub mod nested;
pub mod section;

pub use checkbox::{CheckboxItem, parse_checkboxes};
pub use nested::unchecked_child_violations;
pub use section::extract_section;
