//! Validation rule discovery and modelling.
//!
//! Rules are declared as YAML, either standalone or embedded in template
//! front matter, and discovered across several priority-ordered sources. The
//! submodules cover the typed model, front matter location, candidate
//! document parsing, and the resolution walk itself.

pub mod document;
pub mod front_matter;
pub mod model;
pub mod resolver;

pub use model::{RuleConfig, SectionPolicy, SectionRule, SemanticCommitRules};
pub use resolver::{ResolutionRequest, RuleResolver};
