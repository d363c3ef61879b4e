//! Validation run reporting.

use std::io::{self, Write};

use crate::github::ValidatorError;

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationStep {
    /// Human-readable check name.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
}

/// Aggregated outcome of a validation run.
///
/// Steps appear in evaluation order and violations in the order they were
/// collected; neither is ever reordered or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// `true` when no check produced a violation.
    pub passed: bool,
    /// Every violation message, in collection order.
    pub errors: Vec<String>,
    /// Every executed check with its outcome, in execution order.
    pub steps: Vec<ValidationStep>,
}

impl ValidationReport {
    /// Writes a plain-text rendering of the report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::Io` when the writer fails.
    pub fn write_text_to<W: Write>(&self, writer: &mut W) -> Result<(), ValidatorError> {
        let verdict = if self.passed { "passed" } else { "failed" };
        writeln!(writer, "Validation {verdict}").map_err(|e| io_error(&e))?;

        for step in &self.steps {
            let marker = if step.passed { "pass" } else { "fail" };
            writeln!(writer, "  [{marker}] {name}", name = step.name).map_err(|e| io_error(&e))?;
        }

        if !self.errors.is_empty() {
            writeln!(writer).map_err(|e| io_error(&e))?;
            writeln!(writer, "Violations:").map_err(|e| io_error(&e))?;
            for (position, error) in self.errors.iter().enumerate() {
                writeln!(writer, "  {number}. {error}", number = position + 1)
                    .map_err(|e| io_error(&e))?;
            }
        }

        Ok(())
    }
}

/// Converts an I/O error to a [`ValidatorError::Io`].
fn io_error(error: &io::Error) -> ValidatorError {
    ValidatorError::Io {
        message: error.to_string(),
    }
}
