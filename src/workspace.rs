//! Local workspace file access.
//!
//! Validation rules can live in the repository checkout alongside the pull
//! request branch. This module reads candidate configuration files from a
//! local directory, matching path components case-insensitively so that
//! conventional template names resolve regardless of how the checkout cases
//! them.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::github::ValidatorError;

/// A local repository checkout that may contain validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalWorkspace {
    root: PathBuf,
}

impl LocalWorkspace {
    /// Creates a workspace rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a workspace rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::Io` when the current directory cannot be
    /// determined.
    pub fn from_current_dir() -> Result<Self, ValidatorError> {
        std::env::current_dir()
            .map(Self::new)
            .map_err(|error| ValidatorError::Io {
                message: format!("failed to determine current directory: {error}"),
            })
    }

    /// Returns the workspace root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads the file at `relative`, or `None` when no file with that path
    /// exists under the workspace root.
    ///
    /// Path components are matched case-insensitively, preferring an exact
    /// match when one exists. Paths that leave the workspace root are treated
    /// as absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::Io` when a directory cannot be listed or the
    /// file cannot be read.
    pub fn read_file(&self, relative: &str) -> Result<Option<String>, ValidatorError> {
        let Some(resolved) = self.resolve(relative)? else {
            return Ok(None);
        };
        if !resolved.is_file() {
            return Ok(None);
        }
        std::fs::read_to_string(&resolved)
            .map(Some)
            .map_err(|error| ValidatorError::Io {
                message: format!("failed to read {path}: {error}", path = resolved.display()),
            })
    }

    fn resolve(&self, relative: &str) -> Result<Option<PathBuf>, ValidatorError> {
        let mut current = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::CurDir => {}
                Component::Normal(name) => {
                    let Some(next) = resolve_component(&current, name)? else {
                        return Ok(None);
                    };
                    current = next;
                }
                _ => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}

/// Finds the entry in `dir` named `name`, preferring an exact match and
/// falling back to an ASCII case-insensitive comparison.
fn resolve_component(dir: &Path, name: &OsStr) -> Result<Option<PathBuf>, ValidatorError> {
    let exact = dir.join(name);
    if exact.exists() {
        return Ok(Some(exact));
    }

    let Some(wanted) = name.to_str() else {
        return Ok(None);
    };

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) if matches!(error.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(None);
        }
        Err(error) => {
            return Err(ValidatorError::Io {
                message: format!("failed to list {path}: {error}", path = dir.display()),
            });
        }
    };

    for entry in entries {
        let dir_entry = entry.map_err(|error| ValidatorError::Io {
            message: format!("failed to list {path}: {error}", path = dir.display()),
        })?;
        let file_name = dir_entry.file_name();
        if file_name
            .to_str()
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(wanted))
        {
            return Ok(Some(dir_entry.path()));
        }
    }

    Ok(None)
}
