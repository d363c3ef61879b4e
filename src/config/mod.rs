//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.stickler.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STICKLER_PR_URL`, `STICKLER_TOKEN`, or
//!    legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--pr-url`/`-u`, `--token`/`-t`, and
//!    friends
//!
//! # Configuration File
//!
//! Place `.stickler.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! pr_url = "https://github.com/owner/repo/pull/123"
//! token = "ghp_example"
//! config_path = ".github/validation.yaml"
//! branch = "main"
//! workspace_root = "/path/to/checkout"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ValidatorError;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `STICKLER_PR_URL` or `--pr-url`: Pull request URL
/// - `STICKLER_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `STICKLER_CONFIG_PATH` or `--config-path`: Explicit rule document path
/// - `STICKLER_BRANCH` or `--branch`: Branch for remote rule lookups
/// - `STICKLER_WORKSPACE_ROOT` or `--workspace-root`: Local checkout root
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use stickler::SticklerConfig;
///
/// let config = SticklerConfig::load().expect("failed to load configuration");
/// let pr_url = config.require_pr_url().expect("PR URL required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STICKLER",
    discovery(
        dotfile_name = ".stickler.toml",
        config_file_name = "stickler.toml",
        app_name = "stickler"
    )
)]
pub struct SticklerConfig {
    /// GitHub pull request URL to validate.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-url <URL>` or `-u <URL>`
    /// - Environment: `STICKLER_PR_URL`
    /// - Config file: `pr_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `STICKLER_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Explicit rule document path, tried before the conventional pull
    /// request template locations.
    ///
    /// Can be provided via:
    /// - CLI: `--config-path <PATH>` or `-c <PATH>`
    /// - Environment: `STICKLER_CONFIG_PATH`
    /// - Config file: `config_path = "..."`
    #[ortho_config(cli_short = 'c')]
    pub config_path: Option<String>,

    /// Branch to fetch remote rule documents from.
    ///
    /// Defaults to the pull request head branch when unset.
    ///
    /// Can be provided via:
    /// - CLI: `--branch <BRANCH>` or `-b <BRANCH>`
    /// - Environment: `STICKLER_BRANCH`
    /// - Config file: `branch = "..."`
    #[ortho_config(cli_short = 'b')]
    pub branch: Option<String>,

    /// Root of the local checkout searched for rule documents.
    ///
    /// Defaults to the current working directory when unset.
    ///
    /// Can be provided via:
    /// - CLI: `--workspace-root <PATH>`
    /// - Environment: `STICKLER_WORKSPACE_ROOT`
    /// - Config file: `workspace_root = "..."`
    #[ortho_config()]
    pub workspace_root: Option<String>,
}

impl SticklerConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// For backward compatibility, if no token is provided via
    /// `STICKLER_TOKEN`, the CLI, or a configuration file, this method falls
    /// back to reading `GITHUB_TOKEN` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::MissingToken`] when no token source provides
    /// a value.
    pub fn resolve_token(&self) -> Result<String, ValidatorError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ValidatorError::MissingToken)
    }

    /// Returns the pull request URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::MissingPullRequestUrl`] when no URL is
    /// configured.
    pub fn require_pr_url(&self) -> Result<&str, ValidatorError> {
        self.pr_url
            .as_deref()
            .ok_or(ValidatorError::MissingPullRequestUrl)
    }
}
