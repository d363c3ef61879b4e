//! Stickler CLI entrypoint for pull request validation.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use stickler::{
    LocalWorkspace, OctocrabGateway, PersonalAccessToken, PullRequestGateway, PullRequestLocator,
    SticklerConfig, ValidationOptions, ValidationOrchestrator, ValidationReport, ValidatorError,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<bool, ValidatorError> {
    let config = load_config()?;

    let pr_url = config.require_pr_url()?;
    let token_value = config.resolve_token()?;

    let locator = PullRequestLocator::parse(pr_url)?;
    let token = PersonalAccessToken::new(token_value)?;

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    let context = gateway.pull_request(&locator).await?;

    let workspace = config
        .workspace_root
        .as_deref()
        .map_or_else(LocalWorkspace::from_current_dir, |root| {
            Ok(LocalWorkspace::new(root))
        })?;

    let orchestrator = ValidationOrchestrator::new(&gateway, &gateway, &workspace, &locator);
    let options = ValidationOptions {
        config_path: config.config_path.as_deref(),
        branch: config.branch.as_deref(),
    };
    let report = orchestrator.run(Some(&context), &options).await?;

    write_report(&report)?;
    Ok(report.passed)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ValidatorError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<SticklerConfig, ValidatorError> {
    SticklerConfig::load().map_err(|error| ValidatorError::Configuration {
        message: error.to_string(),
    })
}

fn write_report(report: &ValidationReport) -> Result<(), ValidatorError> {
    let mut stdout = io::stdout().lock();
    report.write_text_to(&mut stdout)
}
