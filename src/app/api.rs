//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{DialoguerPrompter, GitCommandAdapter, ShellCommandAdapter};
use crate::app::{
    AppContext,
    commands::{deploy, init, start},
};
use crate::domain::EnvConfig;

pub use crate::app::commands::deploy::{DeployOutcome, DeployStrategy};
pub use crate::domain::AppError;

/// Create an `AppContext` for a given path.
fn create_context(path: PathBuf) -> AppContext<GitCommandAdapter, ShellCommandAdapter> {
    let git = GitCommandAdapter::new(path.clone());
    let shell = ShellCommandAdapter::new(path);
    AppContext::new(git, shell)
}

/// Load the branch configuration of the repository at `path`.
pub fn load_config_at(path: impl Into<PathBuf>) -> Result<EnvConfig, AppError> {
    EnvConfig::from_git(&GitCommandAdapter::new(path.into()))
}

// =============================================================================
// Init Command API
// =============================================================================

/// Interactively capture the branch configuration of the current repository.
pub fn init() -> Result<Vec<(&'static str, String)>, AppError> {
    init_at(std::env::current_dir()?)
}

pub fn init_at(path: impl Into<PathBuf>) -> Result<Vec<(&'static str, String)>, AppError> {
    let git = GitCommandAdapter::new(path.into());
    init::execute(&git, &DialoguerPrompter)
}

// =============================================================================
// Workflow Command API
// =============================================================================

/// Start a feature branch off the production branch of the current repository.
pub fn start(new_branch: &str) -> Result<(), AppError> {
    start_at(std::env::current_dir()?, new_branch)
}

pub fn start_at(path: impl Into<PathBuf>, new_branch: &str) -> Result<(), AppError> {
    let path = path.into();
    let config = load_config_at(path.clone())?;
    let ctx = create_context(path);
    start::execute(&ctx, &config, new_branch)
}

/// Deploy `feature` (default: the checked-out branch) into `env_branch`.
pub fn deploy(env_branch: &str, feature: Option<&str>) -> Result<DeployOutcome, AppError> {
    deploy_at(std::env::current_dir()?, env_branch, feature)
}

pub fn deploy_at(
    path: impl Into<PathBuf>,
    env_branch: &str,
    feature: Option<&str>,
) -> Result<DeployOutcome, AppError> {
    let path = path.into();
    let config = load_config_at(path.clone())?;
    let ctx = create_context(path);
    deploy::execute(&ctx, &config, env_branch, feature)
}
