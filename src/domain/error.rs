use std::io;

use thiserror::Error;

/// Library-wide error type for git-env operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required `env-branch.*` option is missing from git config.
    #[error("This repo isn't git env enabled (env-branch.{option} is not set). Run 'git env init' first.")]
    ConfigNotInitialized { option: String },

    /// The production branch has no upstream remote configured.
    #[error("Failed to get remote of {branch} branch. Set branch.{branch}.remote first.")]
    ProdRemoteNotConfigured { branch: String },

    /// No checked-out branch could be detected (detached HEAD or empty listing).
    #[error("Could not detect current branch. Pass FEATURE_BRANCH explicitly.")]
    NoCurrentBranch,

    /// Deploy target is not a configured environment branch.
    #[error("Branch {0} is not an env branch. Can't merge a feature into it.")]
    NotAnEnvironmentBranch(String),

    /// Feature argument names an environment branch.
    #[error("Branch {0} is an env branch. Can't merge an env branch into another env branch.")]
    EnvironmentAsFeature(String),

    /// Local environment branch and its remote-tracking branch differ.
    #[error("Branch {branch} and branch {remote}/{branch} do not point at the same commit.")]
    DivergedRemote { branch: String, remote: String },

    /// An external command failed to start or exited non-zero.
    #[error("Failed executing command '{command}': {details}")]
    CommandFailed { command: String, details: String },

    /// Repository state could not be read.
    #[error("Git error: {0}")]
    Git(String),

    /// Production deploy template could not be rendered.
    #[error("Failed to render prod-deploy template: {0}")]
    TemplateRender(String),

    /// Interactive input failed.
    #[error("Failed to read answer: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn command_failed<S: Into<String>, D: Into<String>>(command: S, details: D) -> Self {
        AppError::CommandFailed { command: command.into(), details: details.into() }
    }

    /// True for failures raised while validating, before any branch was touched.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AppError::ConfigNotInitialized { .. }
                | AppError::ProdRemoteNotConfigured { .. }
                | AppError::NoCurrentBranch
                | AppError::NotAnEnvironmentBranch(_)
                | AppError::EnvironmentAsFeature(_)
                | AppError::DivergedRemote { .. }
                | AppError::TemplateRender(_)
        )
    }
}

impl From<git2::Error> for AppError {
    fn from(err: git2::Error) -> Self {
        AppError::Git(err.message().to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::TemplateRender(err.to_string())
    }
}
