use crate::domain::{AppError, parse_current_branch};

pub trait Git {
    /// Read a git config value. `Ok(None)` when the key is not set.
    fn config_value(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a value into the repository-local config, replacing all existing values.
    fn set_config_value(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Run a git command attached to the terminal (stdin/stdout/stderr inherited).
    fn run_command(&self, args: &[&str]) -> Result<(), AppError>;

    /// Raw `git branch` output.
    fn branch_listing(&self) -> Result<String, AppError>;

    /// Resolve a revision to its commit id.
    fn rev_parse(&self, rev: &str) -> Result<String, AppError>;

    /// Name of the checked-out branch.
    fn current_branch(&self) -> Result<String, AppError> {
        parse_current_branch(&self.branch_listing()?)
    }

    // === Branch operations ===

    fn checkout(&self, branch: &str) -> Result<(), AppError> {
        self.run_command(&["checkout", branch])
    }

    fn checkout_new_branch(&self, branch: &str) -> Result<(), AppError> {
        self.run_command(&["checkout", "-b", branch])
    }

    /// `git pull --rebase <remote> <branch>` into the checked-out branch.
    fn pull_rebase(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.run_command(&["pull", "--rebase", remote, branch])
    }

    /// Merge `branch` into the checked-out branch.
    fn merge(&self, branch: &str) -> Result<(), AppError> {
        self.run_command(&["merge", branch])
    }
}
