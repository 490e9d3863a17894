use std::fmt;

use crate::domain::AppError;

/// Role a branch plays relative to an [`EnvConfig`](crate::domain::EnvConfig).
///
/// Never stored; always derived from the config at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchRole {
    /// The single production branch.
    Production,
    /// Any other configured environment branch.
    Environment,
    /// Everything else.
    Feature,
}

impl BranchRole {
    pub fn label(&self) -> &'static str {
        match self {
            BranchRole::Production => "production",
            BranchRole::Environment => "environment",
            BranchRole::Feature => "feature",
        }
    }
}

impl fmt::Display for BranchRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Marker `git branch` puts in front of the checked-out branch.
const CURRENT_MARKER: &str = "* ";

/// Extract the checked-out branch from `git branch` output.
pub fn parse_current_branch(listing: &str) -> Result<String, AppError> {
    let line = listing
        .lines()
        .find_map(|line| line.strip_prefix(CURRENT_MARKER))
        .ok_or(AppError::NoCurrentBranch)?;

    // "(HEAD detached at abc123)" and friends
    if line.starts_with('(') {
        return Err(AppError::NoCurrentBranch);
    }

    line.split(' ')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or(AppError::NoCurrentBranch)
}
