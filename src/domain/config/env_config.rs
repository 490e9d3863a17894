//! Branch-role configuration read from `env-branch.*` git config keys.

use tracing::debug;

use crate::domain::AppError;
use crate::domain::branch::BranchRole;
use crate::ports::Git;

use super::keys;
use super::options::{DEFAULT_PROD_DEPLOY, OTHER, PROD, PROD_DEPLOY};

/// Branch roles for the current repository.
///
/// Built once per invocation and passed to whichever command needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// The single production branch.
    pub prod: String,
    /// Additional environment branches, in configured order.
    pub other: Vec<String>,
    /// Command template run when deploying to `prod`.
    pub prod_deploy: String,
}

impl EnvConfig {
    /// Build a config from one lookup per recognized option.
    ///
    /// The first failing lookup is returned as-is; nothing is defaulted here.
    pub fn load<F>(mut get_option: F) -> Result<Self, AppError>
    where
        F: FnMut(&str) -> Result<String, AppError>,
    {
        let prod = get_option(PROD.name)?;
        let other = get_option(OTHER.name)?;
        let prod_deploy = get_option(PROD_DEPLOY.name)?;

        Ok(Self { prod, other: split_other(&other), prod_deploy })
    }

    /// Load from the repository's git config.
    pub fn from_git(git: &impl Git) -> Result<Self, AppError> {
        Self::load(|option| {
            let key = keys::option_key(option);
            let value = git.config_value(&key)?;
            debug!(%key, found = value.is_some(), "read option");
            value.ok_or_else(|| AppError::ConfigNotInitialized { option: option.to_string() })
        })
    }

    /// True for the production branch and every other environment branch.
    pub fn is_env(&self, branch: &str) -> bool {
        self.is_prod(branch) || self.other.iter().any(|b| b == branch)
    }

    pub fn is_prod(&self, branch: &str) -> bool {
        branch == self.prod
    }

    pub fn role_of(&self, branch: &str) -> BranchRole {
        if self.is_prod(branch) {
            BranchRole::Production
        } else if self.is_env(branch) {
            BranchRole::Environment
        } else {
            BranchRole::Feature
        }
    }

    /// Upstream remote of the production branch (`branch.<prod>.remote`).
    pub fn prod_remote(&self, git: &impl Git) -> Result<String, AppError> {
        git.config_value(&keys::branch_remote_key(&self.prod))?
            .filter(|remote| !remote.is_empty())
            .ok_or_else(|| AppError::ProdRemoteNotConfigured { branch: self.prod.clone() })
    }

    /// Production deploy template, falling back to a `--no-ff` merge when unset.
    pub fn deploy_template(&self) -> &str {
        if self.prod_deploy.trim().is_empty() { DEFAULT_PROD_DEPLOY } else { &self.prod_deploy }
    }
}

/// Split the space-joined `other` value. Empty segments are not branch names.
fn split_other(value: &str) -> Vec<String> {
    value.split(' ').filter(|name| !name.is_empty()).map(str::to_string).collect()
}
