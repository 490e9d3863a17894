//! git-env: a production / environment / feature branch workflow on top of git.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DeployOutcome, DeployStrategy, deploy, deploy_at, init, init_at, start, start_at,
};
pub use domain::{AppError, BranchRole, EnvConfig};
