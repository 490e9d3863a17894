//! Deploy a feature branch into an environment branch.
//!
//! Stages run strictly in order: resolve the feature branch, validate
//! branch roles and remote state, rebase both branches, then merge (or run
//! the production deploy command). Every check happens before the first
//! mutating git command. A failure after that point leaves the working tree
//! on whichever branch was last checked out.

use tracing::info;

use crate::app::AppContext;
use crate::domain::config::keys;
use crate::domain::{AppError, EnvConfig, render_deploy_command};
use crate::ports::{Git, Shell};

/// How the feature landed on the environment branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployStrategy {
    /// Production: the rendered `prod-deploy` command was run.
    ProdDeployCommand(String),
    /// Any other environment: plain `git merge`.
    Merge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub env_branch: String,
    pub feature: String,
    pub strategy: DeployStrategy,
}

/// Validated inputs for the mutating part of a deploy.
struct DeployPlan {
    env_branch: String,
    feature: String,
    remote: String,
    strategy: DeployStrategy,
}

pub fn execute<G, S>(
    ctx: &AppContext<G, S>,
    config: &EnvConfig,
    env_branch: &str,
    feature: Option<&str>,
) -> Result<DeployOutcome, AppError>
where
    G: Git,
    S: Shell,
{
    let feature = match feature {
        Some(name) => name.to_string(),
        None => ctx.git().current_branch()?,
    };
    info!(%feature, env = env_branch, "resolved feature branch");

    let plan = validate(ctx.git(), config, env_branch, feature)?;
    info!(env = %plan.env_branch, remote = %plan.remote, "deploy validated");

    synchronize(ctx.git(), config, &plan)?;
    info!("branches synchronized");

    land(ctx, &plan)?;
    info!(feature = %plan.feature, env = %plan.env_branch, "feature deployed");

    let DeployPlan { env_branch, feature, strategy, .. } = plan;
    Ok(DeployOutcome { env_branch, feature, strategy })
}

fn validate(
    git: &impl Git,
    config: &EnvConfig,
    env_branch: &str,
    feature: String,
) -> Result<DeployPlan, AppError> {
    if !config.is_env(env_branch) {
        return Err(AppError::NotAnEnvironmentBranch(env_branch.to_string()));
    }
    if config.is_env(&feature) {
        return Err(AppError::EnvironmentAsFeature(feature));
    }

    let remote = config.prod_remote(git)?;
    let local = git.rev_parse(env_branch)?;
    let upstream = git.rev_parse(&keys::remote_tracking_ref(&remote, env_branch))?;
    if local.trim() != upstream.trim() {
        return Err(AppError::DivergedRemote { branch: env_branch.to_string(), remote });
    }

    let strategy = if config.is_prod(env_branch) {
        DeployStrategy::ProdDeployCommand(render_deploy_command(
            config.deploy_template(),
            env_branch,
            &feature,
        )?)
    } else {
        DeployStrategy::Merge
    };

    Ok(DeployPlan { env_branch: env_branch.to_string(), feature, remote, strategy })
}

/// Rebase the feature onto production and the environment branch onto its upstream.
fn synchronize(git: &impl Git, config: &EnvConfig, plan: &DeployPlan) -> Result<(), AppError> {
    git.checkout(&plan.feature)?;
    git.pull_rebase(&plan.remote, &config.prod)?;
    git.checkout(&plan.env_branch)?;
    git.pull_rebase(&plan.remote, &plan.env_branch)?;
    Ok(())
}

fn land<G: Git, S: Shell>(ctx: &AppContext<G, S>, plan: &DeployPlan) -> Result<(), AppError> {
    match &plan.strategy {
        DeployStrategy::ProdDeployCommand(command) => {
            ctx.git().checkout(&plan.feature)?;
            ctx.shell().run_script(command)
        }
        // env branch is still checked out from synchronize
        DeployStrategy::Merge => ctx.git().merge(&plan.feature),
    }
}
