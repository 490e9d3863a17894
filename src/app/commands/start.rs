use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, EnvConfig};
use crate::ports::{Git, Shell};

/// Branch `new_branch` off a freshly rebased production branch.
///
/// Name collisions are left to git to report.
pub fn execute<G, S>(
    ctx: &AppContext<G, S>,
    config: &EnvConfig,
    new_branch: &str,
) -> Result<(), AppError>
where
    G: Git,
    S: Shell,
{
    let git = ctx.git();
    let remote = config.prod_remote(git)?;

    git.checkout(&config.prod)?;
    git.pull_rebase(&remote, &config.prod)?;
    git.checkout_new_branch(new_branch)?;

    info!(branch = new_branch, base = %config.prod, "started feature branch");
    Ok(())
}
