use crate::app::api::DeployStrategy;
use crate::domain::AppError;

pub fn run_deploy(env_branch: &str, feature: Option<&str>) -> Result<(), AppError> {
    let outcome = crate::app::api::deploy(env_branch, feature)?;
    match outcome.strategy {
        DeployStrategy::ProdDeployCommand(_) => {
            println!("✅ Deployed {} to {}", outcome.feature, outcome.env_branch);
        }
        DeployStrategy::Merge => {
            println!(
                "✅ Merged {} into {}. Push {} when ready.",
                outcome.feature, outcome.env_branch, outcome.env_branch
            );
        }
    }
    Ok(())
}
