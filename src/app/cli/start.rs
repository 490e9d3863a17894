use crate::domain::AppError;

pub fn run_start(branch_name: &str) -> Result<(), AppError> {
    crate::app::api::start(branch_name)?;
    println!("✅ Started feature branch {}", branch_name);
    Ok(())
}
