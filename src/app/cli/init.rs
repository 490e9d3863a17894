//! Init command implementation.

use crate::domain::AppError;

pub fn run_init() -> Result<(), AppError> {
    crate::app::api::init()?;
    println!("You're ready to go.");
    Ok(())
}
