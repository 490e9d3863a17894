use crate::domain::AppError;

/// Port for running user-supplied command lines.
pub trait Shell {
    /// Run `script` through the system shell, attached to the terminal.
    fn run_script(&self, script: &str) -> Result<(), AppError>;
}
