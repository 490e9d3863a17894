use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::Shell;

/// Runs scripts with `sh -c` in the repository directory.
#[derive(Debug, Clone)]
pub struct ShellCommandAdapter {
    root: PathBuf,
}

impl ShellCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl Shell for ShellCommandAdapter {
    fn run_script(&self, script: &str) -> Result<(), AppError> {
        let command = format!("sh -c {}", script);
        println!("+ {}", command);
        debug!(%script, "running shell script");

        let status = Command::new("sh")
            .args(["-c", script])
            .current_dir(&self.root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AppError::command_failed(&command, e.to_string()))?;

        if !status.success() {
            return Err(AppError::command_failed(command, status.to_string()));
        }
        Ok(())
    }
}
