use crate::domain::AppError;
use crate::ports::Git;
use git2::{ErrorCode, Repository};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// `Git` backed by libgit2 for reads and the `git` binary for everything that
/// touches branches, remotes, or the working tree.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Ok(Repository::discover(&self.root)?)
    }

    fn display(args: &[&str]) -> String {
        format!("git {}", args.join(" "))
    }

    /// Run git and capture stdout.
    fn capture(&self, args: &[&str]) -> Result<String, AppError> {
        debug!(command = %Self::display(args), "capturing git output");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::command_failed(Self::display(args), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::command_failed(
                Self::display(args),
                if stderr.is_empty() { output.status.to_string() } else { stderr },
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Run git attached to the terminal, echoing the command first.
    fn run_attached(&self, args: &[&str]) -> Result<(), AppError> {
        let command = Self::display(args);
        println!("+ {}", command);
        debug!(%command, "running git");

        let status = Command::new("git")
            .args(args)
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

impl Git for GitCommandAdapter {
    fn config_value(&self, key: &str) -> Result<Option<String>, AppError> {
        let config = self.repo()?.config()?;
        match config.get_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_config_value(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.capture(&["config", "--local", "--replace-all", key, value])?;
        Ok(())
    }

    fn run_command(&self, args: &[&str]) -> Result<(), AppError> {
        self.run_attached(args)
    }

    fn branch_listing(&self) -> Result<String, AppError> {
        self.capture(&["branch", "--no-color"])
    }

    fn rev_parse(&self, rev: &str) -> Result<String, AppError> {
        let repo = self.repo()?;
        let commit = repo
            .revparse_single(rev)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|e| AppError::command_failed(format!("git rev-parse {}", rev), e.message()))?;
        Ok(commit.id().to_string())
    }
}
