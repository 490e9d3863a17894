use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Git;

/// In-memory `Git` that records every mutating command it is asked to run.
#[derive(Default)]
pub struct FakeGit {
    pub config: Mutex<HashMap<String, String>>,
    pub revisions: HashMap<String, String>,
    pub branch_listing: String,
    pub fail_on: Option<String>,
    pub commands: Mutex<Vec<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self { branch_listing: "* feature/login\n  master\n".to_string(), ..Self::default() }
    }

    pub fn with_config(self, key: &str, value: &str) -> Self {
        self.config.lock().unwrap().insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_revision(mut self, rev: &str, sha: &str) -> Self {
        self.revisions.insert(rev.to_string(), sha.to_string());
        self
    }

    pub fn with_branch_listing(mut self, listing: &str) -> Self {
        self.branch_listing = listing.to_string();
        self
    }

    /// Make the command whose joined args equal `command` exit non-zero.
    pub fn failing_on(mut self, command: &str) -> Self {
        self.fail_on = Some(command.to_string());
        self
    }

    /// Commands run so far, as space-joined args.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn config_entry(&self, key: &str) -> Option<String> {
        self.config.lock().unwrap().get(key).cloned()
    }
}

impl Git for FakeGit {
    fn config_value(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.config_entry(key))
    }

    fn set_config_value(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.config.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn run_command(&self, args: &[&str]) -> Result<(), AppError> {
        let command = args.join(" ");
        self.commands.lock().unwrap().push(command.clone());
        if self.fail_on.as_deref() == Some(command.as_str()) {
            return Err(AppError::command_failed(format!("git {}", command), "exit status: 1"));
        }
        Ok(())
    }

    fn branch_listing(&self) -> Result<String, AppError> {
        Ok(self.branch_listing.clone())
    }

    fn rev_parse(&self, rev: &str) -> Result<String, AppError> {
        self.revisions.get(rev).cloned().ok_or_else(|| {
            AppError::command_failed(format!("git rev-parse {}", rev), "unknown revision")
        })
    }
}
