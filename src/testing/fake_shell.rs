use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Shell;

#[derive(Default)]
pub struct FakeShell {
    pub scripts: Mutex<Vec<String>>,
    pub fail: bool,
}

impl FakeShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

impl Shell for FakeShell {
    fn run_script(&self, script: &str) -> Result<(), AppError> {
        self.scripts.lock().unwrap().push(script.to_string());
        if self.fail {
            return Err(AppError::command_failed(format!("sh -c {}", script), "exit status: 1"));
        }
        Ok(())
    }
}
