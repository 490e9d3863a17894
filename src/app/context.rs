use crate::ports::{Git, Shell};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: Git, S: Shell> {
    git: G,
    shell: S,
}

impl<G: Git, S: Shell> AppContext<G, S> {
    /// Create a new application context.
    pub fn new(git: G, shell: S) -> Self {
        Self { git, shell }
    }

    /// Get a reference to the git port.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get a reference to the shell port.
    pub fn shell(&self) -> &S {
        &self.shell
    }
}
