mod fake_git;
mod fake_prompter;
mod fake_shell;

pub use fake_git::FakeGit;
pub use fake_prompter::FakePrompter;
pub use fake_shell::FakeShell;
