pub mod dialoguer_prompter;
pub mod git_command;
pub mod shell_command;

pub use dialoguer_prompter::DialoguerPrompter;
pub use git_command::GitCommandAdapter;
pub use shell_command::ShellCommandAdapter;
