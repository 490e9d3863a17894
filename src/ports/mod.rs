mod git;
mod prompter;
mod shell;

pub use git::Git;
pub use prompter::Prompter;
pub use shell::Shell;
