pub mod branch;
pub mod config;
pub mod deploy_command;
pub mod error;

pub use branch::{BranchRole, parse_current_branch};
pub use config::{CONFIG_OPTIONS, ConfigOption, EnvConfig};
pub use deploy_command::render_deploy_command;
pub use error::AppError;
