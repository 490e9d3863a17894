pub mod env_config;
pub mod keys;
pub mod options;

pub use env_config::EnvConfig;
pub use options::{CONFIG_OPTIONS, ConfigOption, DEFAULT_PROD_DEPLOY};
