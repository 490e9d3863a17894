/// Template run for production deploys when none is configured.
pub const DEFAULT_PROD_DEPLOY: &str = "git checkout {{ env }} && git merge --no-ff {{ feature }}";

/// An option captured by `git env init` and read back on every other command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOption {
    pub name: &'static str,
    pub question: &'static str,
    pub default: &'static str,
}

pub const PROD: ConfigOption = ConfigOption {
    name: "prod",
    question: "What is your production branch?",
    default: "master",
};

pub const OTHER: ConfigOption = ConfigOption {
    name: "other",
    question: "What other environment branches do you have?",
    default: "stage dev",
};

pub const PROD_DEPLOY: ConfigOption = ConfigOption {
    name: "prod-deploy",
    question: "What command should be run to deploy to the production branch?",
    default: DEFAULT_PROD_DEPLOY,
};

/// All recognized options, in prompt and load order.
pub const CONFIG_OPTIONS: [ConfigOption; 3] = [PROD, OTHER, PROD_DEPLOY];
