use tracing::info;

use crate::domain::config::keys;
use crate::domain::{AppError, CONFIG_OPTIONS};
use crate::ports::{Git, Prompter};

/// Execute the init command.
///
/// Asks every option first and only writes once all answers are in, so an
/// interrupted session leaves the existing configuration untouched.
pub fn execute<G, P>(git: &G, prompter: &P) -> Result<Vec<(&'static str, String)>, AppError>
where
    G: Git,
    P: Prompter,
{
    let mut answers = Vec::with_capacity(CONFIG_OPTIONS.len());
    for option in CONFIG_OPTIONS {
        let value = prompter.ask(option.question, option.default)?;
        answers.push((option.name, value));
    }

    for (name, value) in &answers {
        git.set_config_value(&keys::option_key(name), value)?;
        info!(option = *name, %value, "stored option");
    }

    Ok(answers)
}
