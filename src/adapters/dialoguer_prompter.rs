use std::io::{self, BufRead, Write};

use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts via dialoguer, or one answer per stdin line when input is piped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &str, default: &str) -> Result<String, AppError> {
        if !io::stdin().is_terminal() {
            print!("{} [{}] ", question, default);
            io::stdout().flush()?;
            return read_answer(&mut io::stdin().lock(), default);
        }

        Input::<String>::new()
            .with_prompt(question)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| AppError::Prompt(e.to_string()))
    }
}

/// Read one line as the answer; a blank line takes `default`.
fn read_answer<R: BufRead>(reader: &mut R, default: &str) -> Result<String, AppError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AppError::Prompt("input closed before all questions were answered".into()));
    }

    let answer = line.trim_end_matches(['\n', '\r']);
    Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
}
