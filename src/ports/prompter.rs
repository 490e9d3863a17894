use crate::domain::AppError;

/// Port for interactive questions.
pub trait Prompter {
    /// Ask `question`; an empty answer yields `default`.
    fn ask(&self, question: &str, default: &str) -> Result<String, AppError>;
}
