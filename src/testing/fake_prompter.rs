use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Replays scripted answers; an empty answer takes the default like a terminal would.
#[derive(Default)]
pub struct FakePrompter {
    pub answers: Mutex<VecDeque<String>>,
    pub questions: Mutex<Vec<String>>,
}

impl FakePrompter {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompter for FakePrompter {
    fn ask(&self, question: &str, default: &str) -> Result<String, AppError> {
        self.questions.lock().unwrap().push(question.to_string());
        let answer = self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt("input closed".to_string()))?;
        Ok(if answer.is_empty() { default.to_string() } else { answer })
    }
}
