pub mod choices;
pub mod options;
pub mod session;
pub mod trivia_api;

/// One trivia question as delivered by the question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
        }
    }
}
