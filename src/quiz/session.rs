use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quiz::choices::{ChoiceSet, Selection};
use crate::quiz::Question;

/// Running counters for one quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub score: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
}

impl SessionStats {
    pub fn processed(&self) -> usize {
        self.correct_answers + self.incorrect_answers
    }

    fn record(&mut self, outcome: &Outcome) {
        if outcome.is_correct() {
            self.score += 1;
            self.correct_answers += 1;
        } else {
            self.incorrect_answers += 1;
        }
    }
}

/// Terminal classification of an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong { correct_answer: String },
    Invalid { correct_answer: String },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "Correct!"),
            Outcome::Wrong { correct_answer } => {
                write!(f, "Incorrect. The correct answer is: {}", correct_answer)
            }
            Outcome::Invalid { correct_answer } => write!(
                f,
                "Invalid input. Skipping question. The correct answer is: {}",
                correct_answer
            ),
        }
    }
}

/// Final statistics, computed over the questions that were actually answered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionReport {
    pub score: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub total: usize,
}

impl SessionReport {
    pub fn new(stats: SessionStats, total: usize) -> Self {
        Self {
            score: stats.score,
            correct_answers: stats.correct_answers,
            incorrect_answers: stats.incorrect_answers,
            total,
        }
    }

    pub fn correct_percentage(&self) -> f64 {
        percentage(self.correct_answers, self.total)
    }

    pub fn incorrect_percentage(&self) -> f64 {
        percentage(self.incorrect_answers, self.total)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quiz completed. Your score: {}/{} ({:.2}% correct, {:.2}% incorrect)",
            self.score,
            self.total,
            self.correct_percentage(),
            self.incorrect_percentage()
        )
    }
}

/// Drives a single operator through a list of questions.
pub struct QuizSession<R: Rng = StdRng> {
    rng: R,
    stats: SessionStats,
}

impl QuizSession<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for QuizSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn present(&mut self, question: &Question) -> ChoiceSet {
        ChoiceSet::shuffled(question, &mut self.rng)
    }

    /// Scores one raw answer line against the presented choices.
    pub fn answer(&mut self, question: &Question, choices: &ChoiceSet, raw: &str) -> Outcome {
        let outcome = match choices.select(raw) {
            Selection::Choice(text) if text == question.correct_answer => Outcome::Correct,
            Selection::Choice(_) => Outcome::Wrong {
                correct_answer: question.correct_answer.clone(),
            },
            Selection::Invalid => Outcome::Invalid {
                correct_answer: question.correct_answer.clone(),
            },
        };
        self.stats.record(&outcome);
        outcome
    }

    /// Runs every question in order, reading one line of input per question.
    ///
    /// Stops early when `input` reaches end of file or fails to read; questions
    /// that were never answered do not count towards the report total.
    pub fn run<I, O>(
        &mut self,
        questions: &[Question],
        input: &mut I,
        output: &mut O,
    ) -> io::Result<SessionReport>
    where
        I: BufRead,
        O: Write,
    {
        for (i, question) in questions.iter().enumerate() {
            writeln!(output, "Question {}: {}", i + 1, question.prompt)?;

            let choices = self.present(question);
            for (j, choice) in choices.as_slice().iter().enumerate() {
                writeln!(output, "{}. {}", j + 1, choice)?;
            }
            write!(output, "Your Answer: ")?;
            output.flush()?;

            let mut line = Vec::new();
            match input.read_until(b'\n', &mut line) {
                Ok(0) => {
                    writeln!(output)?;
                    warn!(
                        "Input closed after {} of {} questions",
                        self.stats().processed(),
                        questions.len()
                    );
                    break;
                }
                Ok(_) => {}
                Err(err) => {
                    writeln!(output)?;
                    warn!(
                        "Failed to read answer after {} of {} questions: {}",
                        self.stats().processed(),
                        questions.len(),
                        err
                    );
                    break;
                }
            }

            let line = String::from_utf8_lossy(&line);
            let outcome = self.answer(question, &choices, &line);
            debug!("Question {} answered: {:?}", i + 1, outcome);
            writeln!(output, "{}\n", outcome)?;
        }

        let report = self.report();
        writeln!(output, "{}", report)?;
        Ok(report)
    }

    pub fn report(&self) -> SessionReport {
        SessionReport::new(self.stats, self.stats.processed())
    }
}
