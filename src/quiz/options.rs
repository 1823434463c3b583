use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// Question bank categories the operator may choose from, in menu order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<(u32, String)>,
}

impl CategoryTable {
    pub fn new(entries: Vec<(u32, String)>) -> Self {
        Self { entries }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|(known, _)| *known == id)
    }

    pub fn label(&self, id: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(id, label)| (*id, label.as_str()))
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(
            [
                (9, "General Knowledge"),
                (14, "TV"),
                (10, "Books"),
                (12, "Music"),
                (11, "Film"),
            ]
            .into_iter()
            .map(|(id, label)| (id, label.to_string()))
            .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOptions {
    pub num_questions: usize,
    pub difficulty: Difficulty,
    pub category: u32,
}

impl QuizOptions {
    /// Asks the operator for every option, repeating a question until the answer is acceptable.
    pub fn prompt<I, O>(
        categories: &CategoryTable,
        input: &mut I,
        output: &mut O,
    ) -> Result<Self, QuizError>
    where
        I: BufRead,
        O: Write,
    {
        let num_questions = loop {
            let line = ask(input, output, "Enter the number of questions: ")?;
            match line.trim().parse::<usize>() {
                Ok(n) if n > 0 => break n,
                _ => writeln!(output, "Error: Enter a positive number of questions.")?,
            }
        };

        let difficulty = loop {
            let line = ask(input, output, "Enter the difficulty (easy, medium, hard): ")?;
            match line.parse::<Difficulty>() {
                Ok(difficulty) => break difficulty,
                Err(()) => writeln!(
                    output,
                    "Error: Invalid difficulty. Choose from easy, medium, or hard."
                )?,
            }
        };

        let category = loop {
            writeln!(output, "Choose a category:")?;
            for (id, label) in categories.iter() {
                writeln!(output, "{}. {}", id, label)?;
            }
            let line = ask(input, output, "Enter the category number: ")?;
            match line.trim().parse::<u32>() {
                Ok(id) if categories.contains(id) => break id,
                _ => writeln!(
                    output,
                    "Error: Invalid category. Choose a valid category number."
                )?,
            }
        };

        Ok(Self {
            num_questions,
            difficulty,
            category,
        })
    }
}

fn ask<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> Result<String, QuizError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Err(QuizError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&line).into_owned())
}
