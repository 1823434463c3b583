use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::Question;

/// The answer options of one question, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    choices: Vec<String>,
}

/// What the operator picked from a `ChoiceSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Choice(&'a str),
    Invalid,
}

impl ChoiceSet {
    /// Combines the distractors with the correct answer and shuffles them together.
    pub fn shuffled<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let mut choices = Vec::with_capacity(question.incorrect_answers.len() + 1);
        choices.extend(question.incorrect_answers.iter().cloned());
        choices.push(question.correct_answer.clone());
        choices.shuffle(rng);
        Self { choices }
    }

    /// Keeps the given order as is.
    #[cfg(test)]
    pub fn from_ordered(choices: Vec<String>) -> Self {
        Self { choices }
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.choices
    }

    /// Interprets a raw line as a 1-based index into the choices.
    pub fn select(&self, raw: &str) -> Selection<'_> {
        match raw.trim().parse::<usize>() {
            Ok(index) if index >= 1 && index <= self.len() => {
                Selection::Choice(&self.choices[index - 1])
            }
            _ => Selection::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn capitals() -> Question {
        Question::new(
            "What is the capital of France?",
            "Paris",
            vec!["London".into(), "Berlin".into(), "Madrid".into()],
        )
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn shuffled_keeps_every_answer_exactly_once() {
        let question = capitals();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let set = ChoiceSet::shuffled(&question, &mut rng);
            assert_eq!(set.len(), question.incorrect_answers.len() + 1);
            let mut expected = question.incorrect_answers.clone();
            expected.push(question.correct_answer.clone());
            assert_eq!(sorted(set.as_slice().to_vec()), sorted(expected));
            assert_eq!(
                set.as_slice()
                    .iter()
                    .filter(|c| **c == question.correct_answer)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn shuffled_produces_more_than_one_ordering() {
        let question = capitals();
        let mut rng = StdRng::seed_from_u64(42);

        let orderings: HashSet<Vec<String>> = (0..200)
            .map(|_| ChoiceSet::shuffled(&question, &mut rng).as_slice().to_vec())
            .collect();

        assert!(orderings.len() > 1);
    }

    #[test]
    fn correct_answer_lands_in_every_position() {
        let question = capitals();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];

        for _ in 0..400 {
            let set = ChoiceSet::shuffled(&question, &mut rng);
            let pos = set
                .as_slice()
                .iter()
                .position(|c| c == "Paris")
                .unwrap();
            seen[pos] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn no_distractors_gives_single_choice() {
        let question = Question::new("Is water wet?", "Yes", vec![]);
        let set = ChoiceSet::shuffled(&question, &mut StdRng::seed_from_u64(1));
        assert_eq!(set.as_slice(), ["Yes".to_string()]);
    }

    #[test]
    fn duplicate_texts_are_tolerated() {
        let question = Question::new("Pick one", "A", vec!["A".into(), "B".into()]);
        let set = ChoiceSet::shuffled(&question, &mut StdRng::seed_from_u64(9));
        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice().iter().filter(|c| *c == "A").count(), 2);
    }

    #[test]
    fn select_reads_one_based_index() {
        let set = ChoiceSet::from_ordered(vec!["Paris".into(), "London".into()]);
        assert_eq!(set.select("1"), Selection::Choice("Paris"));
        assert_eq!(set.select("  2 \n"), Selection::Choice("London"));
    }

    #[test]
    fn select_rejects_out_of_range_and_garbage() {
        let set = ChoiceSet::from_ordered(vec!["Paris".into(), "London".into()]);
        for raw in ["0", "3", "9", "-1", "abc", "", "   ", "1.5", "1 2"] {
            assert_eq!(set.select(raw), Selection::Invalid, "input {raw:?}");
        }
    }
}
