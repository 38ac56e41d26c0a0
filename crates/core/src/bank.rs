//! External question records and the built-in question bank.

use serde::{Deserialize, Serialize};

use crate::model::{OptionIndex, Question, QuestionError};

/// Shape of a question in the question source (built-in list or JSON file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answers: Vec<usize>,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(question: impl Into<String>, options: Vec<String>, correct_answers: Vec<usize>) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answers,
        }
    }

    /// # Errors
    ///
    /// Returns `QuestionError` if the record violates a question invariant.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        let correct = self
            .correct_answers
            .into_iter()
            .map(OptionIndex::new)
            .collect();
        Question::new(self.question, self.options, correct)
    }
}

fn record(question: &str, options: [&str; 4], correct_answers: &[usize]) -> QuestionRecord {
    QuestionRecord::new(
        question,
        options.iter().map(|o| (*o).to_string()).collect(),
        correct_answers.to_vec(),
    )
}

/// The seven arithmetic questions shipped with the app.
#[must_use]
pub fn sample_questions() -> Vec<QuestionRecord> {
    vec![
        record(
            "Which of these are prime numbers?",
            ["2", "4", "7", "11"],
            &[0, 2, 3],
        ),
        record(
            "What is the value of x in the equation 3x + 7 = 22?",
            ["3", "5", "6", "4"],
            &[1],
        ),
        record(
            "Identify the multiples of 4 from the following set of numbers: {8, 10, 12, 14, 16}.",
            ["8", "10", "12", "16"],
            &[0, 2, 3],
        ),
        record(
            "What is the slope of the line that passes through the points (2,3) and (5,11)?",
            ["2", "3", "4", "5"],
            &[1],
        ),
        record(
            "What is the sum of the interior angles of a hexagon?",
            ["540", "720", "900", "1080"],
            &[1],
        ),
        record(
            "If the perimeter of a rectangle is 50 cm and the length is 15 cm, what is the width?",
            ["10", "12.5", "20", "10.5"],
            &[0],
        ),
        record(
            "What is the factorial of 0 and 5 respectively?",
            ["0, 210", "1, 210", "1, 120", "0, 120"],
            &[2],
        ),
    ]
}
