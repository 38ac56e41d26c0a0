use std::collections::HashSet;

use thiserror::Error;

use crate::model::OptionIndex;

//
// ─── QUESTION ERRORS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text must not be empty")]
    EmptyText,

    #[error("question must have at least one option")]
    NoOptions,

    #[error("question must have at least one correct answer")]
    NoCorrectAnswers,

    #[error("correct answer {index} is out of range for {options} options")]
    CorrectAnswerOutOfRange { index: usize, options: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One quiz item and its scoring rule.
///
/// A question with more than one correct option is a multi-answer question and
/// only scores when the exact set is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_answers: Vec<OptionIndex>,
    is_multiple: bool,
}

impl Question {
    pub const SINGLE_CORRECT: f64 = 1.0;
    pub const SINGLE_WRONG: f64 = -0.5;
    pub const MULTIPLE_CORRECT: f64 = 2.0;
    pub const MULTIPLE_WRONG: f64 = -1.0;

    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, there are no options, no correct
    /// answers, or a correct answer does not point at an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answers: Vec<OptionIndex>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if correct_answers.is_empty() {
            return Err(QuestionError::NoCorrectAnswers);
        }
        if let Some(bad) = correct_answers
            .iter()
            .find(|index| index.value() >= options.len())
        {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                index: bad.value(),
                options: options.len(),
            });
        }

        let is_multiple = correct_answers.len() > 1;
        Ok(Self {
            text,
            options,
            correct_answers,
            is_multiple,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answers(&self) -> &[OptionIndex] {
        &self.correct_answers
    }

    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.is_multiple
    }

    #[must_use]
    pub fn has_option(&self, index: OptionIndex) -> bool {
        index.value() < self.options.len()
    }

    /// Score a selection of options.
    ///
    /// An empty selection scores 0. Multi-answer questions compare sets, so order and
    /// duplicates do not matter. Single-answer questions only look at the first
    /// selected option.
    #[must_use]
    pub fn calculate_score(&self, selected: &[OptionIndex]) -> f64 {
        let Some(first) = selected.first() else {
            return 0.0;
        };

        if self.is_multiple {
            let chosen: HashSet<OptionIndex> = selected.iter().copied().collect();
            let correct: HashSet<OptionIndex> = self.correct_answers.iter().copied().collect();
            if chosen == correct {
                Self::MULTIPLE_CORRECT
            } else {
                Self::MULTIPLE_WRONG
            }
        } else if *first == self.correct_answers[0] {
            Self::SINGLE_CORRECT
        } else {
            Self::SINGLE_WRONG
        }
    }

    /// Best achievable score for this question; only used for the quiz-wide ceiling.
    #[must_use]
    pub fn max_score(&self) -> f64 {
        if self.is_multiple {
            Self::MULTIPLE_CORRECT
        } else {
            Self::SINGLE_CORRECT
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
