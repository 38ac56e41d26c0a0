use thiserror::Error;

use crate::bank::{QuestionRecord, sample_questions};
use crate::model::{AnswerSheet, Question, QuestionError, QuestionIndex};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question index {index} is out of range for {total} questions")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("invalid question at position {index}: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered, immutable question list plus the aggregate scoring rules.
///
/// Built once at startup and shared read-only; the position of a question in the
/// list is its canonical index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Build a quiz from external records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuestion` for the first record that fails validation.
    pub fn from_records(
        records: impl IntoIterator<Item = QuestionRecord>,
    ) -> Result<Self, QuizError> {
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_question()
                    .map_err(|source| QuizError::InvalidQuestion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(questions))
    }

    /// The built-in question bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuestion` if a built-in record is malformed.
    pub fn sample() -> Result<Self, QuizError> {
        Self::from_records(sample_questions())
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// # Errors
    ///
    /// Returns `QuizError::IndexOutOfRange` if `index` is not in `[0, total)`.
    pub fn question(&self, index: QuestionIndex) -> Result<&Question, QuizError> {
        self.questions
            .get(index.value())
            .ok_or(QuizError::IndexOutOfRange {
                index: index.value(),
                total: self.questions.len(),
            })
    }

    /// Sum of per-question scores over the answered questions.
    ///
    /// Unanswered questions contribute nothing; the sheet may be partial or sparse.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::IndexOutOfRange` if the sheet references a question that
    /// does not exist.
    pub fn calculate_total_score(&self, answers: &AnswerSheet) -> Result<f64, QuizError> {
        answers.iter().try_fold(0.0, |total, (index, selected)| {
            Ok::<_, QuizError>(total + self.question(index)?.calculate_score(selected))
        })
    }

    #[must_use]
    pub fn max_possible_score(&self) -> f64 {
        self.questions.iter().map(Question::max_score).sum()
    }

    /// Score as a percentage of the maximum, in `[0, 100]`.
    ///
    /// Negative totals report 0, as does a quiz without questions.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError::IndexOutOfRange` from `calculate_total_score`.
    pub fn calculate_percentage(&self, answers: &AnswerSheet) -> Result<f64, QuizError> {
        let total = self.calculate_total_score(answers)?;
        if total < 0.0 {
            return Ok(0.0);
        }
        let max_possible = self.max_possible_score();
        if max_possible <= 0.0 {
            return Ok(0.0);
        }
        Ok((total / max_possible * 100.0).clamp(0.0, 100.0))
    }
}
