use quiz_core::model::{AnswerSheet, Question, QuestionIndex};

use super::progress::SessionProgress;

/// Page a request should be sent to instead of the one it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Start,
    Results,
}

/// Presentation-agnostic data for rendering one question.
///
/// No HTML and no formatting; the UI decides how to show it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub index: QuestionIndex,
    /// 1-based position shown to the user.
    pub number: usize,
    pub text: String,
    pub options: Vec<String>,
    pub is_multiple: bool,
    pub progress: SessionProgress,
}

impl QuestionView {
    #[must_use]
    pub fn from_question(index: QuestionIndex, question: &Question, total: usize) -> Self {
        Self {
            index,
            number: index.number(),
            text: question.text().to_owned(),
            options: question.options().to_vec(),
            is_multiple: question.is_multiple(),
            progress: SessionProgress::new(total, index.value()),
        }
    }
}

/// Final (or running) score for a session, computed fresh on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// Raw total; may be negative.
    pub score: f64,
    pub max_possible: f64,
    pub percentage: f64,
    pub answers: AnswerSheet,
    pub progress: SessionProgress,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionPage {
    Show(QuestionView),
    Redirect(Destination),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPage {
    Show(ResultsView),
    Redirect(Destination),
}
