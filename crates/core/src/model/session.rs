use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{OptionIndex, QuestionIndex};

/// Selected options per answered question.
///
/// Keys serialize as strings (`"0"`, `"1"`, ...) in JSON payloads. An entry is
/// written once, when its question is submitted, and never replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<QuestionIndex, Vec<OptionIndex>>);

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record the selection for a question. Returns `false` and leaves the sheet
    /// untouched if the question was already answered.
    pub fn record(&mut self, question: QuestionIndex, selected: Vec<OptionIndex>) -> bool {
        if self.0.contains_key(&question) {
            return false;
        }
        self.0.insert(question, selected);
        true
    }

    #[must_use]
    pub fn get(&self, question: QuestionIndex) -> Option<&[OptionIndex]> {
        self.0.get(&question).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionIndex, &[OptionIndex])> {
        self.0.iter().map(|(q, sel)| (*q, sel.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(QuestionIndex, Vec<OptionIndex>)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (QuestionIndex, Vec<OptionIndex>)>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for (question, selected) in iter {
            sheet.record(question, selected);
        }
        sheet
    }
}

/// Where a session stands relative to a quiz of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Start,
    InProgress(QuestionIndex),
    Finished,
}

/// Per-user progress through a quiz run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    current_question: usize,
    answers: AnswerSheet,
}

impl SessionState {
    /// A fresh run positioned on the first question.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a session from a stored payload.
    #[must_use]
    pub fn from_persisted(current_question: usize, answers: AnswerSheet) -> Self {
        Self {
            current_question,
            answers,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> QuestionIndex {
        QuestionIndex::new(self.current_question)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn phase(&self, total_questions: usize) -> SessionPhase {
        if self.current_question < total_questions {
            SessionPhase::InProgress(self.current_question())
        } else {
            SessionPhase::Finished
        }
    }

    /// Store the selection for the current question and move to the next one.
    /// Returns the index that was answered, or `None` without advancing if the
    /// current question already has an answer.
    pub fn record_and_advance(&mut self, selected: Vec<OptionIndex>) -> Option<QuestionIndex> {
        let answered = self.current_question();
        if !self.answers.record(answered, selected) {
            return None;
        }
        self.current_question += 1;
        Some(answered)
    }
}
