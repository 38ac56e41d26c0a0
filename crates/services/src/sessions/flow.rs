use std::sync::Arc;

use tracing::debug;

use quiz_core::model::{Quiz, QuizError, SessionPhase, SessionState};

use super::input::parse_selection;
use super::progress::SessionProgress;
use super::view::{Destination, QuestionPage, QuestionView, ResultsPage, ResultsView};
use crate::error::FlowError;

//
// ─── SUBMISSION OUTCOME ────────────────────────────────────────────────────────
//

/// Result of submitting an answer, carrying the state the caller must store.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Advanced {
        state: SessionState,
        next: QuestionView,
    },
    Finished {
        state: SessionState,
    },
    Redirect(Destination),
}

impl Submission {
    /// The updated state, if the submission changed anything.
    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        match self {
            Submission::Advanced { state, .. } | Submission::Finished { state } => Some(state),
            Submission::Redirect(_) => None,
        }
    }

    /// The page the user should see next.
    #[must_use]
    pub fn page(&self) -> QuestionPage {
        match self {
            Submission::Advanced { next, .. } => QuestionPage::Show(next.clone()),
            Submission::Finished { .. } => QuestionPage::Redirect(Destination::Results),
            Submission::Redirect(to) => QuestionPage::Redirect(*to),
        }
    }
}

//
// ─── FLOW ──────────────────────────────────────────────────────────────────────
//

/// Start → question loop → results state machine over an immutable quiz.
///
/// Pure: every operation takes the current session (or `None` when the client has
/// none) and returns what to show plus any new state. Persisting that state is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    quiz: Arc<Quiz>,
}

impl QuizFlow {
    #[must_use]
    pub fn new(quiz: Arc<Quiz>) -> Self {
        Self { quiz }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// A fresh run: first question, no answers.
    #[must_use]
    pub fn begin(&self) -> SessionState {
        debug!(total = self.quiz.total_questions(), "quiz run started");
        SessionState::new()
    }

    /// Where the session stands.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Quiz` if the session points past the end of the quiz,
    /// which only a corrupt payload can do.
    pub fn phase(&self, state: Option<&SessionState>) -> Result<SessionPhase, FlowError> {
        let Some(state) = state else {
            return Ok(SessionPhase::Start);
        };
        let total = self.quiz.total_questions();
        let current = state.current_question().value();
        if current > total {
            return Err(QuizError::IndexOutOfRange {
                index: current,
                total,
            }
            .into());
        }
        Ok(state.phase(total))
    }

    /// Show the current question without touching the session.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Quiz` for a corrupt session.
    pub fn view_question(&self, state: Option<&SessionState>) -> Result<QuestionPage, FlowError> {
        match self.phase(state)? {
            SessionPhase::Start => Ok(QuestionPage::Redirect(Destination::Start)),
            SessionPhase::Finished => Ok(QuestionPage::Redirect(Destination::Results)),
            SessionPhase::InProgress(index) => {
                let question = self.quiz.question(index)?;
                Ok(QuestionPage::Show(QuestionView::from_question(
                    index,
                    question,
                    self.quiz.total_questions(),
                )))
            }
        }
    }

    /// Record raw answer values for the current question and advance.
    ///
    /// Missing and finished sessions redirect before the values are looked at.
    /// Values are validated before the session changes.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidInput` for values that are not integers or do not
    /// name an option of the current question, and `FlowError::Quiz` or
    /// `FlowError::AlreadyAnswered` for a corrupt session.
    pub fn submit<S: AsRef<str>>(
        &self,
        state: Option<&SessionState>,
        raw: &[S],
    ) -> Result<Submission, FlowError> {
        let (state, index) = match (state, self.phase(state)?) {
            (Some(state), SessionPhase::InProgress(index)) => (state, index),
            (_, SessionPhase::Finished) => return Ok(Submission::Redirect(Destination::Results)),
            _ => return Ok(Submission::Redirect(Destination::Start)),
        };

        let selected = parse_selection(raw)?;

        let question = self.quiz.question(index)?;
        if let Some(bad) = selected.iter().find(|o| !question.has_option(**o)) {
            return Err(FlowError::InvalidInput {
                value: bad.to_string(),
            });
        }

        let mut next_state = state.clone();
        if next_state.record_and_advance(selected).is_none() {
            return Err(FlowError::AlreadyAnswered { question: index });
        }
        debug!(question = index.number(), "answer recorded");

        match self.phase(Some(&next_state))? {
            SessionPhase::InProgress(next) => {
                let view = QuestionView::from_question(
                    next,
                    self.quiz.question(next)?,
                    self.quiz.total_questions(),
                );
                Ok(Submission::Advanced {
                    state: next_state,
                    next: view,
                })
            }
            SessionPhase::Finished | SessionPhase::Start => {
                Ok(Submission::Finished { state: next_state })
            }
        }
    }

    /// Score the session from its recorded answers.
    ///
    /// Available for any live session, including one still in progress.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Quiz` if a recorded answer names a question outside the quiz.
    pub fn results(&self, state: Option<&SessionState>) -> Result<ResultsPage, FlowError> {
        let Some(state) = state else {
            return Ok(ResultsPage::Redirect(Destination::Start));
        };
        let answers = state.answers();
        let score = self.quiz.calculate_total_score(answers)?;
        let percentage = self.quiz.calculate_percentage(answers)?;
        let max_possible = self.quiz.max_possible_score();

        Ok(ResultsPage::Show(ResultsView {
            score,
            max_possible,
            percentage,
            answers: answers.clone(),
            progress: SessionProgress::new(self.quiz.total_questions(), answers.len()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{AnswerSheet, OptionIndex, Question, QuestionIndex};

    fn sel(values: &[usize]) -> Vec<OptionIndex> {
        values.iter().copied().map(OptionIndex::new).collect()
    }

    fn flow() -> QuizFlow {
        let options = || vec!["a".to_string(), "b".to_string(), "c".to_string()];
        QuizFlow::new(Arc::new(Quiz::new(vec![
            Question::new("Q0", options(), sel(&[1])).unwrap(),
            Question::new("Q1", options(), sel(&[0, 2])).unwrap(),
        ])))
    }

    fn advance(flow: &QuizFlow, state: &SessionState, raw: &[&str]) -> Submission {
        flow.submit(Some(state), raw).unwrap()
    }

    #[test]
    fn missing_session_redirects_to_start() {
        let flow = flow();
        assert_eq!(
            flow.view_question(None).unwrap(),
            QuestionPage::Redirect(Destination::Start)
        );
        assert_eq!(
            flow.results(None).unwrap(),
            ResultsPage::Redirect(Destination::Start)
        );
        assert_eq!(
            flow.submit(None, &["1"]).unwrap(),
            Submission::Redirect(Destination::Start)
        );
    }

    #[test]
    fn malformed_values_without_live_run_still_redirect() {
        let flow = flow();
        assert_eq!(
            flow.submit(None, &["abc"]).unwrap(),
            Submission::Redirect(Destination::Start)
        );

        let finished = SessionState::from_persisted(2, AnswerSheet::new());
        assert_eq!(
            flow.submit(Some(&finished), &["abc", "-1"]).unwrap(),
            Submission::Redirect(Destination::Results)
        );
    }

    #[test]
    fn already_answered_position_is_rejected() {
        let flow = flow();
        let answers: AnswerSheet = [(QuestionIndex::new(0), sel(&[1]))].into_iter().collect();
        let state = SessionState::from_persisted(0, answers);

        let err = flow.submit(Some(&state), &["2"]).unwrap_err();
        assert!(matches!(
            err,
            FlowError::AlreadyAnswered { question } if question == QuestionIndex::new(0)
        ));
    }

    #[test]
    fn viewing_is_idempotent() {
        let flow = flow();
        let state = flow.begin();
        let first = flow.view_question(Some(&state)).unwrap();
        let second = flow.view_question(Some(&state)).unwrap();
        assert_eq!(first, second);
        assert_eq!(state, SessionState::new());

        let QuestionPage::Show(view) = first else {
            panic!("expected question");
        };
        assert_eq!(view.number, 1);
        assert_eq!(view.text, "Q0");
        assert!(!view.is_multiple);
        assert_eq!(view.progress.total, 2);
    }

    #[test]
    fn full_run_scores_all_correct() {
        let flow = flow();
        let state = flow.begin();

        let Submission::Advanced { state, next } = advance(&flow, &state, &["1"]) else {
            panic!("expected next question");
        };
        assert_eq!(next.number, 2);
        assert!(next.is_multiple);

        let Submission::Finished { state } = advance(&flow, &state, &["0", "2"]) else {
            panic!("expected finish");
        };
        assert_eq!(
            flow.view_question(Some(&state)).unwrap(),
            QuestionPage::Redirect(Destination::Results)
        );

        let ResultsPage::Show(results) = flow.results(Some(&state)).unwrap() else {
            panic!("expected results");
        };
        assert_eq!(results.score, 3.0);
        assert_eq!(results.max_possible, 3.0);
        assert_eq!(results.percentage, 100.0);
        assert!(results.progress.is_complete);
    }

    #[test]
    fn wrong_and_incomplete_answers_floor_percentage() {
        let flow = flow();
        let state = flow.begin();
        let state = advance(&flow, &state, &["0"]).state().cloned().unwrap();
        let state = advance(&flow, &state, &["0"]).state().cloned().unwrap();

        let ResultsPage::Show(results) = flow.results(Some(&state)).unwrap() else {
            panic!("expected results");
        };
        assert_eq!(results.score, -1.5);
        assert_eq!(results.percentage, 0.0);
    }

    #[test]
    fn empty_submission_records_zero_score() {
        let flow = flow();
        let empty: [&str; 0] = [];
        let state = flow
            .submit(Some(&flow.begin()), &empty)
            .unwrap()
            .state()
            .cloned()
            .unwrap();
        assert_eq!(
            state.answers().get(QuestionIndex::new(0)),
            Some(&[][..])
        );

        let ResultsPage::Show(results) = flow.results(Some(&state)).unwrap() else {
            panic!("expected results");
        };
        assert_eq!(results.score, 0.0);
        assert_eq!(results.progress.answered, 1);
        assert!(!results.progress.is_complete);
    }

    #[test]
    fn invalid_input_leaves_state_untouched() {
        let flow = flow();
        let state = flow.begin();

        let err = flow.submit(Some(&state), &["abc"]).unwrap_err();
        assert!(matches!(err, FlowError::InvalidInput { value } if value == "abc"));

        let err = flow.submit(Some(&state), &["7"]).unwrap_err();
        assert!(matches!(err, FlowError::InvalidInput { value } if value == "7"));
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn submitting_after_finish_redirects_to_results() {
        let flow = flow();
        let state = SessionState::from_persisted(2, AnswerSheet::new());
        assert_eq!(
            flow.submit(Some(&state), &["1"]).unwrap(),
            Submission::Redirect(Destination::Results)
        );
    }

    #[test]
    fn corrupt_sessions_fail_fast() {
        let flow = flow();
        let past_end = SessionState::from_persisted(5, AnswerSheet::new());
        assert!(matches!(
            flow.view_question(Some(&past_end)),
            Err(FlowError::Quiz(QuizError::IndexOutOfRange { index: 5, total: 2 }))
        ));

        let bad_key: AnswerSheet = [(QuestionIndex::new(9), sel(&[0]))].into_iter().collect();
        let state = SessionState::from_persisted(1, bad_key);
        assert!(matches!(
            flow.results(Some(&state)),
            Err(FlowError::Quiz(QuizError::IndexOutOfRange { index: 9, .. }))
        ));
    }
}
