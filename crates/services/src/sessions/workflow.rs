use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use quiz_core::model::{Quiz, SessionState};
use storage::repository::{SessionId, SessionRecord, SessionRepository};

use super::flow::{QuizFlow, Submission};
use super::view::{Destination, QuestionPage, ResultsPage};
use crate::Clock;
use crate::error::QuizSessionError;

/// Orchestrates quiz runs against the session store.
///
/// Each call loads the client's session, runs one flow transition, and writes any
/// new state back before returning.
#[derive(Clone)]
pub struct QuizSessionService {
    clock: Clock,
    flow: QuizFlow,
    sessions: Arc<dyn SessionRepository>,
    session_ttl: Duration,
}

impl QuizSessionService {
    pub const DEFAULT_SESSION_TTL_MINS: i64 = 60;

    #[must_use]
    pub fn new(clock: Clock, quiz: Arc<Quiz>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            clock,
            flow: QuizFlow::new(quiz),
            sessions,
            session_ttl: Duration::minutes(Self::DEFAULT_SESSION_TTL_MINS),
        }
    }

    #[must_use]
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        self.flow.quiz()
    }

    /// Fresh key for a client without one.
    #[must_use]
    pub fn new_session_id() -> SessionId {
        SessionId::new_random()
    }

    /// Forget the client's run (home page).
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Storage` on repository failures.
    pub async fn reset(&self, id: SessionId) -> Result<(), QuizSessionError> {
        self.sessions.remove_session(id).await?;
        Ok(())
    }

    /// Begin a new run, replacing any previous one, and return the first page.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError` on storage or flow failures.
    pub async fn start(&self, id: SessionId) -> Result<QuestionPage, QuizSessionError> {
        let state = self.flow.begin();
        self.store(id, &state).await?;
        info!(session = %id, "quiz started");
        Ok(self.flow.view_question(Some(&state))?)
    }

    /// Show the current question. Never mutates the session.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError` on storage failures or a corrupt session.
    pub async fn view_question(&self, id: SessionId) -> Result<QuestionPage, QuizSessionError> {
        let state = self.load_live(id).await?;
        Ok(self.flow.view_question(state.as_ref())?)
    }

    /// Submit raw answer values for the current question.
    ///
    /// Returns the next question, or a redirect to results once the last one is
    /// answered.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Flow` for malformed values or a corrupt session and
    /// `QuizSessionError::Storage` on repository failures.
    pub async fn submit<S: AsRef<str>>(
        &self,
        id: SessionId,
        raw: &[S],
    ) -> Result<QuestionPage, QuizSessionError> {
        let state = self.load_live(id).await?;
        let submission = self.flow.submit(state.as_ref(), raw)?;
        if let Some(next_state) = submission.state() {
            self.store(id, next_state).await?;
        }
        if let Submission::Finished { state } = &submission {
            info!(
                session = %id,
                answered = state.answers().len(),
                "quiz finished"
            );
        }
        Ok(submission.page())
    }

    /// Score the client's run.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError` on storage failures or a corrupt session.
    pub async fn results(&self, id: SessionId) -> Result<ResultsPage, QuizSessionError> {
        let state = self.load_live(id).await?;
        let page = self.flow.results(state.as_ref())?;
        if page == ResultsPage::Redirect(Destination::Start) {
            warn!(session = %id, "results requested without a session");
        }
        Ok(page)
    }

    async fn store(&self, id: SessionId, state: &SessionState) -> Result<(), QuizSessionError> {
        let record = SessionRecord::new(state.clone(), self.clock.now());
        self.sessions.save_session(id, &record).await?;
        Ok(())
    }

    /// Load the session, dropping it if it has outlived the TTL.
    async fn load_live(&self, id: SessionId) -> Result<Option<SessionState>, QuizSessionError> {
        let Some(record) = self.sessions.load_session(id).await? else {
            return Ok(None);
        };
        if self.clock.has_elapsed(record.updated_at, self.session_ttl) {
            warn!(session = %id, updated_at = %record.updated_at, "session expired");
            self.sessions.remove_session(id).await?;
            return Ok(None);
        }
        Ok(Some(record.state))
    }
}
