use std::sync::Arc;

use services::QuizSessionService;
use storage::repository::SessionId;

pub trait UiApp: Send + Sync {
    fn quiz_sessions(&self) -> Arc<QuizSessionService>;

    /// Session key of this client, the equivalent of a session cookie.
    fn session_id(&self) -> SessionId;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_sessions: Arc<QuizSessionService>,
    session_id: SessionId,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_sessions: app.quiz_sessions(),
            session_id: app.session_id(),
        }
    }

    #[must_use]
    pub fn quiz_sessions(&self) -> Arc<QuizSessionService> {
        Arc::clone(&self.quiz_sessions)
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
