use dioxus::prelude::*;
use services::{FlowError, QuizSessionError};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidAnswer,
    CorruptSession,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_service(err: &QuizSessionError) -> Self {
        match err {
            QuizSessionError::Flow(FlowError::InvalidInput { .. }) => Self::InvalidAnswer,
            QuizSessionError::Flow(_) => Self::CorruptSession,
            _ => {
                warn!(error = %err, "quiz session request failed");
                Self::Unknown
            }
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidAnswer => "That answer could not be read. Please choose again.",
            Self::CorruptSession => "Your quiz session is no longer valid. Please start over.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
