//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionIndex, QuizError};
use storage::repository::StorageError;

/// Errors emitted by the quiz flow controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error("invalid answer value: {value:?}")]
    InvalidInput { value: String },
    #[error("question {question} already has an answer")]
    AlreadyAnswered { question: QuestionIndex },
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted by the storage-backed session service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
