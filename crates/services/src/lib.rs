#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{FlowError, QuizSessionError};

pub use sessions::{
    Destination, QuestionPage, QuestionView, QuizFlow, QuizSessionService, ResultsPage,
    ResultsView, SessionProgress, Submission, parse_selection,
};
