mod flow;
mod input;
mod progress;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{FlowError, QuizSessionError};
pub use flow::{QuizFlow, Submission};
pub use input::parse_selection;
pub use progress::SessionProgress;
pub use view::{Destination, QuestionPage, QuestionView, ResultsPage, ResultsView};
pub use workflow::QuizSessionService;
