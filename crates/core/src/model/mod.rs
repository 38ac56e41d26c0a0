mod ids;
mod question;
mod quiz;
mod session;

pub use ids::{OptionIndex, ParseIndexError, QuestionIndex};
pub use question::{Question, QuestionError};
pub use quiz::{Quiz, QuizError};
pub use session::{AnswerSheet, SessionPhase, SessionState};
