mod question_vm;
mod results_vm;

pub use question_vm::{OptionVm, QuestionVm, toggle_selection};
pub use results_vm::{AnswerRowVm, ResultsVm, format_score};
