mod home;
mod question;
mod results;
mod start;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use question::QuestionView;
pub use results::ResultsView;
pub use start::StartQuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
