use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::format_score;

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    total_questions: usize,
    max_possible: String,
}

/// Entry page. Visiting it discards any run in progress.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_sessions = ctx.quiz_sessions();
    let session_id = ctx.session_id();

    let resource = use_resource(move || {
        let quiz_sessions = quiz_sessions.clone();
        async move {
            quiz_sessions
                .reset(session_id)
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            let quiz = quiz_sessions.quiz();
            Ok::<_, ViewError>(HomeData {
                total_questions: quiz.total_questions(),
                max_possible: format_score(quiz.max_possible_score()),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Welcome" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    p { "{data.total_questions} questions, worth up to {data.max_possible} points." }
                    p { class: "hint",
                        "Single-answer questions score 1 (wrong: -0.5). "
                        "Multi-answer questions score 2 for the exact set (otherwise -1). "
                        "Skipped questions score 0."
                    }
                    Link { class: "start-link", to: Route::StartQuiz {}, "Start quiz" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}
