use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::ResultsPage;

use crate::context::AppContext;
use crate::routes::{Route, route_for};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::ResultsVm;

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_sessions = ctx.quiz_sessions();
    let session_id = ctx.session_id();
    let navigator = use_navigator();

    let resource = use_resource(move || {
        let quiz_sessions = quiz_sessions.clone();
        async move {
            quiz_sessions
                .results(session_id)
                .await
                .map_err(|err| ViewError::from_service(&err))
        }
    });

    use_effect(move || {
        if let Some(Ok(ResultsPage::Redirect(destination))) = &*resource.read() {
            navigator.replace(route_for(*destination));
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Results" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(ResultsPage::Show(view)) => rsx! {
                    ResultsDetails { results: ResultsVm::from(&view) }
                },
                ViewState::Ready(ResultsPage::Redirect(_)) => rsx! {
                    p { "Redirecting..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }

            Link { to: Route::Home {}, "Back to start" }
        }
    }
}

#[component]
fn ResultsDetails(results: ResultsVm) -> Element {
    rsx! {
        dl { class: "summary",
            dt { "Score" }
            dd { "{results.score} / {results.max_possible}" }

            dt { "Percentage" }
            dd { "{results.percentage}" }

            dt { "Answered" }
            dd { "{results.answered}" }
        }

        if !results.answers.is_empty() {
            h3 { "Your answers" }
            ul { class: "answers",
                for row in results.answers.clone() {
                    li { key: "{row.number}", "Question {row.number}: {row.selected}" }
                }
            }
        }
    }
}
