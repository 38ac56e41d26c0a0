use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::route_for_page;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Begins a fresh run, then hands over to the question page.
#[component]
pub fn StartQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_sessions = ctx.quiz_sessions();
    let session_id = ctx.session_id();
    let navigator = use_navigator();

    let resource = use_resource(move || {
        let quiz_sessions = quiz_sessions.clone();
        async move {
            quiz_sessions
                .start(session_id)
                .await
                .map_err(|err| ViewError::from_service(&err))
        }
    });

    use_effect(move || {
        if let Some(Ok(page)) = &*resource.read() {
            navigator.replace(route_for_page(page));
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                _ => rsx! {
                    p { "Starting quiz..." }
                },
            }
        }
    }
}
