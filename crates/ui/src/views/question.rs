use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::QuestionPage;

use crate::context::AppContext;
use crate::routes::route_for;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{OptionVm, QuestionVm, toggle_selection};

/// Current question of the run. Viewing never changes the session; only the
/// submit button does.
#[component]
pub fn QuestionView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_sessions = ctx.quiz_sessions();
    let session_id = ctx.session_id();
    let navigator = use_navigator();

    let mut revision = use_signal(|| 0_u32);
    let mut selection = use_signal(Vec::<usize>::new);
    let mut submit_error = use_signal(|| None::<ViewError>);

    let loader = quiz_sessions.clone();
    let resource = use_resource(move || {
        let quiz_sessions = loader.clone();
        // Re-run whenever a submission advances the session.
        let _ = revision();
        async move {
            quiz_sessions
                .view_question(session_id)
                .await
                .map_err(|err| ViewError::from_service(&err))
        }
    });

    use_effect(move || {
        if let Some(Ok(QuestionPage::Redirect(destination))) = &*resource.read() {
            navigator.replace(route_for(*destination));
        }
    });

    let on_change = move |next: Vec<usize>| selection.set(next);
    let on_submit = move |()| {
        let quiz_sessions = quiz_sessions.clone();
        let raw: Vec<String> = selection.read().iter().map(ToString::to_string).collect();
        spawn(async move {
            match quiz_sessions.submit(session_id, &raw).await {
                Ok(QuestionPage::Show(_)) => {
                    selection.set(Vec::new());
                    submit_error.set(None);
                    revision += 1;
                }
                Ok(QuestionPage::Redirect(destination)) => {
                    navigator.push(route_for(destination));
                }
                Err(err) => submit_error.set(Some(ViewError::from_service(&err))),
            }
        });
    };

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(QuestionPage::Show(view)) => rsx! {
                    QuestionForm {
                        vm: QuestionVm::from(&view),
                        selected: selection(),
                        error: submit_error(),
                        on_change,
                        on_submit,
                    }
                },
                ViewState::Ready(QuestionPage::Redirect(_)) => rsx! {
                    p { "Redirecting..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn QuestionForm(
    vm: QuestionVm,
    selected: Vec<usize>,
    error: Option<ViewError>,
    on_change: EventHandler<Vec<usize>>,
    on_submit: EventHandler<()>,
) -> Element {
    let is_multiple = vm.is_multiple;

    rsx! {
        form { class: "question",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            h2 { "{vm.heading}" }
            p { class: "question-text", "{vm.text}" }
            p { class: "hint", "{vm.hint}" }
            ul { class: "options",
                for option in vm.options.clone() {
                    OptionRow {
                        key: "{option.index}",
                        checked: selected.contains(&option.index),
                        input_kind: vm.input_kind,
                        option: option.clone(),
                        on_select: {
                            let selected = selected.clone();
                            move |index: usize| {
                                on_change.call(toggle_selection(&selected, index, is_multiple));
                            }
                        },
                    }
                }
            }
            if let Some(err) = error {
                p { class: "error", "{err.message()}" }
            }
            button { r#type: "submit", class: "primary", "Submit answer" }
        }
    }
}

#[component]
fn OptionRow(
    option: OptionVm,
    input_kind: &'static str,
    checked: bool,
    on_select: EventHandler<usize>,
) -> Element {
    let index = option.index;

    rsx! {
        li {
            input {
                r#type: input_kind,
                id: "{option.input_id}",
                name: "answer",
                value: "{option.index}",
                checked,
                onclick: move |_| on_select.call(index),
            }
            label { r#for: "{option.input_id}", "{option.label}" }
        }
    }
}
