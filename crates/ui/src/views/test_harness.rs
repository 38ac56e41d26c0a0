use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::Quiz;
use quiz_core::time::fixed_clock;
use services::QuizSessionService;
use storage::repository::{SessionId, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, QuestionView, ResultsView};

#[derive(Clone)]
struct TestApp {
    quiz_sessions: Arc<QuizSessionService>,
    session_id: SessionId,
}

impl UiApp for TestApp {
    fn quiz_sessions(&self) -> Arc<QuizSessionService> {
        Arc::clone(&self.quiz_sessions)
    }

    fn session_id(&self) -> SessionId {
        self.session_id
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Question,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Question => rsx! { QuestionView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

/// Everything a view test needs: the services behind the views and the dom.
pub struct QuizFixture {
    pub storage: Storage,
    pub quiz_sessions: Arc<QuizSessionService>,
    pub session_id: SessionId,
}

impl QuizFixture {
    pub fn sample() -> Self {
        let storage = Storage::in_memory();
        let quiz = Arc::new(Quiz::sample().expect("sample quiz"));
        let quiz_sessions = Arc::new(QuizSessionService::new(
            fixed_clock(),
            quiz,
            Arc::clone(&storage.sessions),
        ));
        Self {
            storage,
            quiz_sessions,
            session_id: SessionId::new_random(),
        }
    }

    pub fn mount(&self, view: ViewKind) -> ViewHarness {
        let app = Arc::new(TestApp {
            quiz_sessions: Arc::clone(&self.quiz_sessions),
            session_id: self.session_id,
        });
        let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
        ViewHarness { dom }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Rebuild and let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
