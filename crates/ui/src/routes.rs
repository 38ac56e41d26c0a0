use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use services::{Destination, QuestionPage};

use crate::views::{HomeView, QuestionView, ResultsView, StartQuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/start_quiz", StartQuizView)] StartQuiz {},
        #[route("/question", QuestionView)] Question {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { to: Route::Home {}, h1 { "Quiz" } }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Route a redirect outcome from the quiz flow to a page.
#[must_use]
pub fn route_for(destination: Destination) -> Route {
    match destination {
        Destination::Start => Route::Home {},
        Destination::Results => Route::Results {},
    }
}

/// Where to go after a flow call that returned a question page.
#[must_use]
pub fn route_for_page(page: &QuestionPage) -> Route {
    match page {
        QuestionPage::Show(_) => Route::Question {},
        QuestionPage::Redirect(destination) => route_for(*destination),
    }
}
