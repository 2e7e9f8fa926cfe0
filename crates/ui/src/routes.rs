use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CardsView, HomeView, PromptView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/language/:slug", PromptView)] Prompt { slug: String },
        #[route("/cards/:slug", CardsView)] Cards { slug: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "topbar__title", to: Route::Home {}, "Flashcards" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
