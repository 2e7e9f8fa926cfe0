use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use flash_core::model::Language;
use services::LanguageStatus;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::PromptVm;

/// Continue-or-reset question for a language with saved progress.
///
/// Without saved progress it forwards straight to the card view.
#[component]
pub fn PromptView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let overview = ctx.services().overview().clone();
    let language = slug.parse::<Language>().ok();
    let status = {
        let overview = overview.clone();
        use_hook(move || language.map(|language| overview.status(language)))
    };
    let vm = status.as_ref().and_then(PromptVm::from_status);
    let mut error = use_signal(|| None::<String>);

    let forward = status
        .as_ref()
        .is_some_and(|status: &LanguageStatus| !status.has_progress());
    let cards_route = Route::Cards { slug: slug.clone() };
    use_effect({
        let cards_route = cards_route.clone();
        move || {
            if forward {
                navigator.replace(cards_route.clone());
            }
        }
    });

    let on_reset = {
        let cards_route = cards_route.clone();
        use_callback(move |()| {
            let Some(language) = language else {
                return;
            };
            match overview.reset(language) {
                Ok(()) => {
                    navigator.push(cards_route.clone());
                }
                Err(err) => {
                    log::warn!("{err}");
                    error.set(Some("Saved progress could not be deleted.".to_owned()));
                }
            }
        })
    };

    let Some(vm) = vm else {
        return rsx! {
            div { class: "page page--prompt",
                if language.is_none() {
                    p { class: "error", "Unknown language: {slug}" }
                    Link { to: Route::Home {}, "Back" }
                }
            }
        };
    };

    rsx! {
        div { class: "page page--prompt",
            h2 { "{vm.title}" }
            p { class: "prompt__message", "{vm.message}" }
            if let Some(message) = error() {
                p { class: "notice", "{message}" }
            }
            div { class: "prompt__actions",
                Link { id: "prompt-continue", class: "btn btn--primary", to: cards_route, "Continue" }
                button {
                    id: "prompt-reset",
                    class: "btn",
                    onclick: move |_| on_reset.call(()),
                    "Reset Progress"
                }
            }
        }
    }
}
