use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use flash_core::model::Language;
use services::{SessionController, SessionError};

use crate::context::AppContext;
use crate::routes::Route;
use crate::scheduler::TaskScheduler;
use crate::vm::{CardIntent, CardVm};

fn apply_intent(controller: &mut SessionController, intent: CardIntent) -> Result<(), SessionError> {
    match intent {
        CardIntent::Right => controller.mark_known(),
        CardIntent::Wrong => controller.manual_flip_back(),
        CardIntent::Flip => controller.auto_flip(),
        CardIntent::Reset => controller.reset(),
    }
}

#[component]
pub fn CardsView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let language = slug.parse::<Language>();
    let unknown_language = language.is_err();

    let mut session = use_hook(move || {
        let mut session = Signal::new(None::<SessionController>);
        let mut controller = ctx
            .services()
            .new_session(Box::new(TaskScheduler::new(session)));
        match language {
            Ok(language) => controller.start(language),
            Err(err) => log::warn!("{err}"),
        }
        session.set(Some(controller));
        session
    });

    use_drop(move || {
        if let Ok(mut guard) = session.try_write() {
            if let Some(controller) = guard.as_mut() {
                controller.close();
            }
        }
    });

    use_effect(|| {
        let _ = eval("document.getElementById('cards-root')?.focus();");
    });

    let dispatch = use_callback(move |intent: CardIntent| {
        if let Some(controller) = session.write().as_mut() {
            if let Err(err) = apply_intent(controller, intent) {
                log::debug!("{err}");
            }
        }
    });

    let on_key = move |evt: KeyboardEvent| {
        if let Some(intent) = CardIntent::from_key(&evt.data.key()) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    };

    let Some(vm) = session.read().as_ref().map(CardVm::from_session) else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "cards-root",
            class: "page page--cards",
            tabindex: "0",
            onkeydown: on_key,
            if unknown_language {
                p { class: "error", "Unknown language: {slug}" }
            }
            if let Some(notice) = vm.notice.clone() {
                div { class: "notice",
                    span { "{notice}" }
                    button {
                        class: "notice__dismiss",
                        onclick: move |_| {
                            if let Some(controller) = session.write().as_mut() {
                                controller.dismiss_notice();
                            }
                        },
                        "×"
                    }
                }
            }
            div { class: "card-stage",
                div {
                    class: vm.face_class(),
                    style: "width: {vm.width}px;",
                    p { class: "card__title", "{vm.title}" }
                    p { class: if vm.done { "card__term card__term--done" } else { "card__term" },
                        "{vm.term}"
                    }
                }
            }
            p { class: "card-progress", "{vm.progress_label}" }
            div { class: "card-actions",
                button {
                    id: "cards-wrong",
                    class: "btn btn--wrong",
                    disabled: !vm.can_answer,
                    onclick: move |_| dispatch.call(CardIntent::Wrong),
                    "Wrong"
                }
                button {
                    id: "cards-right",
                    class: "btn btn--right",
                    disabled: !vm.can_answer,
                    onclick: move |_| dispatch.call(CardIntent::Right),
                    "Right"
                }
            }
            div { class: "card-nav",
                button {
                    id: "cards-home",
                    class: "btn",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "Home"
                }
                button {
                    id: "cards-reset",
                    class: "btn",
                    disabled: unknown_language,
                    onclick: move |_| dispatch.call(CardIntent::Reset),
                    "Reset"
                }
            }
        }
    }
}
