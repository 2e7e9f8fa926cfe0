use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LanguageTileVm, map_language_tiles};

fn tile_route(tile: &LanguageTileVm) -> Route {
    let slug = tile.slug.to_owned();
    if tile.resumes {
        Route::Prompt { slug }
    } else {
        Route::Cards { slug }
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let services = ctx.services();
    let tiles = use_hook(move || map_language_tiles(&services.overview().list()));

    use_effect(move || {
        if let Some(language) = ctx.take_initial_language() {
            let slug = language.slug().to_owned();
            navigator.replace(Route::Prompt { slug });
        }
    });

    rsx! {
        div { class: "page page--home",
            h2 { "Choose a language" }
            ul { class: "language-list",
                for tile in tiles {
                    li { key: "{tile.slug}", class: "language-tile",
                        if tile.available {
                            Link { class: "language-tile__link", to: tile_route(&tile),
                                span { class: "language-tile__label", "{tile.label}" }
                                span { class: "language-tile__detail", "{tile.detail}" }
                            }
                        } else {
                            span { class: "language-tile__label language-tile__label--disabled",
                                "{tile.label}"
                            }
                            span { class: "language-tile__detail", "{tile.detail}" }
                        }
                    }
                }
            }
        }
    }
}
