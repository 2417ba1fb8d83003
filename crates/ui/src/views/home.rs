use dioxus::prelude::*;
use dioxus_router::use_navigator;

use mathdash_core::model::GameType;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            p { class: "home-intro",
                "Score as many points as you can in one minute. A right answer "
                "is worth one point, a wrong answer costs one point. Ready?"
            }
            div { class: "home-menu",
                for game_type in GameType::ALL {
                    GameTypeButton { key: "{game_type}", game_type }
                }
            }
        }
    }
}

#[component]
fn GameTypeButton(game_type: GameType) -> Element {
    let navigator = use_navigator();

    rsx! {
        button {
            class: "btn home-menu__item",
            r#type: "button",
            onclick: move |_| {
                let _ = navigator.push(Route::Play { game_type });
            },
            "{game_type.label()}"
        }
    }
}
