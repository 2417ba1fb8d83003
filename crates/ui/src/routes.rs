use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use mathdash_core::model::GameType;

use crate::context::AppContext;
use crate::views::{HistoryView, HomeView, PlayView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/play/:game_type", PlayView)] Play { game_type: GameType },
        #[route("/history", HistoryView)] History {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Topbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Topbar() -> Element {
    let ctx = use_context::<AppContext>();
    let default_game_type = ctx.default_game_type();

    rsx! {
        nav { class: "topbar",
            h1 { "Math Dash" }
            ul {
                li { Link { to: Route::Home {}, "Pick a game" } }
                li { Link { to: Route::Play { game_type: default_game_type }, "Play" } }
                li { Link { to: Route::History {}, "History" } }
            }
        }
    }
}
