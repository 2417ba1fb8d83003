use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use mathdash_core::Clock;
use mathdash_core::model::GameType;
use mathdash_core::time::fixed_now;
use services::GameLoopService;

use crate::context::{UiApp, build_app_context};
use crate::views::play::PlayTestHandles;
use crate::views::{HistoryView, HomeView, PlayView};

#[derive(Clone)]
struct TestApp {
    game_loop: Arc<GameLoopService>,
}

impl UiApp for TestApp {
    fn default_game_type(&self) -> GameType {
        GameType::Addition1To5
    }

    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Play(GameType),
    History,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    play_handles: Option<PlayTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.play_handles.clone() {
        use_context_provider(|| handles);
    }
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
        ViewKind::Play(game_type) => rsx! { PlayView { game_type } },
        ViewKind::History => rsx! { HistoryView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub game_loop: Arc<GameLoopService>,
    pub play_handles: Option<PlayTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Flush pending signal writes without rebuilding from scratch.
    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let game_loop = Arc::new(GameLoopService::new(Clock::fixed(fixed_now())));
    setup_view_harness_with_game_loop(view, game_loop)
}

pub fn setup_view_harness_with_game_loop(
    view: ViewKind,
    game_loop: Arc<GameLoopService>,
) -> ViewHarness {
    let play_handles = match view {
        ViewKind::Play(_) => Some(PlayTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        game_loop: Arc::clone(&game_loop),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            play_handles: play_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        game_loop,
        play_handles,
    }
}
