use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use keyboard_types::Key;

use mathdash_core::model::{Choice, GameType, Lifecycle, Outcome, Reveal};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{GameIntent, GameVm, ProblemLineVm, format_time_left};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn PlayView(game_type: GameType) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let game_loop = ctx.game_loop();

    let vm = use_signal({
        let game_loop = game_loop.clone();
        move || GameVm::start(&game_loop, game_type).ok()
    });
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = {
        let game_loop = game_loop.clone();
        use_callback(move |intent: GameIntent| {
            let mut error = error;
            let mut vm = vm;
            let result = {
                let mut guard = vm.write();
                match (guard.as_mut(), intent) {
                    (Some(vm), GameIntent::Pick(index)) => vm.pick(&game_loop, index).map(|_| ()),
                    (Some(vm), GameIntent::Restart) => vm.restart(&game_loop),
                    (None, _) => Err(ViewError::Unknown),
                }
            };
            match result {
                Ok(()) => error.set(None),
                Err(err) => error.set(Some(err)),
            }
        })
    };

    // The one cooperative timer: a tick per second, a no-op unless playing.
    {
        let game_loop = game_loop.clone();
        use_future(move || {
            let game_loop = game_loop.clone();
            async move {
                let mut error = error;
                let mut vm = vm;
                loop {
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    let playing = vm
                        .read()
                        .as_ref()
                        .is_some_and(|vm| vm.lifecycle() == Lifecycle::Playing);
                    if !playing {
                        continue;
                    }
                    let result = {
                        let mut guard = vm.write();
                        match guard.as_mut() {
                            Some(vm) => vm.tick(&game_loop).map(|_| ()),
                            None => Ok(()),
                        }
                    };
                    if let Err(err) = result {
                        error.set(Some(err));
                    }
                }
            }
        });
    }

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PlayTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_retry = {
        let game_loop = game_loop.clone();
        use_callback(move |()| {
            let mut vm = vm;
            vm.set(GameVm::start(&game_loop, game_type).ok());
        })
    };

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Escape {
            evt.prevent_default();
            let _ = navigator.push(Route::Home {});
            return;
        }

        let playing = vm
            .read()
            .as_ref()
            .is_some_and(|vm| vm.lifecycle() == Lifecycle::Playing);
        if !playing {
            return;
        }

        if let Key::Character(value) = evt.data.key() {
            let index = match value.as_str() {
                "1" => Some(0),
                "2" => Some(1),
                "3" => Some(2),
                "4" => Some(3),
                _ => None,
            };
            if let Some(index) = index {
                evt.prevent_default();
                dispatch_intent.call(GameIntent::Pick(index));
            }
        }
    });

    let vm_guard = vm.read();
    let lifecycle = vm_guard.as_ref().map(GameVm::lifecycle);
    let line = vm_guard.as_ref().map(GameVm::problem_line);
    let choices: Vec<Choice> = vm_guard
        .as_ref()
        .map(|vm| vm.choices().to_vec())
        .unwrap_or_default();
    let score = vm_guard.as_ref().map_or(0, GameVm::score);
    let time_left = vm_guard.as_ref().map_or(0, GameVm::time_left);
    let duration_secs = vm_guard.as_ref().map_or(0, GameVm::duration_secs);
    let outcome = vm_guard.as_ref().and_then(GameVm::outcome);
    drop(vm_guard);
    let time_label = format_time_left(time_left);
    let best_score = game_loop.best_score(game_type);

    rsx! {
        div { class: "page play-page", id: "play-root", tabindex: "0", onkeydown: on_key,
            header { class: "play-header",
                h2 { class: "play-title", "{game_type.label()}" }
                button {
                    class: "btn btn-secondary play-quit",
                    id: "play-quit",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Quit"
                }
            }
            if let Some(err) = *error.read() {
                p { class: "play-error", "{err.message()}" }
            }
            match lifecycle {
                None => rsx! {
                    p { "{ViewError::Unknown.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_retry.call(()),
                        "Retry"
                    }
                },
                Some(Lifecycle::Finished) => rsx! {
                    FinishedPanel {
                        score,
                        duration_secs,
                        best_score,
                        won: outcome == Some(Outcome::Won),
                        on_intent: dispatch_intent,
                    }
                },
                Some(Lifecycle::Waiting | Lifecycle::Playing) => rsx! {
                    if let Some(line) = line {
                        ProblemRow { line }
                    }
                    div { class: "choice-grid",
                        for (index, choice) in choices.iter().enumerate() {
                            ChoiceButton {
                                key: "{index}",
                                index,
                                value: choice.value(),
                                reveal: choice.reveal(),
                                on_intent: dispatch_intent,
                            }
                        }
                    }
                    footer { class: "play-footer",
                        span { class: "play-footer__item", "Score: {score}" }
                        span { class: "play-footer__item", "Time left: {time_label}" }
                    }
                },
            }
        }
    }
}

#[component]
fn ProblemRow(line: ProblemLineVm) -> Element {
    rsx! {
        div { class: "problem-row",
            span { class: "problem-term", id: "problem-left", "{line.left}" }
            span { class: "problem-op", id: "problem-op", "{line.op}" }
            span { class: "problem-term", id: "problem-right", "{line.right}" }
            span { class: "problem-op", "=" }
            span { class: "problem-term", id: "problem-result", "{line.result}" }
        }
    }
}

#[component]
fn ChoiceButton(
    index: usize,
    value: u32,
    reveal: Reveal,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    let class = match reveal {
        Reveal::Unrevealed => "choice",
        Reveal::Correct => "choice choice--correct",
        Reveal::Incorrect => "choice choice--incorrect",
    };
    let id = format!("choice-{}", index + 1);

    rsx! {
        button {
            class: "{class}",
            id: "{id}",
            r#type: "button",
            onclick: move |_| on_intent.call(GameIntent::Pick(index)),
            "{value}"
        }
    }
}

#[component]
fn FinishedPanel(
    score: i32,
    duration_secs: u32,
    best_score: Option<i32>,
    won: bool,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    let navigator = use_navigator();
    let headline = if won { "Nice run!" } else { "Keep practicing!" };

    rsx! {
        div { class: "play-complete",
            h3 { class: "play-complete__title", "{headline}" }
            p { class: "play-complete__subtitle",
                "You scored {score} points in {duration_secs} seconds."
            }
            if let Some(best) = best_score {
                p { class: "play-complete__best", "Best for this game: {best}" }
            }
            div { class: "play-complete__actions",
                button {
                    class: "btn play-complete__cta",
                    id: "play-restart",
                    r#type: "button",
                    onclick: move |_| on_intent.call(GameIntent::Restart),
                    "Play again"
                }
                button {
                    class: "btn btn-secondary",
                    id: "play-pick-another",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Pick another game"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PlayTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<GameVm>>>>>,
}

#[cfg(test)]
impl PlayTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, vm: Signal<Option<GameVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("play dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<GameVm>> {
        (*self.vm.borrow()).expect("play vm registered")
    }
}
