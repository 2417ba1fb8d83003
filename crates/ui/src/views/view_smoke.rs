use std::sync::Arc;

use dioxus::prelude::{ReadableExt, WritableExt};
use mathdash_core::Clock;
use mathdash_core::model::GameType;
use mathdash_core::time::fixed_now;
use services::GameLoopService;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_game_loop};
use crate::vm::GameIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_menu() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    for game_type in GameType::ALL {
        let label = game_type.label();
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("one minute"), "missing intro in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_renders_problem_and_choices() {
    let mut harness = setup_view_harness(ViewKind::Play(GameType::Addition1To5));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Time left: 60s"), "missing timer in {html}");
    for id in ["choice-1", "choice-2", "choice-3", "choice-4"] {
        assert!(html.contains(id), "missing {id} in {html}");
    }
    assert!(html.contains('?'), "missing hidden slot in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_complement_targets_ten() {
    let mut harness = setup_view_harness(ViewKind::Play(GameType::ComplementToTen));
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains(r#"id="problem-result">10<"#),
        "missing target ten in {html}"
    );
    assert!(
        html.contains(r#"id="problem-right">?<"#),
        "missing hidden operand in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_correct_pick_bumps_score() {
    let mut harness = setup_view_harness(ViewKind::Play(GameType::Addition1To5));
    harness.rebuild();
    let handles = harness.play_handles.clone().expect("play handles");

    let index = {
        let vm = handles.vm();
        let guard = vm.read();
        guard
            .as_ref()
            .expect("vm started")
            .choices()
            .iter()
            .position(|choice| choice.is_correct())
            .expect("one choice is correct")
    };

    handles.dispatch().call(GameIntent::Pick(index));
    harness.drive();
    let html = harness.render();

    assert!(html.contains("Score: 1"), "missing bumped score in {html}");
    // Correct picks advance to a fresh, unrevealed set.
    assert!(!html.contains("choice--correct"), "stale reveal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_wrong_pick_reveals_and_penalizes() {
    let mut harness = setup_view_harness(ViewKind::Play(GameType::Addition1To5));
    harness.rebuild();
    let handles = harness.play_handles.clone().expect("play handles");

    let index = {
        let vm = handles.vm();
        let guard = vm.read();
        guard
            .as_ref()
            .expect("vm started")
            .choices()
            .iter()
            .position(|choice| !choice.is_correct())
            .expect("at least one decoy")
    };

    handles.dispatch().call(GameIntent::Pick(index));
    harness.drive();
    let html = harness.render();

    assert!(html.contains("Score: -1"), "missing penalty in {html}");
    assert!(html.contains("choice--incorrect"), "missing reveal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_finished_round_offers_restart() {
    let game_loop = Arc::new(GameLoopService::new(Clock::fixed(fixed_now())).with_duration_secs(0));
    let mut harness =
        setup_view_harness_with_game_loop(ViewKind::Play(GameType::Addition1To5), game_loop);
    harness.rebuild();
    let handles = harness.play_handles.clone().expect("play handles");

    // Zero-duration round: the first tick finishes it.
    {
        let mut vm = handles.vm();
        let mut guard = vm.write();
        let finished = guard
            .as_mut()
            .expect("vm started")
            .tick(&harness.game_loop)
            .expect("tick");
        assert!(finished);
    }
    harness.drive();
    let html = harness.render();

    assert!(html.contains("Keep practicing!"), "missing outcome in {html}");
    assert!(html.contains("play-restart"), "missing restart in {html}");
    assert!(
        html.contains("Best for this game: 0"),
        "missing best score in {html}"
    );

    handles.dispatch().call(GameIntent::Restart);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Score: 0"), "missing reset score in {html}");
    assert!(html.contains("choice-1"), "missing choices in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_lists_finished_round() {
    let game_loop = Arc::new(GameLoopService::new(Clock::fixed(fixed_now())).with_duration_secs(0));
    let mut session = game_loop
        .start_game(GameType::Multiplication2To5)
        .expect("start game");
    let summary = game_loop.tick(&mut session).expect("tick");
    assert!(summary.is_some());

    let mut harness = setup_view_harness_with_game_loop(ViewKind::History, game_loop);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Multiplications 2-5"), "missing game in {html}");
    assert!(html.contains("Score: 0 in 0s"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::History);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No rounds played yet."), "missing empty state in {html}");
}
