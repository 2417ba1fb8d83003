use mathdash_core::model::{AnswerOutcome, GameType, Lifecycle, Outcome};
use mathdash_core::time::fixed_now;
use services::{Clock, GameLoopService};

#[test]
fn full_round_records_summary() {
    let svc = GameLoopService::new(Clock::fixed(fixed_now())).with_duration_secs(3);
    let mut session = svc.start_game(GameType::Addition1To5).unwrap();
    assert_eq!(session.lifecycle(), Lifecycle::Playing);

    let mut corrects = 0;
    loop {
        let index = session
            .choices()
            .iter()
            .position(|choice| choice.is_correct())
            .expect("one choice is correct");
        let outcome = svc.answer(&mut session, index).unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);
        corrects += 1;

        if svc.tick(&mut session).unwrap().is_some() {
            break;
        }
    }

    // Three counted ticks plus the finishing one: four answers in total.
    assert_eq!(corrects, 4);
    assert_eq!(session.lifecycle(), Lifecycle::Finished);
    assert_eq!(session.score(), corrects);
    assert_eq!(session.outcome(), Some(Outcome::Won));

    let summaries = svc.recent_summaries(10);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].score(), corrects);
    assert_eq!(summaries[0].game_type(), GameType::Addition1To5);
    assert_eq!(summaries[0].duration_secs(), 3);
    assert_eq!(summaries[0].started_at(), summaries[0].completed_at());
}

#[test]
fn losing_round_is_flagged_lost() {
    let svc = GameLoopService::new(Clock::fixed(fixed_now())).with_duration_secs(0);
    let mut session = svc.start_game(GameType::ComplementToTen).unwrap();

    let index = session
        .choices()
        .iter()
        .position(|choice| !choice.is_correct())
        .expect("at least one decoy");
    assert_eq!(
        svc.answer(&mut session, index).unwrap(),
        AnswerOutcome::Incorrect
    );

    let summary = svc.tick(&mut session).unwrap().expect("round finished");
    assert_eq!(summary.score(), -1);
    assert_eq!(summary.outcome(), Outcome::Lost);
}
