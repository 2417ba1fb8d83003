use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::choice::Choice;
use crate::model::game_type::GameType;
use crate::model::problem::Problem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("session is not in the playing state")]
    NotPlaying,

    #[error("choice index {index} out of bounds for {len} choices")]
    ChoiceOutOfBounds { index: usize, len: usize },
}

/// Linear lifecycle: waiting, playing, then finished. Restart re-enters
/// playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Waiting,
    Playing,
    Finished,
}

/// Win/lose flavor of a finished round, derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        if score > 0 { Outcome::Won } else { Outcome::Lost }
    }
}

/// Result of picking a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer: score went up and the session wants a fresh problem.
    Correct,
    /// Wrong answer: score went down, the same problem stays up.
    Incorrect,
    /// The choice was already revealed; nothing changed.
    AlreadyRevealed,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not playing; the tick was a no-op.
    Ignored,
    /// One second consumed.
    Counted,
    /// The clock ran out; the session is now finished.
    Finished,
}

/// State for one quiz session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    lifecycle: Lifecycle,
    game_type: GameType,
    duration_secs: u32,
    time_left: u32,
    score: i32,
    problem: Problem,
    choices: Vec<Choice>,
    started_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// New session in the waiting state.
    #[must_use]
    pub fn new(
        game_type: GameType,
        duration_secs: u32,
        problem: Problem,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::Waiting,
            game_type,
            duration_secs,
            time_left: duration_secs,
            score: 0,
            problem,
            choices,
            started_at: None,
        }
    }

    /// Enter the playing state with a full clock and zero score.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.lifecycle = Lifecycle::Playing;
        self.time_left = self.duration_secs;
        self.score = 0;
        self.started_at = Some(now);
    }

    /// Re-enter playing after a finished round, with a fresh problem.
    pub fn restart(&mut self, problem: Problem, choices: Vec<Choice>, now: DateTime<Utc>) {
        self.problem = problem;
        self.choices = choices;
        self.start(now);
    }

    /// Swap in the next problem. The problem and its choices are replaced
    /// wholesale.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` outside the playing state.
    pub fn advance(&mut self, problem: Problem, choices: Vec<Choice>) -> Result<(), GameError> {
        if self.lifecycle != Lifecycle::Playing {
            return Err(GameError::NotPlaying);
        }
        self.problem = problem;
        self.choices = choices;
        Ok(())
    }

    /// Consume one second of the round. Invoked at zero, the session
    /// finishes; outside the playing state the tick is ignored.
    pub fn tick(&mut self) -> Tick {
        if self.lifecycle != Lifecycle::Playing {
            return Tick::Ignored;
        }
        if self.time_left == 0 {
            self.lifecycle = Lifecycle::Finished;
            return Tick::Finished;
        }
        self.time_left -= 1;
        Tick::Counted
    }

    /// Pick the choice at `index`, adjusting the score by +1/-1. Picking an
    /// already revealed choice changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` outside the playing state and
    /// `GameError::ChoiceOutOfBounds` for a bad index.
    pub fn answer(&mut self, index: usize) -> Result<AnswerOutcome, GameError> {
        if self.lifecycle != Lifecycle::Playing {
            return Err(GameError::NotPlaying);
        }
        let len = self.choices.len();
        let choice = self
            .choices
            .get_mut(index)
            .ok_or(GameError::ChoiceOutOfBounds { index, len })?;

        if !choice.is_unrevealed() {
            return Ok(AnswerOutcome::AlreadyRevealed);
        }

        let correct = choice.is_correct();
        choice.mark_picked();
        if correct {
            self.score = self.score.saturating_add(1);
            Ok(AnswerOutcome::Correct)
        } else {
            self.score = self.score.saturating_sub(1);
            Ok(AnswerOutcome::Incorrect)
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.lifecycle == Lifecycle::Playing
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.lifecycle == Lifecycle::Finished
    }

    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Win/lose flavor once finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_finished().then(|| Outcome::from_score(self.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Reveal;
    use crate::time::fixed_now;

    fn build_session(duration_secs: u32) -> GameSession {
        let problem = Problem::new(GameType::Addition1To5, 2, 3).unwrap();
        let choices = vec![
            Choice::new(5, true),
            Choice::new(12, false),
            Choice::new(10, false),
            Choice::new(7, false),
        ];
        GameSession::new(GameType::Addition1To5, duration_secs, problem, choices)
    }

    #[test]
    fn new_session_waits() {
        let session = build_session(60);
        assert_eq!(session.lifecycle(), Lifecycle::Waiting);
        assert_eq!(session.time_left(), 60);
        assert_eq!(session.score(), 0);
        assert!(session.started_at().is_none());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn tick_is_ignored_while_waiting() {
        let mut session = build_session(60);
        assert_eq!(session.tick(), Tick::Ignored);
        assert_eq!(session.time_left(), 60);
    }

    #[test]
    fn tick_counts_down_and_finishes_at_zero() {
        let mut session = build_session(2);
        session.start(fixed_now());

        assert_eq!(session.tick(), Tick::Counted);
        assert_eq!(session.tick(), Tick::Counted);
        assert_eq!(session.time_left(), 0);
        assert_eq!(session.tick(), Tick::Finished);
        assert!(session.is_finished());

        // Terminal state: further ticks are no-ops.
        assert_eq!(session.tick(), Tick::Ignored);
    }

    #[test]
    fn correct_pick_scores_up() {
        let mut session = build_session(60);
        session.start(fixed_now());

        assert_eq!(session.answer(0).unwrap(), AnswerOutcome::Correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.choices()[0].reveal(), Reveal::Correct);
    }

    #[test]
    fn wrong_pick_scores_down_and_keeps_problem() {
        let mut session = build_session(60);
        session.start(fixed_now());
        let problem = *session.problem();

        assert_eq!(session.answer(1).unwrap(), AnswerOutcome::Incorrect);
        assert_eq!(session.score(), -1);
        assert_eq!(session.choices()[1].reveal(), Reveal::Incorrect);
        assert_eq!(session.problem(), &problem);
    }

    #[test]
    fn revealed_pick_is_ignored() {
        let mut session = build_session(60);
        session.start(fixed_now());

        session.answer(1).unwrap();
        assert_eq!(session.answer(1).unwrap(), AnswerOutcome::AlreadyRevealed);
        assert_eq!(session.score(), -1);
    }

    #[test]
    fn answer_requires_playing() {
        let mut session = build_session(60);
        assert_eq!(session.answer(0), Err(GameError::NotPlaying));
    }

    #[test]
    fn answer_checks_bounds() {
        let mut session = build_session(60);
        session.start(fixed_now());
        assert_eq!(
            session.answer(4),
            Err(GameError::ChoiceOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn advance_replaces_problem_wholesale() {
        let mut session = build_session(60);
        session.start(fixed_now());
        session.answer(1).unwrap();

        let next = Problem::new(GameType::Addition1To5, 4, 4).unwrap();
        session
            .advance(next, vec![Choice::new(8, true), Choice::new(15, false)])
            .unwrap();

        assert_eq!(session.problem(), &next);
        assert!(session.choices().iter().all(Choice::is_unrevealed));
        // Score carries across problems.
        assert_eq!(session.score(), -1);
    }

    #[test]
    fn restart_resets_clock_and_score() {
        let mut session = build_session(1);
        session.start(fixed_now());
        session.answer(0).unwrap();
        session.tick();
        session.tick();
        assert!(session.is_finished());

        let next = Problem::new(GameType::Addition1To5, 1, 2).unwrap();
        session.restart(next, vec![Choice::new(3, true)], fixed_now());

        assert!(session.is_playing());
        assert_eq!(session.time_left(), 1);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn outcome_derives_from_final_score() {
        let mut session = build_session(0);
        session.start(fixed_now());
        session.answer(0).unwrap();
        assert_eq!(session.tick(), Tick::Finished);
        assert_eq!(session.outcome(), Some(Outcome::Won));

        let mut lost = build_session(0);
        lost.start(fixed_now());
        assert_eq!(lost.tick(), Tick::Finished);
        assert_eq!(lost.outcome(), Some(Outcome::Lost));
    }
}
