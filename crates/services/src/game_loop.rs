use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use mathdash_core::Clock;
use mathdash_core::model::{AnswerOutcome, GameSession, GameSummary, GameType, Tick};

use crate::choices::build_choices;
use crate::error::GameServiceError;
use crate::problems::ProblemGenerator;

/// Default round length in seconds.
pub const DEFAULT_GAME_SECS: u32 = 60;

/// Orchestrates rounds: start, answer, tick, restart, plus the in-memory
/// history of finished rounds.
pub struct GameLoopService {
    clock: Clock,
    generator: ProblemGenerator,
    duration_secs: u32,
    history: Mutex<Vec<GameSummary>>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            generator: ProblemGenerator::new(),
            duration_secs: DEFAULT_GAME_SECS,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Override the round length. Zero is allowed; such a round finishes on
    /// the first tick.
    #[must_use]
    pub fn with_duration_secs(mut self, secs: u32) -> Self {
        self.duration_secs = secs;
        self
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Start a round: fresh problem and choices, full clock, zero score.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError` if problem generation fails validation.
    pub fn start_game(&self, game_type: GameType) -> Result<GameSession, GameServiceError> {
        let problem = self.generator.generate(game_type)?;
        let choices = build_choices(&problem);
        let mut session = GameSession::new(game_type, self.duration_secs, problem, choices);
        session.start(self.clock.now());
        debug!(game_type = %game_type, secs = self.duration_secs, "round started");
        Ok(session)
    }

    /// Pick the choice at `index`; a correct pick installs the next problem.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError` for session state or generation failures.
    pub fn answer(
        &self,
        session: &mut GameSession,
        index: usize,
    ) -> Result<AnswerOutcome, GameServiceError> {
        let outcome = session.answer(index)?;
        if outcome == AnswerOutcome::Correct {
            let problem = self.generator.generate(session.game_type())?;
            let choices = build_choices(&problem);
            session.advance(problem, choices)?;
        }
        debug!(?outcome, score = session.score(), "answer");
        Ok(outcome)
    }

    /// Consume one second. When the round finishes, its summary is recorded
    /// and returned.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError` if the summary fails validation.
    pub fn tick(
        &self,
        session: &mut GameSession,
    ) -> Result<Option<GameSummary>, GameServiceError> {
        match session.tick() {
            Tick::Finished => {
                let completed_at = self.clock.now();
                let started_at = session.started_at().unwrap_or(completed_at);
                let summary = GameSummary::new(
                    session.game_type(),
                    session.score(),
                    session.duration_secs(),
                    started_at,
                    completed_at,
                )?;
                self.lock_history().push(summary.clone());
                info!(game_type = %session.game_type(), score = session.score(), "round finished");
                Ok(Some(summary))
            }
            Tick::Counted | Tick::Ignored => Ok(None),
        }
    }

    /// Re-enter playing with a fresh problem, keeping the game type.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError` if problem generation fails validation.
    pub fn restart(&self, session: &mut GameSession) -> Result<(), GameServiceError> {
        let problem = self.generator.generate(session.game_type())?;
        let choices = build_choices(&problem);
        session.restart(problem, choices, self.clock.now());
        debug!(game_type = %session.game_type(), "round restarted");
        Ok(())
    }

    /// Finished rounds from this process, newest first.
    #[must_use]
    pub fn recent_summaries(&self, limit: usize) -> Vec<GameSummary> {
        let history = self.lock_history();
        history.iter().rev().take(limit).cloned().collect()
    }

    /// Best score seen for a game type, if any round of it finished.
    #[must_use]
    pub fn best_score(&self, game_type: GameType) -> Option<i32> {
        let history = self.lock_history();
        history
            .iter()
            .filter(|summary| summary.game_type() == game_type)
            .map(GameSummary::score)
            .max()
    }

    fn lock_history(&self) -> MutexGuard<'_, Vec<GameSummary>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
