use mathdash_core::model::{
    AnswerOutcome, Choice, GameSession, GameType, Lifecycle, Outcome, Problem, ProblemKind,
};
use services::GameLoopService;

use crate::views::ViewError;

/// UI intents for the play view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Pick(usize),
    Restart,
}

/// Rendered pieces of the problem row. Exactly one slot carries the `?`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemLineVm {
    pub left: String,
    pub op: &'static str,
    pub right: String,
    pub result: String,
}

/// Map a problem to its display row: the hidden slot is the result for
/// addition and multiplication, the right operand for complement games.
#[must_use]
pub fn map_problem_line(problem: &Problem) -> ProblemLineVm {
    match problem.kind() {
        ProblemKind::ComplementToTen => ProblemLineVm {
            left: problem.left().to_string(),
            op: problem.kind().symbol(),
            right: "?".to_string(),
            result: problem.answer().to_string(),
        },
        ProblemKind::Addition | ProblemKind::Multiplication => ProblemLineVm {
            left: problem.left().to_string(),
            op: problem.kind().symbol(),
            right: problem.right().to_string(),
            result: "?".to_string(),
        },
    }
}

/// View model wrapping one game session.
pub struct GameVm {
    session: GameSession,
}

impl GameVm {
    /// Start a fresh round for `game_type`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the service cannot start a round.
    pub fn start(game_loop: &GameLoopService, game_type: GameType) -> Result<Self, ViewError> {
        let session = game_loop
            .start_game(game_type)
            .map_err(|_| ViewError::Unknown)?;
        Ok(Self { session })
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.session.lifecycle()
    }

    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.session.game_type()
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.session.score()
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.session.time_left()
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.session.duration_secs()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.session.outcome()
    }

    #[must_use]
    pub fn problem_line(&self) -> ProblemLineVm {
        map_problem_line(self.session.problem())
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        self.session.choices()
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub fn pick(
        &mut self,
        game_loop: &GameLoopService,
        index: usize,
    ) -> Result<AnswerOutcome, ViewError> {
        game_loop
            .answer(&mut self.session, index)
            .map_err(|_| ViewError::Unknown)
    }

    /// Returns true when this tick finished the round.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub fn tick(&mut self, game_loop: &GameLoopService) -> Result<bool, ViewError> {
        let summary = game_loop
            .tick(&mut self.session)
            .map_err(|_| ViewError::Unknown)?;
        Ok(summary.is_some())
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub fn restart(&mut self, game_loop: &GameLoopService) -> Result<(), ViewError> {
        game_loop
            .restart(&mut self.session)
            .map_err(|_| ViewError::Unknown)
    }
}
