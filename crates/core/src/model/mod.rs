mod choice;
mod game;
mod game_type;
mod problem;
mod summary;

pub use choice::{Choice, Reveal};
pub use game::{AnswerOutcome, GameError, GameSession, Lifecycle, Outcome, Tick};
pub use game_type::{GameType, ParseGameTypeError, ProblemKind};
pub use problem::{Problem, ProblemError};
pub use summary::{GameSummary, SummaryError};
