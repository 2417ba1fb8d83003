#![forbid(unsafe_code)]

pub mod choices;
pub mod error;
pub mod game_loop;
pub mod problems;

pub use mathdash_core::Clock;

pub use choices::{build_choices, build_choices_with};
pub use error::GameServiceError;
pub use game_loop::{DEFAULT_GAME_SECS, GameLoopService};
pub use problems::ProblemGenerator;
