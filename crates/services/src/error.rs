//! Shared error types for the services crate.

use thiserror::Error;

use mathdash_core::model::{GameError, ProblemError, SummaryError};

/// Errors emitted by `GameLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
