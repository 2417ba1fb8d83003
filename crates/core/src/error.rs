use thiserror::Error;

use crate::model::{GameError, ProblemError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
