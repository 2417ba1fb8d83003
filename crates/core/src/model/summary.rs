use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::game::Outcome;
use crate::model::game_type::GameType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,
}

/// Record of one finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    game_type: GameType,
    score: i32,
    duration_secs: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl GameSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`.
    pub fn new(
        game_type: GameType,
        score: i32,
        duration_secs: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }

        Ok(Self {
            game_type,
            score,
            duration_secs,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_score(self.score)
    }
}
