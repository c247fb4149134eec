//! Error types for match resolution and configuration

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A round was submitted after one side already reached the winning score.
    #[error("match is already over ({player_score}-{computer_score}); reset before playing again")]
    MatchOver { player_score: u32, computer_score: u32 },

    #[error("winning score must be at least 1")]
    InvalidWinningScore,

    #[error("unknown choice: {0:?}")]
    UnknownChoice(String),

    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
