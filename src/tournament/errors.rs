//! Tournament store error types.

use thiserror::Error;

use super::models::PlayerId;

/// Tournament store errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A reported match referenced an unregistered player
    #[error("Match references an unregistered player (winner {winner}, loser {loser})")]
    UnknownPlayer {
        /// Winner ID as reported
        winner: PlayerId,
        /// Loser ID as reported
        loser: PlayerId,
    },

    /// Pairing requires an even number of players
    #[error("Cannot pair an odd number of players: {0}")]
    OddPlayerCount(usize),
}

/// Result type for tournament store operations
pub type TournamentResult<T> = Result<T, TournamentError>;
