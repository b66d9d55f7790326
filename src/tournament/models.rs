//! Tournament data models for players, matches, standings, and pairings.

use serde::{Deserialize, Serialize};

/// Player ID type (assigned by the database)
pub type PlayerId = i32;

/// Match ID type (assigned by the database)
pub type MatchId = i32;

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique ID assigned by the database
    pub id: PlayerId,
    /// Full name (need not be unique)
    pub name: String,
}

/// A recorded match outcome
///
/// There is no draw representation; every match has exactly one winner
/// and one loser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique ID assigned by the database
    pub id: MatchId,
    /// ID of the winning player
    pub winner: PlayerId,
    /// ID of the losing player
    pub loser: PlayerId,
}

/// One row of the derived standings
///
/// Standings are computed, never stored: `wins` counts matches the player
/// won, `matches_played` counts matches the player appeared in on either
/// side. Players with zero matches still get a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player ID
    pub id: PlayerId,
    /// Player name
    pub name: String,
    /// Number of matches won
    pub wins: i64,
    /// Number of matches played (won or lost)
    pub matches_played: i64,
}

/// A next-round pairing of two players adjacent in the standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// First player's ID
    pub player1_id: PlayerId,
    /// First player's name
    pub player1_name: String,
    /// Second player's ID
    pub player2_id: PlayerId,
    /// Second player's name
    pub player2_name: String,
}

impl Pairing {
    /// Build a pairing from two adjacent standings rows
    pub fn from_standings(first: &Standing, second: &Standing) -> Self {
        Self {
            player1_id: first.id,
            player1_name: first.name.clone(),
            player2_id: second.id,
            player2_name: second.name.clone(),
        }
    }
}
