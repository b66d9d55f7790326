//! Repository trait and PostgreSQL implementation for tournament storage.
//!
//! This module provides a trait-based abstraction over the tournament tables,
//! enabling better testing through mock implementations and dependency
//! injection. Every operation wraps a single SQL statement; a connection is
//! acquired from the pool per statement and no transaction is held across
//! calls.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use super::errors::{TournamentError, TournamentResult};
use super::models::{MatchId, Pairing, PlayerId, Standing};
use super::pairing;

/// Trait for tournament store operations
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Register a player; the database assigns the unique ID
    async fn register_player(&self, name: &str) -> TournamentResult<PlayerId>;

    /// Number of currently registered players
    async fn count_players(&self) -> TournamentResult<i64>;

    /// Remove all players and, via cascade, all matches
    ///
    /// Resets the ID sequences of both tables. Returns `None`: the bulk-clear
    /// primitive (`TRUNCATE`) does not report a row count.
    async fn delete_players(&self) -> TournamentResult<Option<u64>>;

    /// Record a match outcome between two registered players
    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<MatchId>;

    /// Remove all match records, returning the number deleted
    async fn delete_matches(&self) -> TournamentResult<u64>;

    /// Standings sorted by wins descending
    ///
    /// Every registered player appears exactly once, including players with
    /// zero matches. Order among equal-win players is whatever the store
    /// yields and must be treated as non-deterministic.
    async fn player_standings(&self) -> TournamentResult<Vec<Standing>>;

    /// Pairings for the next round
    ///
    /// Fetches the standings and partitions them into adjacent pairs; see
    /// [`pairing::adjacent_pairs`] for the pairing policy and the odd-count
    /// behavior.
    async fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.player_standings().await?;
        pairing::adjacent_pairs(&standings)
    }
}

/// Default PostgreSQL implementation of `TournamentStore`
pub struct PgTournamentStore {
    pool: Arc<PgPool>,
}

impl PgTournamentStore {
    /// Create a new store backed by a shared connection pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TournamentStore for PgTournamentStore {
    async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let row = sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(self.pool.as_ref())
            .await?;

        let id: PlayerId = row.get("id");
        log::info!("Registered player {} ({})", id, name);
        Ok(id)
    }

    async fn count_players(&self) -> TournamentResult<i64> {
        let row = sqlx::query("SELECT count(*) AS num FROM players")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.get("num"))
    }

    async fn delete_players(&self) -> TournamentResult<Option<u64>> {
        sqlx::query("TRUNCATE players RESTART IDENTITY CASCADE")
            .execute(self.pool.as_ref())
            .await?;

        log::info!("Deleted all players and reset ID sequences");
        Ok(None)
    }

    async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<MatchId> {
        let row = sqlx::query("INSERT INTO matches (winner, loser) VALUES ($1, $2) RETURNING id")
            .bind(winner)
            .bind(loser)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    TournamentError::UnknownPlayer { winner, loser }
                }
                _ => TournamentError::Database(e),
            })?;

        let id: MatchId = row.get("id");
        log::debug!("Recorded match {}: player {} beat player {}", id, winner, loser);
        Ok(id)
    }

    async fn delete_matches(&self) -> TournamentResult<u64> {
        let result = sqlx::query("DELETE FROM matches")
            .execute(self.pool.as_ref())
            .await?;

        log::info!("Deleted {} match records", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn player_standings(&self) -> TournamentResult<Vec<Standing>> {
        let rows = sqlx::query(
            "SELECT id, name, wins, matches_played FROM view_standings ORDER BY wins DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let standings = rows
            .into_iter()
            .map(|row| Standing {
                id: row.get("id"),
                name: row.get("name"),
                wins: row.get("wins"),
                matches_played: row.get("matches_played"),
            })
            .collect();

        Ok(standings)
    }
}
