//! # Swiss Rounds
//!
//! A Swiss-system tournament results store with next-round pairing.
//!
//! This library tracks registered players and reported match outcomes in
//! PostgreSQL and computes the pairings for the next round: players are ranked
//! by wins and paired with the nearest-ranked opponent.
//!
//! ## Architecture
//!
//! Two shallow layers:
//!
//! - **Storage**: every operation wraps a single SQL statement against a
//!   two-table schema (`players`, `matches`) plus a derived standings view.
//!   Operations are exposed through the [`tournament::TournamentStore`] trait
//!   so callers can inject alternative backends.
//! - **Pairing**: a pure function over a previously fetched standings list,
//!   partitioning the rank-ordered rows into adjacent pairs.
//!
//! Every operation returns a typed [`tournament::TournamentResult`], so callers
//! can always tell "zero players" apart from "store unreachable".
//!
//! ## Core Modules
//!
//! - [`db`]: Connection pooling, configuration, and schema migrations
//! - [`tournament`]: Player registry, match ledger, standings, and pairings
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use swiss_rounds::db::{Database, DatabaseConfig};
//! use swiss_rounds::tournament::{PgTournamentStore, TournamentStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()).await?;
//!     db.run_migrations().await?;
//!
//!     let store = PgTournamentStore::new(Arc::new(db.pool().clone()));
//!     store.register_player("Nina Ottesen").await?;
//!     store.register_player("Otto Vargas").await?;
//!
//!     for pairing in store.swiss_pairings().await? {
//!         println!("{} vs {}", pairing.player1_name, pairing.player2_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Database connection pooling and configuration.
pub mod db;
pub use db::{Database, DatabaseConfig};

/// Player registry, match ledger, standings, and pairing generation.
pub mod tournament;
pub use tournament::{
    MatchId, MatchRecord, Pairing, PgTournamentStore, Player, PlayerId, Standing,
    TournamentError, TournamentResult, TournamentStore,
};
