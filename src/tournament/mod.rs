//! Tournament module for Swiss-system player and match tracking.
//!
//! This module provides the tournament data layer:
//! - Player registration and bulk reset
//! - Match outcome reporting
//! - Win-ranked standings aggregation
//! - Adjacent-rank pairing for the next round
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
//!     let db = Database::new(&Default::default()).await?;
//!     let store = PgTournamentStore::new(Arc::new(db.pool().clone()));
//!
//!     let winner = store.register_player("Nina Ottesen").await?;
//!     let loser = store.register_player("Otto Vargas").await?;
//!     store.report_match(winner, loser).await?;
//!
//!     for row in store.player_standings().await? {
//!         println!("{}: {} wins", row.name, row.wins);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod models;
pub mod pairing;
pub mod store;

pub use errors::{TournamentError, TournamentResult};
pub use models::{MatchId, MatchRecord, Pairing, Player, PlayerId, Standing};
pub use pairing::adjacent_pairs;
pub use store::{PgTournamentStore, TournamentStore};
