//! Persistence module
//!
//! SQLite-based storage for fetched observations and their aggregates.

pub mod connection;
pub mod migrations;
pub mod observation_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use observation_store::SqliteObservationStore;
