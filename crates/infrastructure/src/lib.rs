//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the SQLite
//! observation store and the Open-Meteo archive adapter, plus the
//! application configuration.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::ArchiveAdapter;
pub use config::{AppConfig, DatabaseConfig, QueryConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteObservationStore, create_pool};
