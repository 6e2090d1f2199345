//! Application configuration
//!
//! Split into focused sub-modules:
//! - `database`: SQLite database settings
//! - `query`: default observation query parameters
//!
//! The archive client's own settings (`ArchiveConfig`) live with the
//! integration crate and are embedded here as a section.

mod database;
mod query;

use integration_archive::ArchiveConfig;
use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use query::QueryConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo archive settings
    #[serde(default)]
    pub archive: ArchiveConfig,

    /// SQLite database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Default observation query parameters
    #[serde(default)]
    pub query: QueryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, later wins: built-in defaults, a `climatrack.toml` file in
    /// the working directory (optional), then `CLIMATRACK_*` environment
    /// variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("climatrack").required(false))
            .add_source(
                config::Environment::with_prefix("CLIMATRACK")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
