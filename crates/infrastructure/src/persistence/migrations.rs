//! Database migrations
//!
//! Manages database schema versioning via `PRAGMA user_version`. The
//! migration SQL is embedded here for runtime execution.
//!
//! ## Rollback Strategy
//!
//! Rollbacks are manual - if a migration fails:
//! 1. Check the error message for details
//! 2. Fix the underlying issue
//! 3. Manually repair the database if needed
//! 4. Re-run migrations
//!
//! ## Adding New Migrations
//!
//! 1. Increment `SCHEMA_VERSION` constant
//! 2. Add a new `migrate_vX` function
//! 3. Update `run_migrations` to call the new function

use rusqlite::Connection;
use tracing::{error, info};

use super::connection::DatabaseError;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_schema_version(conn)?;

    if current_version < SCHEMA_VERSION {
        info!(
            from_version = current_version,
            to_version = SCHEMA_VERSION,
            "Running database migrations"
        );

        if current_version < 1 {
            if let Err(e) = migrate_v1(conn) {
                error!(version = 1, error = %e, "Migration V001 (observations table) failed");
                return Err(e);
            }
        }

        set_schema_version(conn, SCHEMA_VERSION)?;
        info!(version = SCHEMA_VERSION, "Migrations complete");
    }

    Ok(())
}

/// V001: the observations table
///
/// One row per fetched year of a batch, carrying the location/date
/// identity, the raw daily metrics, and the batch aggregates denormalized
/// onto every row.
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS observations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,

            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            month INTEGER NOT NULL,
            day INTEGER NOT NULL,
            year INTEGER NOT NULL,

            temperature REAL NOT NULL,
            avg_temperature REAL NOT NULL,
            max_temperature REAL NOT NULL,
            min_temperature REAL NOT NULL,

            wind_speed REAL NOT NULL,
            avg_wind_speed REAL NOT NULL,
            max_wind_speed REAL NOT NULL,
            min_wind_speed REAL NOT NULL,

            precipitation REAL NOT NULL,
            sum_precipitation REAL NOT NULL,
            max_precipitation REAL NOT NULL,
            min_precipitation REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_observations_location_date
            ON observations (latitude, longitude, month, day);
        ",
    )?;
    Ok(())
}

/// Read the current schema version
fn get_schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Persist the schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    // PRAGMA does not support bound parameters
    conn.execute_batch(&format!("PRAGMA user_version = {version}"))?;
    Ok(())
}
