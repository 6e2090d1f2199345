//! SQLite-based observation persistence

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{ObservationStorePort, StoredObservation},
};
use async_trait::async_trait;
use domain::value_objects::{CalendarDate, GeoLocation};
use rusqlite::{Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based observation store
#[derive(Debug, Clone)]
pub struct SqliteObservationStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteObservationStore {
    /// Create a new SQLite observation store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ObservationStorePort for SqliteObservationStore {
    #[instrument(skip(self, observations), fields(rows = observations.len()))]
    async fn save_all(&self, observations: &[StoredObservation]) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let observations = observations.to_vec();

        task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let tx = conn
                .transaction()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            for obs in &observations {
                tx.execute(
                    "INSERT INTO observations (
                        latitude, longitude, month, day, year,
                        temperature, avg_temperature, max_temperature, min_temperature,
                        wind_speed, avg_wind_speed, max_wind_speed, min_wind_speed,
                        precipitation, sum_precipitation, max_precipitation, min_precipitation
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
                    params![
                        obs.latitude,
                        obs.longitude,
                        obs.month,
                        obs.day,
                        obs.year,
                        obs.temperature,
                        obs.avg_temperature,
                        obs.max_temperature,
                        obs.min_temperature,
                        obs.wind_speed,
                        obs.avg_wind_speed,
                        obs.max_wind_speed,
                        obs.min_wind_speed,
                        obs.precipitation,
                        obs.sum_precipitation,
                        obs.max_precipitation,
                        obs.min_precipitation,
                    ],
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            }

            tx.commit()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!("Saved observation batch");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(location = %location, date = %date))]
    async fn delete_matching(
        &self,
        location: GeoLocation,
        date: CalendarDate,
    ) -> Result<u64, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let removed = conn
                .execute(
                    "DELETE FROM observations
                     WHERE latitude = ?1 AND longitude = ?2 AND month = ?3 AND day = ?4",
                    params![
                        location.latitude(),
                        location.longitude(),
                        date.month(),
                        date.day()
                    ],
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            Ok(removed as u64)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(location = %location, date = %date))]
    async fn find_matching(
        &self,
        location: GeoLocation,
        date: CalendarDate,
    ) -> Result<Vec<StoredObservation>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, latitude, longitude, month, day, year,
                        temperature, avg_temperature, max_temperature, min_temperature,
                        wind_speed, avg_wind_speed, max_wind_speed, min_wind_speed,
                        precipitation, sum_precipitation, max_precipitation, min_precipitation
                     FROM observations
                     WHERE latitude = ?1 AND longitude = ?2 AND month = ?3 AND day = ?4
                     ORDER BY year ASC",
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let rows = stmt
                .query_map(
                    params![
                        location.latitude(),
                        location.longitude(),
                        date.month(),
                        date.day()
                    ],
                    row_to_observation,
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            Ok(rows)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

/// Map a result row to a stored observation
fn row_to_observation(row: &Row<'_>) -> rusqlite::Result<StoredObservation> {
    Ok(StoredObservation {
        id: Some(row.get(0)?),
        latitude: row.get(1)?,
        longitude: row.get(2)?,
        month: row.get(3)?,
        day: row.get(4)?,
        year: row.get(5)?,
        temperature: row.get(6)?,
        avg_temperature: row.get(7)?,
        max_temperature: row.get(8)?,
        min_temperature: row.get(9)?,
        wind_speed: row.get(10)?,
        avg_wind_speed: row.get(11)?,
        max_wind_speed: row.get(12)?,
        min_wind_speed: row.get(13)?,
        precipitation: row.get(14)?,
        sum_precipitation: row.get(15)?,
        max_precipitation: row.get(16)?,
        min_precipitation: row.get(17)?,
    })
}
