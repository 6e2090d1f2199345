//! Observation store port
//!
//! Defines the interface for durably storing fetched observations and the
//! aggregates computed over their batch.

use async_trait::async_trait;
use domain::entities::{DailyRecord, SeriesSummary};
use domain::query::ObservationQuery;
use domain::value_objects::{CalendarDate, GeoLocation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One persisted observation row
///
/// Carries the location/date identity, one year's raw metrics, and the
/// batch aggregates denormalized onto every row of the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredObservation {
    /// Autoincrementing row identifier; `None` until inserted
    pub id: Option<i64>,
    /// Location latitude
    pub latitude: f64,
    /// Location longitude
    pub longitude: f64,
    /// Calendar month (1-12)
    pub month: u32,
    /// Calendar day of month
    pub day: u32,
    /// Observation year
    pub year: i32,

    /// This year's mean temperature (°F)
    pub temperature: f64,
    /// Batch average of mean temperatures (°F)
    pub avg_temperature: f64,
    /// Batch maximum of mean temperatures (°F)
    pub max_temperature: f64,
    /// Batch minimum of mean temperatures (°F)
    pub min_temperature: f64,

    /// This year's max wind speed (mph)
    pub wind_speed: f64,
    /// Batch average of max wind speeds (mph)
    pub avg_wind_speed: f64,
    /// Batch maximum of max wind speeds (mph)
    pub max_wind_speed: f64,
    /// Batch minimum of max wind speeds (mph)
    pub min_wind_speed: f64,

    /// This year's precipitation total (inches)
    pub precipitation: f64,
    /// Batch sum of precipitation totals (inches)
    pub sum_precipitation: f64,
    /// Batch maximum of precipitation totals (inches)
    pub max_precipitation: f64,
    /// Batch minimum of precipitation totals (inches)
    pub min_precipitation: f64,
}

impl StoredObservation {
    /// Build the row for one record of a batch
    #[must_use]
    pub fn from_record(
        query: &ObservationQuery,
        record: &DailyRecord,
        summary: &SeriesSummary,
    ) -> Self {
        Self {
            id: None,
            latitude: query.location().latitude(),
            longitude: query.location().longitude(),
            month: query.date().month(),
            day: query.date().day(),
            year: record.year,
            temperature: record.mean_temperature,
            avg_temperature: summary.avg_temperature,
            max_temperature: summary.max_temperature,
            min_temperature: summary.min_temperature,
            wind_speed: record.max_wind_speed,
            avg_wind_speed: summary.avg_wind_speed,
            max_wind_speed: summary.max_wind_speed,
            min_wind_speed: summary.min_wind_speed,
            precipitation: record.sum_precipitation,
            sum_precipitation: summary.sum_precipitation,
            max_precipitation: summary.max_precipitation,
            min_precipitation: summary.min_precipitation,
        }
    }
}

/// Port for observation persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObservationStorePort: Send + Sync {
    /// Insert a batch of rows
    async fn save_all(&self, observations: &[StoredObservation]) -> Result<(), ApplicationError>;

    /// Delete rows matching a location and calendar date
    ///
    /// Returns the number of rows removed.
    async fn delete_matching(
        &self,
        location: GeoLocation,
        date: CalendarDate,
    ) -> Result<u64, ApplicationError>;

    /// Retrieve rows matching a location and calendar date, ordered by year
    async fn find_matching(
        &self,
        location: GeoLocation,
        date: CalendarDate,
    ) -> Result<Vec<StoredObservation>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::entities::ObservationSeries;

    fn _assert_object_safe(_: &dyn ObservationStorePort) {}

    #[test]
    fn from_record_copies_identity_and_aggregates() {
        let query = ObservationQuery::new(
            GeoLocation::new_orleans(),
            CalendarDate::halloween(),
            vec![2023, 2024],
        )
        .expect("valid query");

        let series: ObservationSeries = [
            DailyRecord {
                year: 2023,
                mean_temperature: 70.0,
                max_wind_speed: 10.0,
                sum_precipitation: 0.2,
            },
            DailyRecord {
                year: 2024,
                mean_temperature: 60.0,
                max_wind_speed: 20.0,
                sum_precipitation: 0.0,
            },
        ]
        .into_iter()
        .collect();
        let summary = SeriesSummary::from_series(&series).expect("non-empty");

        let row = StoredObservation::from_record(&query, &series.records()[1], &summary);
        assert_eq!(row.id, None);
        assert_eq!(row.month, 10);
        assert_eq!(row.day, 31);
        assert_eq!(row.year, 2024);
        assert!((row.temperature - 60.0).abs() < f64::EPSILON);
        assert!((row.avg_temperature - 65.0).abs() < f64::EPSILON);
        assert!((row.max_wind_speed - 20.0).abs() < f64::EPSILON);
        assert!((row.sum_precipitation - 0.2).abs() < f64::EPSILON);
    }
}
