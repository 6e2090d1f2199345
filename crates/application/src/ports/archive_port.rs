//! Historical weather archive port
//!
//! Defines the interface for retrieving one day's observed metrics from
//! the external archive.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// The three observed metrics for a single day
///
/// The year is not carried here; the caller attaches it when the record
/// joins a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    /// Mean temperature in degrees Fahrenheit
    pub mean_temperature: f64,
    /// Maximum wind speed in miles per hour
    pub max_wind_speed: f64,
    /// Total precipitation in inches
    pub sum_precipitation: f64,
}

/// Port for historical archive lookups
///
/// One invocation performs one bounded round trip for one concrete date.
/// Implementations must apply a request timeout; a hung upstream is
/// reported as an error like any other failed call, never an indefinite
/// stall.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArchivePort: Send + Sync {
    /// Fetch observed daily metrics for a location on a concrete date
    async fn fetch_daily(
        &self,
        location: GeoLocation,
        date: NaiveDate,
    ) -> Result<DailyMetrics, ApplicationError>;
}
