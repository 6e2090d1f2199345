//! Archive data models
//!
//! Types for representing responses from the Open-Meteo Archive API.

use serde::{Deserialize, Serialize};

/// Top-level archive API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveResponse {
    /// Latitude of the grid cell the archive resolved the request to
    pub latitude: f64,
    /// Longitude of the grid cell the archive resolved the request to
    pub longitude: f64,
    /// Timezone the daily arrays are expressed in
    #[serde(default)]
    pub timezone: Option<String>,
    /// Daily aggregate arrays; absent on error responses
    #[serde(default)]
    pub daily: Option<DailyData>,
}

/// The `daily` block of an archive response
///
/// Each metric maps to one value per day of the requested range. With
/// `start_date == end_date` every array holds exactly one element, which
/// may still be `null` when the archive has no observation for that day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyData {
    /// ISO dates of the range, one per day
    pub time: Vec<String>,
    /// Mean daily temperature per day
    #[serde(default)]
    pub temperature_2m_mean: Option<Vec<Option<f64>>>,
    /// Maximum daily wind speed per day
    #[serde(default)]
    pub wind_speed_10m_max: Option<Vec<Option<f64>>>,
    /// Summed daily precipitation per day
    #[serde(default)]
    pub precipitation_sum: Option<Vec<Option<f64>>>,
}

/// One day's observed metrics, extracted from a single-day response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Mean temperature in the requested temperature unit
    pub mean_temperature: f64,
    /// Maximum wind speed in the requested wind speed unit
    pub max_wind_speed: f64,
    /// Total precipitation in the requested precipitation unit
    pub sum_precipitation: f64,
}
