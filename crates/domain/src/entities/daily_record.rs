//! Daily observation record

use serde::{Deserialize, Serialize};

use crate::metrics::MetricField;

/// One year's fetched metrics for the fixed location and calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The year this observation belongs to
    pub year: i32,
    /// Mean temperature in degrees Fahrenheit
    pub mean_temperature: f64,
    /// Maximum wind speed in miles per hour
    pub max_wind_speed: f64,
    /// Total precipitation in inches
    pub sum_precipitation: f64,
}

impl DailyRecord {
    /// Read the value of one metric field
    #[must_use]
    pub const fn metric(&self, field: MetricField) -> f64 {
        match field {
            MetricField::MeanTemperature => self.mean_temperature,
            MetricField::MaxWindSpeed => self.max_wind_speed,
            MetricField::SumPrecipitation => self.sum_precipitation,
        }
    }
}
