//! Metric fields and aggregate operators
//!
//! The archive reports three daily metrics per record; callers address them
//! by the same names the archive uses on the wire. Unrecognized names are a
//! contract violation and fail with a determinate error instead of falling
//! through to an unrelated value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// One of the three daily metrics carried by every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    /// Mean daily temperature, degrees Fahrenheit
    MeanTemperature,
    /// Maximum daily wind speed, miles per hour
    MaxWindSpeed,
    /// Summed daily precipitation, inches
    SumPrecipitation,
}

impl MetricField {
    /// All metric fields, in persistence column order
    pub const ALL: [Self; 3] = [
        Self::MeanTemperature,
        Self::MaxWindSpeed,
        Self::SumPrecipitation,
    ];

    /// The wire/record name of this field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MeanTemperature => "mean_temperature",
            Self::MaxWindSpeed => "max_wind_speed",
            Self::SumPrecipitation => "sum_precipitation",
        }
    }
}

impl FromStr for MetricField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean_temperature" => Ok(Self::MeanTemperature),
            "max_wind_speed" => Ok(Self::MaxWindSpeed),
            "sum_precipitation" => Ok(Self::SumPrecipitation),
            other => Err(DomainError::InvalidField(other.to_string())),
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reduction applied to a projected metric sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOp {
    /// Smallest value
    Min,
    /// Largest value
    Max,
    /// Arithmetic mean
    Avg,
    /// Arithmetic total
    Sum,
}

impl AggregateOp {
    /// The operator name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Avg => "avg",
            Self::Sum => "sum",
        }
    }
}

impl FromStr for AggregateOp {
    type Err = DomainError;

    // Case-insensitive: operator names arrive from user-facing surfaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "avg" => Ok(Self::Avg),
            "sum" => Ok(Self::Sum),
            _ => Err(DomainError::InvalidOperation(s.to_string())),
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
