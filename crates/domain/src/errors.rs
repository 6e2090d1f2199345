//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An aggregation was requested over a series with zero records
    #[error("Series contains no records; min/max/avg/sum are undefined")]
    EmptySeries,

    /// Unrecognized metric field name
    #[error(
        "Unknown metric field: {0} (expected mean_temperature, max_wind_speed or sum_precipitation)"
    )]
    InvalidField(String),

    /// Unrecognized aggregate operator name
    #[error("Unknown aggregate operator: {0} (expected min, max, avg or sum)")]
    InvalidOperation(String),

    /// A requested year predates the archive's historical floor
    #[error("Year {year} predates the archive's data floor (1940)")]
    YearBelowArchiveFloor { year: i32 },

    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Month/day pair that names no calendar date
    #[error("Invalid calendar date: month {month}, day {day}")]
    InvalidCalendarDate { month: u32, day: u32 },
}
