//! Default observation query parameters
//!
//! The documented fallbacks for interactive configuration: New Orleans,
//! Louisiana, on Halloween, for the five years ending 2024. Every prompt
//! that is answered with a bare Enter falls back to the value here.

use domain::DomainError;
use domain::query::ObservationQuery;
use domain::value_objects::{CalendarDate, GeoLocation};
use serde::{Deserialize, Serialize};

/// Default query parameters applied when input is omitted
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Latitude of the observation point
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Longitude of the observation point
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Calendar month (1-12)
    #[serde(default = "default_month")]
    pub month: u32,

    /// Calendar day of month
    #[serde(default = "default_day")]
    pub day: u32,

    /// Number of trailing years to fetch
    #[serde(default = "default_num_years")]
    pub num_years: u32,

    /// Last (most recent) year of the range
    #[serde(default = "default_last_year")]
    pub last_year: i32,
}

const fn default_latitude() -> f64 {
    29.9547
}

const fn default_longitude() -> f64 {
    -90.0751
}

const fn default_month() -> u32 {
    10
}

const fn default_day() -> u32 {
    31
}

const fn default_num_years() -> u32 {
    5
}

const fn default_last_year() -> i32 {
    2024
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            month: default_month(),
            day: default_day(),
            num_years: default_num_years(),
            last_year: default_last_year(),
        }
    }
}

impl QueryConfig {
    /// Build the domain query these defaults describe
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` when the configured values are invalid -
    /// out-of-range coordinates or calendar date, or a year range that
    /// reaches below the archive's floor year.
    pub fn to_query(&self) -> Result<ObservationQuery, DomainError> {
        let location = GeoLocation::new(self.latitude, self.longitude)?;
        let date = CalendarDate::new(self.month, self.day)?;
        ObservationQuery::trailing_years(location, date, self.num_years, self.last_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ARCHIVE_FLOOR_YEAR;

    #[test]
    fn defaults_describe_new_orleans_halloweens() {
        let config = QueryConfig::default();
        let query = config.to_query().expect("defaults are valid");

        assert_eq!(query.date().month(), 10);
        assert_eq!(query.date().day(), 31);
        assert_eq!(query.years(), &[2020, 2021, 2022, 2023, 2024]);
        assert!((query.location().latitude() - 29.9547).abs() < f64::EPSILON);
    }

    #[test]
    fn floor_violations_surface_as_domain_errors() {
        let config = QueryConfig {
            num_years: 10,
            last_year: 1945,
            ..Default::default()
        };
        assert_eq!(
            config.to_query(),
            Err(DomainError::YearBelowArchiveFloor { year: 1936 })
        );
    }

    #[test]
    fn invalid_date_is_rejected() {
        let config = QueryConfig {
            month: 2,
            day: 30,
            ..Default::default()
        };
        assert!(config.to_query().is_err());
    }

    #[test]
    fn floor_year_constant_matches_archive() {
        assert_eq!(ARCHIVE_FLOOR_YEAR, 1940);
    }
}
