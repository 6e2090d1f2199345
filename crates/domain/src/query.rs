//! Observation query
//!
//! The immutable input to a fetch pass: one location, one calendar date,
//! and the years to resolve it against. Validation happens here, before
//! any network traffic - the archive returns unusable results for years
//! before its 1940 data floor.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{CalendarDate, GeoLocation};

/// Earliest year the archive holds data for
pub const ARCHIVE_FLOOR_YEAR: i32 = 1940;

/// Parameters for one fetch pass, set once at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationQuery {
    location: GeoLocation,
    date: CalendarDate,
    years: Vec<i32>,
}

impl ObservationQuery {
    /// Create a query over an explicit list of years
    ///
    /// Order is preserved in the fetched series; duplicates are permitted
    /// but discouraged. An empty list is valid and yields an empty series.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::YearBelowArchiveFloor` if any year predates
    /// the archive's 1940 data floor.
    pub fn new(
        location: GeoLocation,
        date: CalendarDate,
        years: Vec<i32>,
    ) -> Result<Self, DomainError> {
        if let Some(&year) = years.iter().find(|&&y| y < ARCHIVE_FLOOR_YEAR) {
            return Err(DomainError::YearBelowArchiveFloor { year });
        }
        Ok(Self {
            location,
            date,
            years,
        })
    }

    /// Create a query over the `count` consecutive years ending at
    /// `last_year`, in ascending order
    ///
    /// # Errors
    ///
    /// Returns `DomainError::YearBelowArchiveFloor` if the derived range
    /// would reach below the archive's 1940 data floor.
    pub fn trailing_years(
        location: GeoLocation,
        date: CalendarDate,
        count: u32,
        last_year: i32,
    ) -> Result<Self, DomainError> {
        let first_year = i64::from(last_year) - i64::from(count) + 1;
        if count > 0 && first_year < i64::from(ARCHIVE_FLOOR_YEAR) {
            return Err(DomainError::YearBelowArchiveFloor {
                year: i32::try_from(first_year).unwrap_or(i32::MIN),
            });
        }
        let years: Vec<i32> = (first_year..=i64::from(last_year))
            .filter_map(|y| i32::try_from(y).ok())
            .collect();
        Self::new(location, date, years)
    }

    /// The geographic point observations are fetched for
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// The fixed calendar date (no year component)
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// The requested years, in fetch order
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halloween_query(years: Vec<i32>) -> Result<ObservationQuery, DomainError> {
        ObservationQuery::new(GeoLocation::new_orleans(), CalendarDate::halloween(), years)
    }

    #[test]
    fn accepts_years_at_and_after_the_floor() {
        let query = halloween_query(vec![1940, 2000, 2024]).expect("valid");
        assert_eq!(query.years(), &[1940, 2000, 2024]);
    }

    #[test]
    fn rejects_years_below_the_floor() {
        assert_eq!(
            halloween_query(vec![2020, 1939]),
            Err(DomainError::YearBelowArchiveFloor { year: 1939 })
        );
    }

    #[test]
    fn empty_years_list_is_valid() {
        let query = halloween_query(vec![]).expect("valid");
        assert!(query.years().is_empty());
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let query = halloween_query(vec![2022, 2020, 2022]).expect("valid");
        assert_eq!(query.years(), &[2022, 2020, 2022]);
    }

    #[test]
    fn trailing_years_derives_ascending_range() {
        let query = ObservationQuery::trailing_years(
            GeoLocation::new_orleans(),
            CalendarDate::halloween(),
            5,
            2024,
        )
        .expect("valid");
        assert_eq!(query.years(), &[2020, 2021, 2022, 2023, 2024]);
    }

    #[test]
    fn trailing_years_rejects_range_reaching_below_floor() {
        let result = ObservationQuery::trailing_years(
            GeoLocation::new_orleans(),
            CalendarDate::halloween(),
            5,
            1941,
        );
        assert_eq!(
            result,
            Err(DomainError::YearBelowArchiveFloor { year: 1937 })
        );
    }

    #[test]
    fn trailing_years_zero_count_is_empty() {
        let query = ObservationQuery::trailing_years(
            GeoLocation::new_orleans(),
            CalendarDate::halloween(),
            0,
            2024,
        )
        .expect("valid");
        assert!(query.years().is_empty());
    }
}
