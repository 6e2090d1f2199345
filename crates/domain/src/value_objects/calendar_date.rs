//! Calendar date value object
//!
//! A month/day pair with no year component. The same calendar date is
//! resolved against many years during a fetch pass, so the year is supplied
//! late via [`CalendarDate::for_year`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A fixed calendar date (month and day) without a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Month (1-12)
    month: u32,
    /// Day of month (1-31)
    day: u32,
}

/// Maximum day per month, leap-permissive: Feb 29 is a legal calendar date
/// and resolves to `None` for non-leap years.
const MAX_DAY: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl CalendarDate {
    /// Create a new calendar date with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCalendarDate` if the month is not 1-12
    /// or the day is not valid for that month. February 29 is accepted.
    pub fn new(month: u32, day: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) || day < 1 || day > MAX_DAY[(month - 1) as usize] {
            return Err(DomainError::InvalidCalendarDate { month, day });
        }
        Ok(Self { month, day })
    }

    /// Get the month (1-12)
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Get the day of month
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Resolve this calendar date against a concrete year
    ///
    /// Returns `None` when the date does not exist in that year
    /// (February 29 outside leap years).
    #[must_use]
    pub fn for_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// October 31 - the default observation date
    #[must_use]
    pub const fn halloween() -> Self {
        Self { month: 10, day: 31 }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let date = CalendarDate::new(10, 31).expect("valid date");
        assert_eq!(date.month(), 10);
        assert_eq!(date.day(), 31);
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            CalendarDate::new(13, 1),
            Err(DomainError::InvalidCalendarDate { month: 13, day: 1 })
        );
        assert!(CalendarDate::new(0, 1).is_err());
    }

    #[test]
    fn test_invalid_day() {
        assert!(CalendarDate::new(4, 31).is_err());
        assert!(CalendarDate::new(2, 30).is_err());
        assert!(CalendarDate::new(1, 0).is_err());
    }

    #[test]
    fn test_leap_day_is_accepted() {
        assert!(CalendarDate::new(2, 29).is_ok());
    }

    #[test]
    fn test_for_year_resolves() {
        let date = CalendarDate::halloween();
        let resolved = date.for_year(2024).expect("exists");
        assert_eq!(resolved.to_string(), "2024-10-31");
    }

    #[test]
    fn test_leap_day_resolution() {
        let date = CalendarDate::new(2, 29).expect("valid");
        assert!(date.for_year(2024).is_some());
        assert!(date.for_year(2023).is_none());
    }

    #[test]
    fn test_display_zero_pads() {
        let date = CalendarDate::new(3, 7).expect("valid");
        assert_eq!(date.to_string(), "03-07");
    }
}
