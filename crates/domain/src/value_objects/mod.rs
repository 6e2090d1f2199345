//! Value Objects - Immutable, identity-less domain primitives

mod calendar_date;
mod geo_location;

pub use calendar_date::CalendarDate;
pub use geo_location::GeoLocation;
