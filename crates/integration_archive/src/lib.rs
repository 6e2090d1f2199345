//! Open-Meteo historical archive integration
//!
//! Client for the Open-Meteo Archive API (<https://open-meteo.com/en/docs/historical-weather-api>).
//! Retrieves observed daily aggregates for a single past date without
//! requiring an API key.

pub mod client;
mod models;

pub use client::{ArchiveConfig, ArchiveError, HistoricalWeatherClient, OpenMeteoArchiveClient};
pub use models::{ArchiveResponse, DailyData, DailyObservation};
