//! Open-Meteo archive client
//!
//! HTTP client for the Open-Meteo Archive API. Every request covers a
//! single day (`start_date == end_date`) and asks for the three daily
//! metrics in imperial units, in the America/Chicago reference timezone.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ArchiveResponse, DailyData, DailyObservation};

/// Daily metric identifiers requested from the archive, comma-joined
const DAILY_METRICS: &str = "precipitation_sum,wind_speed_10m_max,temperature_2m_mean";

/// Reference timezone for the daily aggregation window (percent-encoded)
const TIMEZONE: &str = "America%2FChicago";

/// Archive client errors
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Connection to the archive failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the archive failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the archive
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response lacked the requested daily value
    #[error("Missing daily value: {0}")]
    MissingData(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Archive service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Open-Meteo Archive API base URL (default: <https://archive-api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://archive-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for historical daily observations
#[async_trait]
pub trait HistoricalWeatherClient: Send + Sync {
    /// Fetch the observed daily metrics for one location and one date
    async fn fetch_daily(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    ) -> Result<DailyObservation, ArchiveError>;
}

/// Open-Meteo Archive HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoArchiveClient {
    client: Client,
    config: ArchiveConfig,
}

impl OpenMeteoArchiveClient {
    /// Create a new archive client with the given configuration
    ///
    /// The configured timeout bounds every request; a hung upstream
    /// surfaces as a request failure instead of stalling the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ArchiveConfig) -> Result<Self, ArchiveError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ArchiveError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ArchiveError> {
        Self::new(ArchiveConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ArchiveError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ArchiveError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the API URL for a single-day archive request
    fn build_archive_url(&self, latitude: f64, longitude: f64, date: NaiveDate) -> String {
        let day = date.format("%Y-%m-%d");
        format!(
            "{}/archive?latitude={}&longitude={}&daily={}&start_date={day}&end_date={day}\
             &timezone={}&temperature_unit=fahrenheit&wind_speed_unit=mph&precipitation_unit=inch",
            self.config.base_url, latitude, longitude, DAILY_METRICS, TIMEZONE
        )
    }

    /// Extract index 0 of one metric's daily array
    ///
    /// The range is a single day, so a well-formed response carries
    /// exactly one entry per metric; anything else is missing data.
    fn first_value(
        values: Option<&Vec<Option<f64>>>,
        name: &'static str,
    ) -> Result<f64, ArchiveError> {
        values
            .and_then(|v| v.first().copied())
            .flatten()
            .ok_or_else(|| ArchiveError::MissingData(name.to_string()))
    }

    /// Extract the single-day observation from a response body
    fn extract_observation(daily: &DailyData) -> Result<DailyObservation, ArchiveError> {
        Ok(DailyObservation {
            mean_temperature: Self::first_value(
                daily.temperature_2m_mean.as_ref(),
                "temperature_2m_mean",
            )?,
            max_wind_speed: Self::first_value(
                daily.wind_speed_10m_max.as_ref(),
                "wind_speed_10m_max",
            )?,
            sum_precipitation: Self::first_value(
                daily.precipitation_sum.as_ref(),
                "precipitation_sum",
            )?,
        })
    }
}

#[async_trait]
impl HistoricalWeatherClient for OpenMeteoArchiveClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, date = %date))]
    async fn fetch_daily(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    ) -> Result<DailyObservation, ArchiveError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_archive_url(latitude, longitude, date);
        debug!(url = %url, "Fetching archived daily metrics");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ArchiveError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ArchiveError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(ArchiveError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ArchiveError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ArchiveResponse = response
            .json()
            .await
            .map_err(|e| ArchiveError::ParseError(e.to_string()))?;

        let daily = api_response
            .daily
            .ok_or_else(|| ArchiveError::MissingData("daily".to_string()))?;

        Self::extract_observation(&daily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).expect("valid date")
    }

    #[test]
    fn test_config_defaults() {
        let config = ArchiveConfig::default();
        assert_eq!(config.base_url, "https://archive-api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(OpenMeteoArchiveClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenMeteoArchiveClient::validate_coordinates(90.0, 180.0).is_ok());
        assert!(OpenMeteoArchiveClient::validate_coordinates(29.9547, -90.0751).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(OpenMeteoArchiveClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenMeteoArchiveClient::validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn test_build_archive_url_single_day_range() {
        let client = OpenMeteoArchiveClient::with_defaults().expect("client creation");
        let url = client.build_archive_url(29.9547, -90.0751, day(2024, 10, 31));

        assert!(url.starts_with("https://archive-api.open-meteo.com/v1/archive?"));
        assert!(url.contains("latitude=29.9547"));
        assert!(url.contains("longitude=-90.0751"));
        assert!(url.contains("daily=precipitation_sum,wind_speed_10m_max,temperature_2m_mean"));
        assert!(url.contains("start_date=2024-10-31"));
        assert!(url.contains("end_date=2024-10-31"));
        assert!(url.contains("timezone=America%2FChicago"));
        assert!(url.contains("temperature_unit=fahrenheit"));
        assert!(url.contains("wind_speed_unit=mph"));
        assert!(url.contains("precipitation_unit=inch"));
    }

    #[test]
    fn test_build_archive_url_zero_pads_date() {
        let client = OpenMeteoArchiveClient::with_defaults().expect("client creation");
        let url = client.build_archive_url(29.9547, -90.0751, day(2021, 3, 7));
        assert!(url.contains("start_date=2021-03-07"));
    }

    #[test]
    fn test_extract_observation_success() {
        let daily = DailyData {
            time: vec!["2024-10-31".to_string()],
            temperature_2m_mean: Some(vec![Some(71.4)]),
            wind_speed_10m_max: Some(vec![Some(9.8)]),
            precipitation_sum: Some(vec![Some(0.0)]),
        };

        let obs = OpenMeteoArchiveClient::extract_observation(&daily).expect("extracts");
        assert!((obs.mean_temperature - 71.4).abs() < f64::EPSILON);
        assert!((obs.max_wind_speed - 9.8).abs() < f64::EPSILON);
        assert!((obs.sum_precipitation - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_observation_null_entry() {
        let daily = DailyData {
            time: vec!["1940-01-01".to_string()],
            temperature_2m_mean: Some(vec![None]),
            wind_speed_10m_max: Some(vec![Some(2.2)]),
            precipitation_sum: Some(vec![Some(0.0)]),
        };

        let err = OpenMeteoArchiveClient::extract_observation(&daily);
        assert!(matches!(err, Err(ArchiveError::MissingData(name)) if name == "temperature_2m_mean"));
    }

    #[test]
    fn test_extract_observation_missing_metric() {
        let daily = DailyData {
            time: vec!["2024-10-31".to_string()],
            temperature_2m_mean: Some(vec![Some(71.4)]),
            wind_speed_10m_max: None,
            precipitation_sum: Some(vec![Some(0.0)]),
        };

        let err = OpenMeteoArchiveClient::extract_observation(&daily);
        assert!(matches!(err, Err(ArchiveError::MissingData(name)) if name == "wind_speed_10m_max"));
    }

    #[test]
    fn test_extract_observation_empty_array() {
        let daily = DailyData {
            time: vec![],
            temperature_2m_mean: Some(vec![]),
            wind_speed_10m_max: Some(vec![]),
            precipitation_sum: Some(vec![]),
        };

        assert!(OpenMeteoArchiveClient::extract_observation(&daily).is_err());
    }

    #[test]
    fn test_archive_error_display() {
        let err = ArchiveError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));

        let err = ArchiveError::MissingData("daily".to_string());
        assert!(err.to_string().contains("daily"));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenMeteoArchiveClient::with_defaults().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = ArchiveConfig {
            base_url: "https://mirror.example.com/v1".to_string(),
            timeout_secs: 10,
        };

        let json = serde_json::to_string(&config).expect("serialize");
        let deserialized: ArchiveConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(deserialized.base_url, "https://mirror.example.com/v1");
        assert_eq!(deserialized.timeout_secs, 10);
    }

    #[test]
    fn test_config_deserialization_applies_defaults() {
        let config: ArchiveConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.base_url, "https://archive-api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 30);
    }
}
