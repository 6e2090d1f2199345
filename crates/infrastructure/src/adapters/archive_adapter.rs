//! Archive adapter - Implements ArchivePort using integration_archive

use application::error::ApplicationError;
use application::ports::{ArchivePort, DailyMetrics};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::value_objects::GeoLocation;
use integration_archive::{
    ArchiveConfig, ArchiveError, HistoricalWeatherClient, OpenMeteoArchiveClient,
};
use tracing::instrument;

/// Adapter for historical observations using the Open-Meteo Archive API
pub struct ArchiveAdapter {
    client: OpenMeteoArchiveClient,
}

impl std::fmt::Debug for ArchiveAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveAdapter")
            .field("client", &"OpenMeteoArchiveClient")
            .finish()
    }
}

impl ArchiveAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoArchiveClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: ArchiveConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoArchiveClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration archive error to application error
    fn map_error(err: ArchiveError) -> ApplicationError {
        match err {
            ArchiveError::ConnectionFailed(e)
            | ArchiveError::RequestFailed(e)
            | ArchiveError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            ArchiveError::ParseError(e) => {
                ApplicationError::ExternalService(format!("Unparseable response: {e}"))
            },
            ArchiveError::MissingData(name) => {
                ApplicationError::ExternalService(format!("Missing daily value: {name}"))
            },
            ArchiveError::RateLimitExceeded => {
                ApplicationError::ExternalService("Rate limit exceeded".to_string())
            },
            ArchiveError::InvalidCoordinates => {
                ApplicationError::Configuration("Invalid coordinates".to_string())
            },
        }
    }
}

#[async_trait]
impl ArchivePort for ArchiveAdapter {
    #[instrument(skip(self), fields(location = %location, date = %date))]
    async fn fetch_daily(
        &self,
        location: GeoLocation,
        date: NaiveDate,
    ) -> Result<DailyMetrics, ApplicationError> {
        let observation = self
            .client
            .fetch_daily(location.latitude(), location.longitude(), date)
            .await
            .map_err(Self::map_error)?;

        Ok(DailyMetrics {
            mean_temperature: observation.mean_temperature,
            max_wind_speed: observation.max_wind_speed,
            sum_precipitation: observation.sum_precipitation,
        })
    }
}
