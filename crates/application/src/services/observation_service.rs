//! Observation service
//!
//! Drives the fetch pass: one archive call per requested year, in order,
//! tolerating per-year failures without aborting the batch. Also builds
//! and persists the rows the reporting surface reads back.

use std::{fmt, sync::Arc};

use domain::entities::{DailyRecord, ObservationSeries, SeriesSummary};
use domain::query::ObservationQuery;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ArchivePort, ObservationStorePort, StoredObservation},
};

/// Service orchestrating fetch, aggregation and persistence
pub struct ObservationService {
    archive: Arc<dyn ArchivePort>,
    store: Arc<dyn ObservationStorePort>,
}

impl fmt::Debug for ObservationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservationService").finish_non_exhaustive()
    }
}

impl ObservationService {
    /// Create a new observation service
    #[must_use]
    pub fn new(archive: Arc<dyn ArchivePort>, store: Arc<dyn ObservationStorePort>) -> Self {
        Self { archive, store }
    }

    /// Fetch the series for a query, one archive call per year, in order
    ///
    /// A year whose fetch fails contributes no record; the failure is
    /// logged with its year and cause and the pass moves on. The returned
    /// series is therefore a subset of the requested years, order
    /// preserved. An empty years list yields an empty series without any
    /// archive traffic.
    #[instrument(skip(self, query), fields(years = query.years().len(), date = %query.date()))]
    pub async fn fetch_series(&self, query: &ObservationQuery) -> ObservationSeries {
        let mut series = ObservationSeries::with_capacity(query.years().len());

        for &year in query.years() {
            let Some(date) = query.date().for_year(year) else {
                // Feb 29 outside a leap year: the date does not exist,
                // which counts as a per-year failure
                warn!(year, date = %query.date(), "Date does not exist in this year; skipping");
                continue;
            };

            match self.archive.fetch_daily(query.location(), date).await {
                Ok(metrics) => {
                    debug!(year, "Fetched daily metrics");
                    series.push(DailyRecord {
                        year,
                        mean_temperature: metrics.mean_temperature,
                        max_wind_speed: metrics.max_wind_speed,
                        sum_precipitation: metrics.sum_precipitation,
                    });
                },
                Err(e) => {
                    warn!(year, error = %e, "Failed to retrieve data for year; continuing");
                },
            }
        }

        info!(
            fetched = series.len(),
            requested = query.years().len(),
            "Fetch pass complete"
        );
        series
    }

    /// Build the persistence rows for a fetched batch
    ///
    /// Every row carries its year's raw metrics plus the aggregates
    /// computed once over the whole batch.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptySeries` (wrapped) when the series holds
    /// no records - a fully-failed batch has no aggregates to persist.
    pub fn build_rows(
        query: &ObservationQuery,
        series: &ObservationSeries,
    ) -> Result<Vec<StoredObservation>, ApplicationError> {
        let summary = SeriesSummary::from_series(series)?;
        Ok(series
            .iter()
            .map(|record| StoredObservation::from_record(query, record, &summary))
            .collect())
    }

    /// Persist a fetched batch, replacing prior rows for the same
    /// location and calendar date
    ///
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Fails with `DomainError::EmptySeries` (wrapped) for an empty batch,
    /// or an `ApplicationError` from the store.
    #[instrument(skip(self, query, series), fields(records = series.len()))]
    pub async fn persist(
        &self,
        query: &ObservationQuery,
        series: &ObservationSeries,
    ) -> Result<usize, ApplicationError> {
        let rows = Self::build_rows(query, series)?;

        let removed = self
            .store
            .delete_matching(query.location(), query.date())
            .await?;
        if removed > 0 {
            debug!(removed, "Replaced prior rows for this location/date");
        }

        self.store.save_all(&rows).await?;
        info!(rows = rows.len(), "Batch persisted");
        Ok(rows.len())
    }

    /// Retrieve the stored rows for a query's location and calendar date,
    /// ordered by year
    pub async fn report(
        &self,
        query: &ObservationQuery,
    ) -> Result<Vec<StoredObservation>, ApplicationError> {
        self.store
            .find_matching(query.location(), query.date())
            .await
    }
}
