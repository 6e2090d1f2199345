//! Observation series and its aggregations
//!
//! A series is append-only while a fetch pass populates it and read-only
//! afterwards. Aggregations are pure functions of the series contents; an
//! empty series yields a defined error rather than an undefined value.

use serde::{Deserialize, Serialize};

use crate::entities::DailyRecord;
use crate::errors::DomainError;
use crate::metrics::{AggregateOp, MetricField};

/// Ordered collection of daily records for one location/date across years
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationSeries {
    records: Vec<DailyRecord>,
}

impl ObservationSeries {
    /// Create an empty series
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a series with room for the expected number of records
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record; fetch order is preserved
    pub fn push(&mut self, record: DailyRecord) {
        self.records.push(record);
    }

    /// Number of records in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, in fetch order
    #[must_use]
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Iterate over the records in fetch order
    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    /// Project one metric field across all records, in series order
    #[must_use]
    pub fn project(&self, field: MetricField) -> Vec<f64> {
        self.records.iter().map(|r| r.metric(field)).collect()
    }

    /// Reduce one metric field with an aggregate operator
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptySeries` when the series holds zero
    /// records; min, max and avg are undefined over nothing, and sum is
    /// rejected alongside them so a fully-failed batch is distinguishable
    /// from a zero-valued result.
    pub fn aggregate(&self, field: MetricField, op: AggregateOp) -> Result<f64, DomainError> {
        let values = self.project(field);
        if values.is_empty() {
            return Err(DomainError::EmptySeries);
        }

        #[allow(clippy::cast_precision_loss)]
        let result = match op {
            AggregateOp::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            AggregateOp::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            AggregateOp::Avg => values.iter().sum::<f64>() / values.len() as f64,
            AggregateOp::Sum => values.iter().sum(),
        };
        Ok(result)
    }
}

impl<'a> IntoIterator for &'a ObservationSeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<DailyRecord> for ObservationSeries {
    fn from_iter<T: IntoIterator<Item = DailyRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// The aggregates persisted alongside every raw record of a batch
///
/// Temperature and wind speed carry min/max/avg; precipitation carries
/// min/max/sum, matching the stored table's columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Number of records the aggregates were computed over
    pub record_count: usize,
    /// Minimum of the mean temperatures (°F)
    pub min_temperature: f64,
    /// Maximum of the mean temperatures (°F)
    pub max_temperature: f64,
    /// Average of the mean temperatures (°F)
    pub avg_temperature: f64,
    /// Minimum of the max wind speeds (mph)
    pub min_wind_speed: f64,
    /// Maximum of the max wind speeds (mph)
    pub max_wind_speed: f64,
    /// Average of the max wind speeds (mph)
    pub avg_wind_speed: f64,
    /// Minimum of the precipitation totals (inches)
    pub min_precipitation: f64,
    /// Maximum of the precipitation totals (inches)
    pub max_precipitation: f64,
    /// Sum of the precipitation totals (inches)
    pub sum_precipitation: f64,
}

impl SeriesSummary {
    /// Compute the persisted aggregates over a populated series
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptySeries` when the series holds no records.
    pub fn from_series(series: &ObservationSeries) -> Result<Self, DomainError> {
        use AggregateOp::{Avg, Max, Min, Sum};
        use MetricField::{MaxWindSpeed, MeanTemperature, SumPrecipitation};

        Ok(Self {
            record_count: series.len(),
            min_temperature: series.aggregate(MeanTemperature, Min)?,
            max_temperature: series.aggregate(MeanTemperature, Max)?,
            avg_temperature: series.aggregate(MeanTemperature, Avg)?,
            min_wind_speed: series.aggregate(MaxWindSpeed, Min)?,
            max_wind_speed: series.aggregate(MaxWindSpeed, Max)?,
            avg_wind_speed: series.aggregate(MaxWindSpeed, Avg)?,
            min_precipitation: series.aggregate(SumPrecipitation, Min)?,
            max_precipitation: series.aggregate(SumPrecipitation, Max)?,
            sum_precipitation: series.aggregate(SumPrecipitation, Sum)?,
        })
    }
}
