//! Property-based tests for the observation series core
//!
//! These tests use proptest to verify aggregation invariants across many
//! randomly generated series.

use domain::{
    AggregateOp, CalendarDate, DailyRecord, GeoLocation, MetricField, ObservationQuery,
    ObservationSeries, SeriesSummary,
};
use proptest::prelude::*;

/// Strategy producing a plausible daily record for a random year
fn daily_record() -> impl Strategy<Value = DailyRecord> {
    (
        1940i32..=2030,
        -40.0f64..=120.0,
        0.0f64..=150.0,
        0.0f64..=30.0,
    )
        .prop_map(|(year, temp, wind, precip)| DailyRecord {
            year,
            mean_temperature: temp,
            max_wind_speed: wind,
            sum_precipitation: precip,
        })
}

fn series(min_len: usize) -> impl Strategy<Value = ObservationSeries> {
    prop::collection::vec(daily_record(), min_len..=24)
        .prop_map(|records| records.into_iter().collect())
}

fn any_field() -> impl Strategy<Value = MetricField> {
    prop::sample::select(&MetricField::ALL[..])
}

// ============================================================================
// Aggregation invariants
// ============================================================================

proptest! {
    #[test]
    fn avg_equals_sum_over_len(series in series(1), field in any_field()) {
        let sum = series.aggregate(field, AggregateOp::Sum).unwrap();
        let avg = series.aggregate(field, AggregateOp::Avg).unwrap();

        #[allow(clippy::cast_precision_loss)]
        let expected = sum / series.len() as f64;
        prop_assert!((avg - expected).abs() < 1e-9);
    }

    #[test]
    fn min_avg_max_are_ordered(series in series(1), field in any_field()) {
        let min = series.aggregate(field, AggregateOp::Min).unwrap();
        let avg = series.aggregate(field, AggregateOp::Avg).unwrap();
        let max = series.aggregate(field, AggregateOp::Max).unwrap();

        prop_assert!(min <= avg + 1e-9);
        prop_assert!(avg <= max + 1e-9);
    }

    #[test]
    fn every_record_lies_within_min_max_bounds(series in series(1)) {
        let min = series
            .aggregate(MetricField::MeanTemperature, AggregateOp::Min)
            .unwrap();
        let max = series
            .aggregate(MetricField::MeanTemperature, AggregateOp::Max)
            .unwrap();

        for record in &series {
            prop_assert!(record.mean_temperature >= min);
            prop_assert!(record.mean_temperature <= max);
        }
    }

    #[test]
    fn aggregate_is_pure(series in series(1), field in any_field()) {
        // Two calls with identical arguments on an unmodified series must
        // return bit-identical results
        for op in [AggregateOp::Min, AggregateOp::Max, AggregateOp::Avg, AggregateOp::Sum] {
            let first = series.aggregate(field, op).unwrap();
            let second = series.aggregate(field, op).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn projection_preserves_length_and_order(series in series(0), field in any_field()) {
        let projected = series.project(field);
        prop_assert_eq!(projected.len(), series.len());

        for (value, record) in projected.iter().zip(series.records()) {
            prop_assert_eq!(value.to_bits(), record.metric(field).to_bits());
        }
    }

    #[test]
    fn summary_agrees_with_aggregate(series in series(1)) {
        let summary = SeriesSummary::from_series(&series).unwrap();
        let min_temp = series
            .aggregate(MetricField::MeanTemperature, AggregateOp::Min)
            .unwrap();
        let sum_precip = series
            .aggregate(MetricField::SumPrecipitation, AggregateOp::Sum)
            .unwrap();

        prop_assert_eq!(summary.record_count, series.len());
        prop_assert_eq!(summary.min_temperature.to_bits(), min_temp.to_bits());
        prop_assert_eq!(summary.sum_precipitation.to_bits(), sum_precip.to_bits());
    }
}

// ============================================================================
// Query validation invariants
// ============================================================================

proptest! {
    #[test]
    fn queries_never_contain_pre_floor_years(years in prop::collection::vec(1800i32..=2030, 0..12)) {
        let result = ObservationQuery::new(
            GeoLocation::new_orleans(),
            CalendarDate::halloween(),
            years.clone(),
        );

        if years.iter().any(|&y| y < 1940) {
            prop_assert!(result.is_err());
        } else {
            let query = result.unwrap();
            prop_assert_eq!(query.years(), &years[..]);
        }
    }

    #[test]
    fn trailing_years_are_consecutive_and_end_at_last_year(
        count in 1u32..=30,
        last_year in 1970i32..=2030,
    ) {
        let query = ObservationQuery::trailing_years(
            GeoLocation::new_orleans(),
            CalendarDate::halloween(),
            count,
            last_year,
        )
        .unwrap();

        let years = query.years();
        prop_assert_eq!(years.len(), count as usize);
        prop_assert_eq!(*years.last().unwrap(), last_year);
        for pair in years.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
    }
}
