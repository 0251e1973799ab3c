pub mod indicators;
pub mod snapshot;
pub mod scoring;
pub mod analyzer;

#[cfg(test)]
mod indicators_tests;

pub use indicators::*;
pub use snapshot::*;
pub use scoring::*;
pub use analyzer::*;

/// Daily series with `open == close`, a one-unit range on each side and
/// consecutive calendar dates from 2024-01-01.
#[cfg(test)]
pub(crate) fn test_series(closes: &[f64]) -> analysis_core::PriceSeries {
    use analysis_core::{PricePoint, PriceSeries};
    use chrono::{Duration, NaiveDate};

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: start + Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: (close - 1.0).max(0.0),
            close,
            volume: 1_000_000,
        })
        .collect();
    PriceSeries::new(points).unwrap()
}
