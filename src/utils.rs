//! Utility functions for the price_forecast crate

use chrono::{Duration, NaiveDate};

/// Calendar dates labeling each forecast day
///
/// Continues day by day from the last historical date, so the first label
/// is `last_date + 1`. Chart layers pair these with the forecast arrays.
pub fn forecast_dates(last_date: NaiveDate, horizon_days: usize) -> Vec<NaiveDate> {
    (1..=horizon_days as i64)
        .map(|offset| last_date + Duration::days(offset))
        .collect()
}
