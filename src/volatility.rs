//! Return and volatility calculations over a price series

use crate::error::{ForecastError, Result};

/// Trading days per year, used for annualization
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Calculate log returns from a price series
///
/// Returns one value per consecutive pair of prices, so the result is one
/// element shorter than the input. Prices must be chronological (oldest
/// first) and strictly positive.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.len() < 2 {
        return Err(ForecastError::InsufficientData(format!(
            "Need at least 2 prices to compute returns, got {}",
            prices.len()
        )));
    }

    if let Some(bad) = prices.iter().find(|&&p| p <= 0.0) {
        return Err(ForecastError::InvalidInput(format!(
            "Prices must be positive to compute log returns, got {}",
            bad
        )));
    }

    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Population standard deviation of a series of values
///
/// This is the biased estimator (divides by n, not n-1); callers must not
/// assume Bessel's correction.
pub fn standard_deviation(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ForecastError::InsufficientData(
            "Cannot compute the standard deviation of an empty series".to_string(),
        ));
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Ok(variance.sqrt())
}

/// Standard deviation of daily log returns
///
/// This is the per-step diffusion rate used to scale forecast confidence
/// bands. Not annualized and not expressed in percent.
pub fn daily_volatility(prices: &[f64]) -> Result<f64> {
    standard_deviation(&log_returns(prices)?)
}

/// Annualized return volatility, expressed as a percentage
pub fn annualized_volatility(prices: &[f64]) -> Result<f64> {
    Ok(daily_volatility(prices)? * TRADING_DAYS_PER_YEAR.sqrt() * 100.0)
}
