//! Risk and performance statistics derived from a price series

use crate::error::{ForecastError, Result};
use crate::models::ForecastModel;
use crate::volatility::{annualized_volatility, TRADING_DAYS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// Conventional risk-free rate (in percent) for Sharpe ratio calculations
///
/// A default, not an assumption baked into the formula; callers with a
/// better value should pass their own.
pub const DEFAULT_RISK_FREE_RATE_PCT: f64 = 4.0;

/// Annualized return as a percentage, geometric over the whole series
pub fn annualized_return(prices: &[f64]) -> Result<f64> {
    if prices.len() < 2 {
        return Err(ForecastError::InsufficientData(format!(
            "Need at least 2 prices to annualize a return, got {}",
            prices.len()
        )));
    }

    let first = prices[0];
    if first <= 0.0 {
        return Err(ForecastError::InvalidInput(format!(
            "First price must be positive to annualize a return, got {}",
            first
        )));
    }

    let last = prices[prices.len() - 1];
    let exponent = TRADING_DAYS_PER_YEAR / prices.len() as f64;

    Ok(((last / first).powf(exponent) - 1.0) * 100.0)
}

/// Sharpe ratio from annualized return and volatility
///
/// `risk_free_rate_pct` is the annual risk-free rate in percent (see
/// [`DEFAULT_RISK_FREE_RATE_PCT`]). A series with zero return volatility
/// has no defined Sharpe ratio and produces
/// [`ForecastError::ZeroVolatility`] rather than an infinite value.
pub fn sharpe_ratio(prices: &[f64], risk_free_rate_pct: f64) -> Result<f64> {
    let volatility = annualized_volatility(prices)?;
    if volatility == 0.0 {
        return Err(ForecastError::ZeroVolatility);
    }

    Ok((annualized_return(prices)? - risk_free_rate_pct) / volatility)
}

/// Maximum drawdown as a percentage, via running peak tracking
///
/// Returns 0 for a series that never falls below a previous peak.
pub fn max_drawdown(prices: &[f64]) -> Result<f64> {
    if prices.is_empty() {
        return Err(ForecastError::InsufficientData(
            "Cannot compute the drawdown of an empty series".to_string(),
        ));
    }

    if let Some(bad) = prices.iter().find(|&&p| p <= 0.0) {
        return Err(ForecastError::InvalidInput(format!(
            "Prices must be positive to compute drawdown, got {}",
            bad
        )));
    }

    let mut peak: f64 = 0.0;
    let mut max_dd: f64 = 0.0;

    for &price in prices {
        if price > peak {
            peak = price;
        }
        let drawdown = (peak - price) / peak;
        if drawdown > max_dd {
            max_dd = drawdown;
        }
    }

    Ok(max_dd * 100.0)
}

/// Summary risk statistics for a price series under a selected model
///
/// Recomputed per request; the engine keeps no state between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskStatistics {
    /// Annualized return volatility, percent
    pub annualized_volatility_pct: f64,
    /// Annualized geometric return, percent
    pub annualized_return_pct: f64,
    /// Sharpe ratio over the supplied risk-free rate
    pub sharpe_ratio: f64,
    /// Maximum drawdown, percent
    pub max_drawdown_pct: f64,
    /// Static trust score of the selected model, percent
    pub model_confidence_pct: f64,
}

impl RiskStatistics {
    /// Serialize to a JSON string for hand-off to a display layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for RiskStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Risk Statistics:")?;
        writeln!(
            f,
            "  Volatility (ann.): {:.2}%",
            self.annualized_volatility_pct
        )?;
        writeln!(f, "  Return (ann.):     {:.2}%", self.annualized_return_pct)?;
        writeln!(f, "  Sharpe Ratio:      {:.2}", self.sharpe_ratio)?;
        writeln!(f, "  Max Drawdown:      -{:.2}%", self.max_drawdown_pct)?;
        writeln!(
            f,
            "  Model Confidence:  {:.0}%",
            self.model_confidence_pct
        )?;
        Ok(())
    }
}

/// Compute the full statistics snapshot a display layer consumes
pub fn risk_statistics(
    prices: &[f64],
    model: ForecastModel,
    risk_free_rate_pct: f64,
) -> Result<RiskStatistics> {
    Ok(RiskStatistics {
        annualized_volatility_pct: annualized_volatility(prices)?,
        annualized_return_pct: annualized_return(prices)?,
        sharpe_ratio: sharpe_ratio(prices, risk_free_rate_pct)?,
        max_drawdown_pct: max_drawdown(prices)?,
        model_confidence_pct: model.confidence_pct(),
    })
}
