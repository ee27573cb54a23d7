//! Drift models for forward price projection

use crate::error::{ForecastError, Result};
use crate::indicators::{EconomicIndicators, OIL, USD_INDEX};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Daily upward bias applied by the exponential moving average model
pub const EMA_DAILY_DRIFT: f64 = 0.0005;
/// Fraction of the gap to the reference price recovered per step
pub const MEAN_REVERSION_RATE: f64 = 0.05;
/// How far back (in steps) the mean reversion reference price sits
pub const MEAN_REVERSION_LOOKBACK: usize = 30;
/// Base drift applied by the ensemble model before factor adjustments
pub const ENSEMBLE_BASE_DRIFT: f64 = 0.0002;
/// Oil price at which the ensemble oil adjustment is neutral
pub const OIL_BASELINE: f64 = 75.0;
/// Drift added per dollar of oil above the baseline
pub const OIL_SENSITIVITY: f64 = 0.001;
/// Dollar index level at which the ensemble dollar adjustment is neutral
pub const USD_BASELINE: f64 = 100.0;
/// Drift added per point of dollar weakness below the baseline
pub const USD_SENSITIVITY: f64 = 0.001;

/// Forecasting models available to callers
///
/// The set is fixed; every match over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastModel {
    /// Flat, no-trend baseline
    Sma,
    /// Mild constant upward bias
    Ema,
    /// Mean reversion toward a longer-term reference price
    Arima,
    /// Base drift plus macro factor adjustments
    Ensemble,
}

/// Resolved per-step drift rule for one forecast run
///
/// Produced once per request, after all model preconditions have been
/// checked; applying it inside the projection loop cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DriftRule {
    /// The same drift every step
    Constant(f64),
    /// Drift proportional to the gap between a reference price and the
    /// current projection
    Reversion { reference: f64, rate: f64 },
}

impl DriftRule {
    /// Drift to apply given the current projected price
    pub(crate) fn drift(&self, current_forecast: f64) -> f64 {
        match *self {
            DriftRule::Constant(drift) => drift,
            DriftRule::Reversion { reference, rate } => (reference - current_forecast) * rate,
        }
    }
}

impl ForecastModel {
    /// All models, in display order
    pub const ALL: [ForecastModel; 4] = [
        ForecastModel::Sma,
        ForecastModel::Ema,
        ForecastModel::Arima,
        ForecastModel::Ensemble,
    ];

    /// Selector string used by the display layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastModel::Sma => "sma",
            ForecastModel::Ema => "ema",
            ForecastModel::Arima => "arima",
            ForecastModel::Ensemble => "ensemble",
        }
    }

    /// Static heuristic trust score, in percent
    ///
    /// Configuration data shown next to the statistics, not derived from
    /// backtesting.
    pub fn confidence_pct(&self) -> f64 {
        match self {
            ForecastModel::Ensemble => 85.0,
            ForecastModel::Arima => 72.0,
            ForecastModel::Sma | ForecastModel::Ema => 60.0,
        }
    }

    /// Resolve this model's drift rule for a forecast over the given inputs
    ///
    /// All model preconditions are checked here, before any projection
    /// work: the mean reversion lookback for `Arima`, the required
    /// indicator keys for `Ensemble`.
    pub(crate) fn drift_rule(
        &self,
        prices: &[f64],
        indicators: Option<&EconomicIndicators>,
    ) -> Result<DriftRule> {
        match self {
            ForecastModel::Sma => Ok(DriftRule::Constant(0.0)),
            ForecastModel::Ema => Ok(DriftRule::Constant(EMA_DAILY_DRIFT)),
            ForecastModel::Arima => {
                if prices.len() < MEAN_REVERSION_LOOKBACK {
                    return Err(ForecastError::InsufficientData(format!(
                        "Mean reversion needs at least {} prices, got {}",
                        MEAN_REVERSION_LOOKBACK,
                        prices.len()
                    )));
                }
                Ok(DriftRule::Reversion {
                    reference: prices[prices.len() - MEAN_REVERSION_LOOKBACK],
                    rate: MEAN_REVERSION_RATE,
                })
            }
            ForecastModel::Ensemble => {
                let indicators = indicators.ok_or_else(|| {
                    ForecastError::MissingIndicator(
                        "Ensemble model requires economic indicators".to_string(),
                    )
                })?;
                let oil_impact = (indicators.require(OIL)? - OIL_BASELINE) * OIL_SENSITIVITY;
                let usd_impact = (USD_BASELINE - indicators.require(USD_INDEX)?) * USD_SENSITIVITY;
                Ok(DriftRule::Constant(
                    ENSEMBLE_BASE_DRIFT + oil_impact + usd_impact,
                ))
            }
        }
    }

    /// Drift this model applies at a single projection step
    pub fn drift(
        &self,
        prices: &[f64],
        indicators: Option<&EconomicIndicators>,
        current_forecast: f64,
    ) -> Result<f64> {
        Ok(self
            .drift_rule(prices, indicators)?
            .drift(current_forecast))
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastModel {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sma" => Ok(ForecastModel::Sma),
            "ema" => Ok(ForecastModel::Ema),
            "arima" => Ok(ForecastModel::Arima),
            "ensemble" => Ok(ForecastModel::Ensemble),
            other => Err(ForecastError::InvalidParameter(format!(
                "Unknown forecast model: {}",
                other
            ))),
        }
    }
}
