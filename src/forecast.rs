//! Forward price projection with time-scaled confidence bands

use crate::error::{ForecastError, Result};
use crate::indicators::EconomicIndicators;
use crate::models::ForecastModel;
use crate::volatility::daily_volatility;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Forecast horizons offered by the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    /// 7 days
    OneWeek,
    /// 30 days
    OneMonth,
    /// 90 days
    ThreeMonths,
    /// 180 days
    SixMonths,
    /// 365 days
    TwelveMonths,
}

impl Horizon {
    /// All horizons, in display order
    pub const ALL: [Horizon; 5] = [
        Horizon::OneWeek,
        Horizon::OneMonth,
        Horizon::ThreeMonths,
        Horizon::SixMonths,
        Horizon::TwelveMonths,
    ];

    /// Number of forecast days this horizon covers
    pub fn days(&self) -> usize {
        match self {
            Horizon::OneWeek => 7,
            Horizon::OneMonth => 30,
            Horizon::ThreeMonths => 90,
            Horizon::SixMonths => 180,
            Horizon::TwelveMonths => 365,
        }
    }

    /// Selector string used by the display layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::OneWeek => "1w",
            Horizon::OneMonth => "1m",
            Horizon::ThreeMonths => "3m",
            Horizon::SixMonths => "6m",
            Horizon::TwelveMonths => "12m",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Horizon {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1w" => Ok(Horizon::OneWeek),
            "1m" => Ok(Horizon::OneMonth),
            "3m" => Ok(Horizon::ThreeMonths),
            "6m" => Ok(Horizon::SixMonths),
            "12m" => Ok(Horizon::TwelveMonths),
            other => Err(ForecastError::InvalidParameter(format!(
                "Unknown forecast horizon: {}",
                other
            ))),
        }
    }
}

/// One forecast request over an immutable snapshot of the inputs
///
/// The engine borrows the price series and never mutates it. The series
/// must not be mutated by the caller for the duration of the call; pass
/// a copy if the underlying data is live.
#[derive(Debug, Clone, Copy)]
pub struct ForecastRequest<'a> {
    /// Historical prices, chronological, oldest first
    pub prices: &'a [f64],
    /// Selected drift model
    pub model: ForecastModel,
    /// Number of days to project, at least 1 (1..=365 is the intended range)
    pub horizon_days: usize,
    /// Macro factors, required by the ensemble model
    pub indicators: Option<&'a EconomicIndicators>,
}

impl<'a> ForecastRequest<'a> {
    /// Create a request with an explicit day count and no indicators
    pub fn new(prices: &'a [f64], model: ForecastModel, horizon_days: usize) -> Self {
        Self {
            prices,
            model,
            horizon_days,
            indicators: None,
        }
    }

    /// Create a request from a preset horizon
    pub fn for_horizon(prices: &'a [f64], model: ForecastModel, horizon: Horizon) -> Self {
        Self::new(prices, model, horizon.days())
    }

    /// Attach economic indicators to the request
    pub fn with_indicators(mut self, indicators: &'a EconomicIndicators) -> Self {
        self.indicators = Some(indicators);
        self
    }
}

/// Projected mean path and confidence bands, aligned by days ahead
///
/// Index 0 is one day past the end of the historical series. At every
/// index, `lower95 <= lower68 <= mean <= upper68 <= upper95`; the bands
/// are multiplicative exponential envelopes around the mean, so all
/// values stay positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    mean: Vec<f64>,
    upper68: Vec<f64>,
    lower68: Vec<f64>,
    upper95: Vec<f64>,
    lower95: Vec<f64>,
}

impl ForecastResult {
    /// Mean forecast path
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Upper 68% band (one sigma above the mean in log space)
    pub fn upper68(&self) -> &[f64] {
        &self.upper68
    }

    /// Lower 68% band
    pub fn lower68(&self) -> &[f64] {
        &self.lower68
    }

    /// Upper 95% band (two sigma above the mean in log space)
    pub fn upper95(&self) -> &[f64] {
        &self.upper95
    }

    /// Lower 95% band
    pub fn lower95(&self) -> &[f64] {
        &self.lower95
    }

    /// Number of forecast days
    pub fn horizon(&self) -> usize {
        self.mean.len()
    }

    /// Serialize to a JSON string for hand-off to a display layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Generate a forecast for the request
///
/// Two phases: estimate the daily diffusion rate from historical log
/// returns, then project the mean path step by step, expanding the bands
/// with the square root of elapsed time. Each step's drift depends on the
/// previous step's projection, so the loop runs in strict order.
///
/// The band percentages are nominal, taken from a Gaussian approximation
/// of cumulative log returns at one and two standard deviations; they are
/// not recalibrated against historical accuracy.
pub fn generate_forecast(request: &ForecastRequest<'_>) -> Result<ForecastResult> {
    if request.horizon_days == 0 {
        return Err(ForecastError::InvalidParameter(
            "Forecast horizon must be at least one day".to_string(),
        ));
    }

    let daily_vol = daily_volatility(request.prices)?;
    let rule = request.model.drift_rule(request.prices, request.indicators)?;

    let horizon = request.horizon_days;
    let mut mean = Vec::with_capacity(horizon);
    let mut upper68 = Vec::with_capacity(horizon);
    let mut lower68 = Vec::with_capacity(horizon);
    let mut upper95 = Vec::with_capacity(horizon);
    let mut lower95 = Vec::with_capacity(horizon);

    // daily_volatility has already rejected series shorter than 2
    let mut current = request.prices[request.prices.len() - 1];

    for step in 1..=horizon {
        current *= 1.0 + rule.drift(current);

        let sigma = daily_vol * (step as f64).sqrt();

        mean.push(current);
        upper68.push(current * sigma.exp());
        lower68.push(current * (-sigma).exp());
        upper95.push(current * (2.0 * sigma).exp());
        lower95.push(current * (-2.0 * sigma).exp());
    }

    Ok(ForecastResult {
        mean,
        upper68,
        lower68,
        upper95,
        lower95,
    })
}
