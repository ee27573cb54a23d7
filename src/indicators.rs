//! Named macroeconomic factors supplied by an external data layer

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key for the WTI crude oil price factor
pub const OIL: &str = "oil";
/// Key for the agricultural price index factor
pub const AG_INDEX: &str = "agIndex";
/// Key for the trade-weighted US dollar index factor
pub const USD_INDEX: &str = "usdIndex";
/// Key for the consumer price index factor
pub const CPI: &str = "cpi";

/// Mapping of named macro factors to their latest values
///
/// The ensemble model requires [`OIL`] and [`USD_INDEX`]; the remaining
/// keys are carried for the display layer. A required key that is absent
/// or non-finite surfaces as [`ForecastError::MissingIndicator`]; the
/// engine never substitutes a default for missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicators {
    values: HashMap<String, f64>,
}

impl EconomicIndicators {
    /// Create an empty set of indicators
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a factor value, replacing any previous one
    pub fn set(&mut self, key: &str, value: f64) -> &mut Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Look up a factor, if present
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Look up a factor a model requires
    pub fn require(&self, key: &str) -> Result<f64> {
        match self.values.get(key) {
            Some(&value) if value.is_finite() => Ok(value),
            Some(&value) => Err(ForecastError::MissingIndicator(format!(
                "Indicator '{}' has a non-finite value: {}",
                key, value
            ))),
            None => Err(ForecastError::MissingIndicator(format!(
                "Indicator '{}' is required but was not provided",
                key
            ))),
        }
    }

    /// Number of factors present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no factors are present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
