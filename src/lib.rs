//! # Price Forecast
//!
//! A Rust library for short and medium horizon price forecasting with
//! probabilistic confidence bands and summary risk statistics.
//!
//! ## Features
//!
//! - Series statistics: log returns, realized and annualized volatility,
//!   annualized return, Sharpe ratio, maximum drawdown
//! - Four interchangeable drift models (`sma`, `ema`, `arima`, `ensemble`)
//! - Confidence bands that widen with the square root of elapsed time
//! - Plain-data results ready for a chart or dashboard layer
//!
//! The engine is a pure computation over in-memory numeric series: no
//! data acquisition, no persistence, no shared state. Every operation is
//! a deterministic function of its inputs, so concurrent callers need no
//! coordination as long as each passes its own immutable snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use price_forecast::forecast::{generate_forecast, ForecastRequest};
//! use price_forecast::metrics::{risk_statistics, DEFAULT_RISK_FREE_RATE_PCT};
//! use price_forecast::models::ForecastModel;
//!
//! fn main() -> price_forecast::Result<()> {
//!     let prices = vec![50.0, 51.0, 49.0, 52.0, 53.0];
//!
//!     // Project one week ahead with the flat baseline model
//!     let request = ForecastRequest::new(&prices, ForecastModel::Sma, 7);
//!     let forecast = generate_forecast(&request)?;
//!     assert_eq!(forecast.horizon(), 7);
//!
//!     // Summary statistics for the same series
//!     let stats = risk_statistics(&prices, ForecastModel::Sma, DEFAULT_RISK_FREE_RATE_PCT)?;
//!     println!("{}", stats);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod forecast;
pub mod indicators;
pub mod metrics;
pub mod models;
pub mod utils;
pub mod volatility;

// Re-export commonly used types
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{generate_forecast, ForecastRequest, ForecastResult, Horizon};
pub use crate::indicators::EconomicIndicators;
pub use crate::metrics::{risk_statistics, RiskStatistics};
pub use crate::models::ForecastModel;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
