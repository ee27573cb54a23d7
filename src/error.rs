//! Error types for the price_forecast crate

use thiserror::Error;

/// Custom error types for the price_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Series is shorter than the minimum an operation needs
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A price violated the positivity requirement
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required economic indicator is absent or unusable
    #[error("Missing indicator: {0}")]
    MissingIndicator(String),

    /// Return volatility is exactly zero, so the Sharpe ratio is undefined
    #[error("Volatility is zero, Sharpe ratio is undefined")]
    ZeroVolatility,

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from serializing results
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
