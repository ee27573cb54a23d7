use assert_approx_eq::assert_approx_eq;
use price_forecast::error::ForecastError;
use price_forecast::volatility::{
    annualized_volatility, daily_volatility, log_returns, standard_deviation,
    TRADING_DAYS_PER_YEAR,
};

fn sample_prices() -> Vec<f64> {
    vec![50.0, 51.0, 49.0, 52.0, 53.0]
}

#[test]
fn test_log_returns_length_and_values() {
    let prices = sample_prices();
    let returns = log_returns(&prices).unwrap();

    assert_eq!(returns.len(), prices.len() - 1);

    // Exponentiating each return recovers the price ratio
    for (i, r) in returns.iter().enumerate() {
        assert_approx_eq!(r.exp(), prices[i + 1] / prices[i], 1e-12);
    }
}

#[test]
fn test_log_returns_requires_two_prices() {
    let result = log_returns(&[100.0]);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));

    let result = log_returns(&[]);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));
}

#[test]
fn test_log_returns_rejects_non_positive_prices() {
    let result = log_returns(&[100.0, 0.0, 101.0]);
    assert!(matches!(result, Err(ForecastError::InvalidInput(_))));

    let result = log_returns(&[100.0, -5.0]);
    assert!(matches!(result, Err(ForecastError::InvalidInput(_))));
}

#[test]
fn test_standard_deviation_is_population_estimator() {
    // Dividing by n (not n-1) gives exactly 2 for this classic set
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_approx_eq!(standard_deviation(&values).unwrap(), 2.0, 1e-12);
}

#[test]
fn test_standard_deviation_of_constant_series_is_zero() {
    let values = [3.5, 3.5, 3.5, 3.5];
    assert_approx_eq!(standard_deviation(&values).unwrap(), 0.0, 1e-15);
}

#[test]
fn test_standard_deviation_rejects_empty_input() {
    let result = standard_deviation(&[]);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));
}

#[test]
fn test_daily_volatility_known_series() {
    assert_approx_eq!(
        daily_volatility(&sample_prices()).unwrap(),
        0.0354884877952926,
        1e-12
    );
}

#[test]
fn test_annualized_volatility_scales_daily_by_root_252() {
    let prices = sample_prices();
    let daily = daily_volatility(&prices).unwrap();
    let annual = annualized_volatility(&prices).unwrap();

    assert_approx_eq!(annual, daily * TRADING_DAYS_PER_YEAR.sqrt() * 100.0, 1e-10);
    assert_approx_eq!(annual, 56.33622786725707, 1e-6);
}
