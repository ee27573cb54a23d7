use assert_approx_eq::assert_approx_eq;
use price_forecast::error::ForecastError;
use price_forecast::metrics::{
    annualized_return, max_drawdown, risk_statistics, sharpe_ratio, DEFAULT_RISK_FREE_RATE_PCT,
};
use price_forecast::models::ForecastModel;

fn sample_prices() -> Vec<f64> {
    vec![50.0, 51.0, 49.0, 52.0, 53.0]
}

#[test]
fn test_annualized_return_known_series() {
    // ((53/50)^(252/5) - 1) * 100
    assert_approx_eq!(
        annualized_return(&sample_prices()).unwrap(),
        1785.452559037454,
        1e-3
    );
}

#[test]
fn test_annualized_return_flat_series_is_zero() {
    let prices = [100.0, 100.0, 100.0];
    assert_approx_eq!(annualized_return(&prices).unwrap(), 0.0, 1e-12);
}

#[test]
fn test_annualized_return_requires_two_prices() {
    let result = annualized_return(&[100.0]);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));
}

#[test]
fn test_annualized_return_rejects_non_positive_start() {
    let result = annualized_return(&[0.0, 100.0]);
    assert!(matches!(result, Err(ForecastError::InvalidInput(_))));
}

#[test]
fn test_sharpe_ratio_known_series() {
    assert_approx_eq!(
        sharpe_ratio(&sample_prices(), DEFAULT_RISK_FREE_RATE_PCT).unwrap(),
        31.62179340858645,
        1e-6
    );
}

#[test]
fn test_sharpe_ratio_uses_caller_risk_free_rate() {
    let prices = sample_prices();
    let at_default = sharpe_ratio(&prices, 4.0).unwrap();
    let at_zero = sharpe_ratio(&prices, 0.0).unwrap();

    // A lower risk-free rate leaves more excess return
    assert!(at_zero > at_default);
}

#[test]
fn test_sharpe_ratio_zero_volatility_is_an_error() {
    let prices = [100.0, 100.0, 100.0, 100.0];
    let result = sharpe_ratio(&prices, DEFAULT_RISK_FREE_RATE_PCT);
    assert!(matches!(result, Err(ForecastError::ZeroVolatility)));
}

#[test]
fn test_max_drawdown_non_decreasing_series_is_zero() {
    let prices = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(max_drawdown(&prices).unwrap(), 0.0);
}

#[test]
fn test_max_drawdown_halving_is_fifty_percent() {
    let prices = [100.0, 50.0, 100.0];
    assert_eq!(max_drawdown(&prices).unwrap(), 50.0);
}

#[test]
fn test_max_drawdown_known_series() {
    // Deepest dip is 49 against the 51 peak
    assert_approx_eq!(
        max_drawdown(&sample_prices()).unwrap(),
        3.9215686274509802,
        1e-9
    );
}

#[test]
fn test_max_drawdown_rejects_bad_input() {
    let result = max_drawdown(&[]);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));

    let result = max_drawdown(&[100.0, -1.0]);
    assert!(matches!(result, Err(ForecastError::InvalidInput(_))));
}

#[test]
fn test_risk_statistics_bundles_the_series_metrics() {
    let prices = sample_prices();
    let stats = risk_statistics(&prices, ForecastModel::Ensemble, DEFAULT_RISK_FREE_RATE_PCT)
        .unwrap();

    assert_approx_eq!(
        stats.annualized_volatility_pct,
        56.33622786725707,
        1e-6
    );
    assert_approx_eq!(stats.annualized_return_pct, 1785.452559037454, 1e-3);
    assert_approx_eq!(stats.sharpe_ratio, 31.62179340858645, 1e-6);
    assert_approx_eq!(stats.max_drawdown_pct, 3.9215686274509802, 1e-9);
    assert_eq!(stats.model_confidence_pct, 85.0);
}

#[test]
fn test_risk_statistics_confidence_follows_model() {
    let prices = sample_prices();

    let sma = risk_statistics(&prices, ForecastModel::Sma, 4.0).unwrap();
    assert_eq!(sma.model_confidence_pct, 60.0);

    let ensemble = risk_statistics(&prices, ForecastModel::Ensemble, 4.0).unwrap();
    assert_eq!(ensemble.model_confidence_pct, 85.0);
}

#[test]
fn test_risk_statistics_to_json() {
    let prices = sample_prices();
    let stats = risk_statistics(&prices, ForecastModel::Sma, 4.0).unwrap();

    let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
    assert!(json.get("annualized_volatility_pct").is_some());
    assert!(json.get("annualized_return_pct").is_some());
    assert!(json.get("sharpe_ratio").is_some());
    assert!(json.get("max_drawdown_pct").is_some());
    assert_eq!(json["model_confidence_pct"], 60.0);
}

#[test]
fn test_risk_statistics_display() {
    let prices = sample_prices();
    let stats = risk_statistics(&prices, ForecastModel::Sma, 4.0).unwrap();
    let text = stats.to_string();

    assert!(text.contains("Sharpe Ratio"));
    assert!(text.contains("Max Drawdown:      -3.92%"));
}
