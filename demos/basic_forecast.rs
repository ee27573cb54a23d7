use chrono::NaiveDate;
use price_forecast::forecast::{generate_forecast, ForecastRequest, Horizon};
use price_forecast::indicators::{EconomicIndicators, AG_INDEX, CPI, OIL, USD_INDEX};
use price_forecast::metrics::{risk_statistics, DEFAULT_RISK_FREE_RATE_PCT};
use price_forecast::models::ForecastModel;
use price_forecast::utils::forecast_dates;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Price Forecast: Basic Example");
    println!("=============================\n");

    // One year of synthetic daily prices, the kind a data layer would supply
    println!("Generating sample data...");
    let prices = generate_synthetic_prices(365, 55.0, 0.02);
    println!(
        "Sample data created: {} prices, last = {:.2}\n",
        prices.len(),
        prices[prices.len() - 1]
    );

    // Macro factors as an external feed would report them
    let factors = EconomicIndicators::new()
        .with(OIL, 78.50)
        .with(AG_INDEX, 104.2)
        .with(USD_INDEX, 103.5)
        .with(CPI, 3.2);

    // Three-month ensemble forecast
    println!("Generating {} ensemble forecast...", Horizon::ThreeMonths);
    let request =
        ForecastRequest::for_horizon(&prices, ForecastModel::Ensemble, Horizon::ThreeMonths)
            .with_indicators(&factors);
    let forecast = generate_forecast(&request)?;

    let last_date = NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date");
    let dates = forecast_dates(last_date, forecast.horizon());

    println!("\nFirst week of the forecast:");
    for day in 0..7 {
        println!(
            "  {}  mean {:.2}  68% [{:.2}, {:.2}]  95% [{:.2}, {:.2}]",
            dates[day],
            forecast.mean()[day],
            forecast.lower68()[day],
            forecast.upper68()[day],
            forecast.lower95()[day],
            forecast.upper95()[day]
        );
    }

    // Summary statistics over the same series
    let stats = risk_statistics(&prices, ForecastModel::Ensemble, DEFAULT_RISK_FREE_RATE_PCT)?;
    println!("\n{}", stats);

    println!("Forecasting complete!");
    Ok(())
}

/// Random walk starting at `start`, multiplicative steps within ±volatility/2
fn generate_synthetic_prices(points: usize, start: f64, volatility: f64) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut price = start;
    let mut prices = Vec::with_capacity(points);

    for _ in 0..points {
        let change = price * (rng.gen::<f64>() - 0.5) * volatility;
        price += change;
        prices.push(price);
    }

    prices
}
