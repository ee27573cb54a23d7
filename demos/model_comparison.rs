use price_forecast::forecast::{generate_forecast, ForecastRequest, Horizon};
use price_forecast::indicators::{EconomicIndicators, OIL, USD_INDEX};
use price_forecast::models::ForecastModel;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Price Forecast: Model Comparison");
    println!("================================\n");

    let prices = generate_synthetic_prices(365, 25.0, 0.015);
    let factors = EconomicIndicators::new()
        .with(OIL, 78.50)
        .with(USD_INDEX, 103.5);

    let horizon = Horizon::OneMonth;
    println!(
        "Last price {:.2}, forecasting {} ahead with each model:\n",
        prices[prices.len() - 1],
        horizon
    );

    println!(
        "{:<10} {:>10} {:>12} {:>12} {:>12}",
        "model", "mean", "low 95%", "high 95%", "confidence"
    );
    for model in ForecastModel::ALL {
        let request =
            ForecastRequest::for_horizon(&prices, model, horizon).with_indicators(&factors);
        let forecast = generate_forecast(&request)?;
        let last_day = forecast.horizon() - 1;

        println!(
            "{:<10} {:>10.2} {:>12.2} {:>12.2} {:>11.0}%",
            model.as_str(),
            forecast.mean()[last_day],
            forecast.lower95()[last_day],
            forecast.upper95()[last_day],
            model.confidence_pct()
        );
    }

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
