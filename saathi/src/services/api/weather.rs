//! # Weather Endpoints
//!
//! Current conditions, forecast, and history for a location.

use shared::dto::weather::WeatherData;

use crate::core::error::Result;
use crate::services::api::transport::ApiRequest;
use super::client::ApiClient;

/// Latest observation for a location.
#[tracing::instrument(skip(client), fields(location = %location))]
pub async fn current(client: &ApiClient, location: &str) -> Result<WeatherData> {
    let start = std::time::Instant::now();
    let weather: WeatherData = client
        .dispatch(ApiRequest::get(format!("/weather/current/{}", location)))
        .await?;
    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        temperature = weather.temperature,
        "Current weather fetched"
    );
    Ok(weather)
}

/// Forecast for the next `days` days (backend default 7).
pub async fn forecast(client: &ApiClient, location: &str, days: u32) -> Result<Vec<WeatherData>> {
    client
        .dispatch(ApiRequest::get(format!("/weather/forecast/{}", location)).query("days", days))
        .await
}

/// Observations over the last `days` days (backend default 30).
pub async fn history(client: &ApiClient, location: &str, days: u32) -> Result<Vec<WeatherData>> {
    client
        .dispatch(ApiRequest::get(format!("/weather/history/{}", location)).query("days", days))
        .await
}
