//! # Market Data Endpoints
//!
//! Mandi price queries: current prices, per-crop history, market list, and
//! trend summaries.

use shared::dto::market::{MarketPrice, MarketTrends};

use crate::core::error::Result;
use crate::services::api::transport::ApiRequest;
use super::client::ApiClient;

/// Optional filters for [`current_prices`].
#[derive(Debug, Clone, Default)]
pub struct PriceQuery {
    pub market: Option<String>,
    pub crop_id: Option<i64>,
}

/// Current mandi prices, optionally narrowed to one market or crop.
#[tracing::instrument(skip(client), fields(market = ?query.market, crop_id = ?query.crop_id))]
pub async fn current_prices(client: &ApiClient, query: &PriceQuery) -> Result<Vec<MarketPrice>> {
    let start = std::time::Instant::now();

    let mut req = ApiRequest::get("/market/prices/current");
    if let Some(market) = &query.market {
        req = req.query("market", market);
    }
    if let Some(crop_id) = query.crop_id {
        req = req.query("crop_id", crop_id);
    }

    let prices: Vec<MarketPrice> = client.dispatch(req).await?;
    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        price_count = prices.len(),
        "Prices fetched"
    );
    Ok(prices)
}

/// Price history for a crop over the last `days` days (backend default 30).
pub async fn price_history(client: &ApiClient, crop_id: i64, days: u32) -> Result<Vec<MarketPrice>> {
    client
        .dispatch(ApiRequest::get(format!("/market/prices/history/{}", crop_id)).query("days", days))
        .await
}

/// Names of all markets with price data.
pub async fn markets(client: &ApiClient) -> Result<Vec<String>> {
    client.dispatch(ApiRequest::get("/market/markets")).await
}

/// Trend summary for a crop.
pub async fn trends(client: &ApiClient, crop_id: i64) -> Result<MarketTrends> {
    client
        .dispatch(ApiRequest::get(format!("/market/trends/{}", crop_id)))
        .await
}
