use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Mandi price record (`GET /market/prices/current`,
/// `GET /market/prices/history/{crop_id}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPrice {
    pub id: i64,
    pub crop_id: i64,
    pub market_name: String,
    pub price: f64,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Trend summary for a crop (`GET /market/trends/{crop_id}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketTrends {
    pub trend: String,
    pub current_price: f64,
    pub average_price: f64,
    pub price_change: f64,
    pub forecast: String,
}
