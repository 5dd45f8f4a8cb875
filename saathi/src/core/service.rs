//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity: views and tasks take an `Arc<dyn ApiService>` rather than a
//! concrete client, so tests can substitute a scripted fake.

use async_trait::async_trait;

use shared::dto::auth::{RegisterRequest, TokenResponse, UserInfo};
use shared::dto::crop::{
    DiseaseDetection, RecommendationRequest, RecommendationResponse, YieldPredictionRequest,
};
use shared::dto::farm::{Farm, FarmCreate, FarmUpdate, SoilTest};
use shared::dto::market::{MarketPrice, MarketTrends};
use shared::dto::weather::WeatherData;

use crate::core::error::Result;
use crate::services::api::market::PriceQuery;
use crate::services::api::ApiClient;

/// Trait over every backend operation the client exposes.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new user
    async fn register(&self, request: &RegisterRequest) -> Result<UserInfo>;

    /// Exchange credentials for a bearer token
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse>;

    /// Fetch the authenticated user's profile
    async fn me(&self) -> Result<UserInfo>;

    /// List farms owned by the authenticated user
    async fn farms(&self) -> Result<Vec<Farm>>;

    /// Fetch one farm
    async fn farm(&self, id: i64) -> Result<Farm>;

    /// Create a farm
    async fn create_farm(&self, farm: &FarmCreate) -> Result<Farm>;

    /// Update a farm
    async fn update_farm(&self, id: i64, changes: &FarmUpdate) -> Result<Farm>;

    /// Delete a farm
    async fn delete_farm(&self, id: i64) -> Result<()>;

    /// Soil tests for a farm
    async fn soil_tests(&self, farm_id: i64) -> Result<Vec<SoilTest>>;

    /// Detect plant disease from an uploaded image
    async fn detect_disease(&self, file_name: &str, image: Vec<u8>) -> Result<DiseaseDetection>;

    /// Crop recommendations for soil/season/location
    async fn crop_recommendations(
        &self,
        params: &RecommendationRequest,
    ) -> Result<RecommendationResponse>;

    /// Yield prediction for a planned planting
    async fn predict_yield(&self, params: &YieldPredictionRequest) -> Result<serde_json::Value>;

    /// Current weather for a location
    async fn current_weather(&self, location: &str) -> Result<WeatherData>;

    /// Weather forecast for a location
    async fn weather_forecast(&self, location: &str, days: u32) -> Result<Vec<WeatherData>>;

    /// Weather history for a location
    async fn weather_history(&self, location: &str, days: u32) -> Result<Vec<WeatherData>>;

    /// Current mandi prices
    async fn current_prices(&self, query: &PriceQuery) -> Result<Vec<MarketPrice>>;

    /// Price history for a crop
    async fn price_history(&self, crop_id: i64, days: u32) -> Result<Vec<MarketPrice>>;

    /// Names of markets with data
    async fn markets(&self) -> Result<Vec<String>>;

    /// Trend summary for a crop
    async fn market_trends(&self, crop_id: i64) -> Result<MarketTrends>;
}

// Implement ApiService for ApiClient by delegating to the endpoint modules.
#[async_trait]
impl ApiService for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<UserInfo> {
        crate::services::api::auth::register(self, request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn me(&self) -> Result<UserInfo> {
        crate::services::api::auth::me(self).await
    }

    async fn farms(&self) -> Result<Vec<Farm>> {
        crate::services::api::farms::list(self).await
    }

    async fn farm(&self, id: i64) -> Result<Farm> {
        crate::services::api::farms::get(self, id).await
    }

    async fn create_farm(&self, farm: &FarmCreate) -> Result<Farm> {
        crate::services::api::farms::create(self, farm).await
    }

    async fn update_farm(&self, id: i64, changes: &FarmUpdate) -> Result<Farm> {
        crate::services::api::farms::update(self, id, changes).await
    }

    async fn delete_farm(&self, id: i64) -> Result<()> {
        crate::services::api::farms::delete(self, id).await
    }

    async fn soil_tests(&self, farm_id: i64) -> Result<Vec<SoilTest>> {
        crate::services::api::farms::soil_tests(self, farm_id).await
    }

    async fn detect_disease(&self, file_name: &str, image: Vec<u8>) -> Result<DiseaseDetection> {
        crate::services::api::crops::detect_disease(self, file_name, image).await
    }

    async fn crop_recommendations(
        &self,
        params: &RecommendationRequest,
    ) -> Result<RecommendationResponse> {
        crate::services::api::crops::recommendations(self, params).await
    }

    async fn predict_yield(&self, params: &YieldPredictionRequest) -> Result<serde_json::Value> {
        crate::services::api::crops::predict_yield(self, params).await
    }

    async fn current_weather(&self, location: &str) -> Result<WeatherData> {
        crate::services::api::weather::current(self, location).await
    }

    async fn weather_forecast(&self, location: &str, days: u32) -> Result<Vec<WeatherData>> {
        crate::services::api::weather::forecast(self, location, days).await
    }

    async fn weather_history(&self, location: &str, days: u32) -> Result<Vec<WeatherData>> {
        crate::services::api::weather::history(self, location, days).await
    }

    async fn current_prices(&self, query: &PriceQuery) -> Result<Vec<MarketPrice>> {
        crate::services::api::market::current_prices(self, query).await
    }

    async fn price_history(&self, crop_id: i64, days: u32) -> Result<Vec<MarketPrice>> {
        crate::services::api::market::price_history(self, crop_id, days).await
    }

    async fn markets(&self) -> Result<Vec<String>> {
        crate::services::api::market::markets(self).await
    }

    async fn market_trends(&self, crop_id: i64) -> Result<MarketTrends> {
        crate::services::api::market::trends(self, crop_id).await
    }
}
