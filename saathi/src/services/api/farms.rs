//! # Farm Endpoints
//!
//! Farm CRUD and soil-test queries.

use shared::dto::farm::{Farm, FarmCreate, FarmUpdate, SoilTest};

use crate::core::error::{ApiError, Result};
use crate::services::api::transport::ApiRequest;
use super::client::ApiClient;

/// List all farms owned by the authenticated user.
#[tracing::instrument(skip(client))]
pub async fn list(client: &ApiClient) -> Result<Vec<Farm>> {
    let start = std::time::Instant::now();
    let farms: Vec<Farm> = client.dispatch(ApiRequest::get("/farms")).await?;
    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        farm_count = farms.len(),
        "Farms fetched"
    );
    Ok(farms)
}

/// Fetch a single farm by id.
pub async fn get(client: &ApiClient, id: i64) -> Result<Farm> {
    client.dispatch(ApiRequest::get(format!("/farms/{}", id))).await
}

/// Create a new farm.
pub async fn create(client: &ApiClient, farm: &FarmCreate) -> Result<Farm> {
    let body = serde_json::to_value(farm).map_err(|e| ApiError::Decode(e.to_string()))?;
    client.dispatch(ApiRequest::post("/farms").json(body)).await
}

/// Update an existing farm; `None` fields are left unchanged.
pub async fn update(client: &ApiClient, id: i64, changes: &FarmUpdate) -> Result<Farm> {
    let body = serde_json::to_value(changes).map_err(|e| ApiError::Decode(e.to_string()))?;
    client
        .dispatch(ApiRequest::put(format!("/farms/{}", id)).json(body))
        .await
}

/// Delete a farm.
pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    client
        .dispatch_unit(ApiRequest::delete(format!("/farms/{}", id)))
        .await
}

/// Soil tests recorded for a farm.
pub async fn soil_tests(client: &ApiClient, farm_id: i64) -> Result<Vec<SoilTest>> {
    client
        .dispatch(ApiRequest::get(format!("/farms/{}/soil-tests", farm_id)))
        .await
}
