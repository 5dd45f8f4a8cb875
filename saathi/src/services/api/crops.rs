//! # Crop Advisory Endpoints
//!
//! Disease detection (multipart image upload), crop recommendations, and
//! yield prediction.

use shared::dto::crop::{
    DiseaseDetection, RecommendationRequest, RecommendationResponse, YieldPredictionRequest,
};

use crate::core::error::{ApiError, Result};
use crate::services::api::transport::ApiRequest;
use super::client::ApiClient;

/// Upload a plant photo for disease detection.
#[tracing::instrument(skip(client, image_bytes), fields(file_name = %file_name, image_len = image_bytes.len()))]
pub async fn detect_disease(
    client: &ApiClient,
    file_name: &str,
    image_bytes: Vec<u8>,
) -> Result<DiseaseDetection> {
    let start = std::time::Instant::now();

    let result: DiseaseDetection = client
        .dispatch(
            ApiRequest::post("/crops/disease-detection").multipart("image", file_name, image_bytes),
        )
        .await?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        detected = result.disease_detected,
        confidence = result.confidence,
        "Disease detection complete"
    );
    Ok(result)
}

/// Get crop recommendations for a soil/season/location combination.
pub async fn recommendations(
    client: &ApiClient,
    params: &RecommendationRequest,
) -> Result<RecommendationResponse> {
    let body = serde_json::to_value(params).map_err(|e| ApiError::Decode(e.to_string()))?;
    client
        .dispatch(ApiRequest::post("/crops/recommendation").json(body))
        .await
}

/// Predict yield for a planned planting. The prediction model's output
/// shape is still settling, so this returns the raw JSON value.
pub async fn predict_yield(
    client: &ApiClient,
    params: &YieldPredictionRequest,
) -> Result<serde_json::Value> {
    let body = serde_json::to_value(params).map_err(|e| ApiError::Decode(e.to_string()))?;
    client
        .dispatch(ApiRequest::post("/crops/yield-prediction").json(body))
        .await
}
