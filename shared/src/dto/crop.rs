use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Crop catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    pub id: i64,
    pub name: String,
    pub name_hindi: String,
    pub scientific_name: String,
    pub season: String,
    pub duration: i32,
    pub water_requirement: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Disease catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Disease {
    pub id: i64,
    pub crop_id: i64,
    pub name: String,
    pub name_hindi: String,
    pub symptoms: String,
    pub prevention: String,
    pub treatment: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Result of a disease-detection image upload
/// (`POST /crops/disease-detection`, multipart)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseDetection {
    pub disease_detected: bool,
    pub disease_name: String,
    pub confidence: f64,
    pub recommendations: Vec<String>,
}

/// Parameters for `POST /crops/recommendation`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub soil_type: String,
    pub season: String,
    pub location: String,
}

/// One recommended crop in a [`RecommendationResponse`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedCrop {
    pub crop_name: String,
    pub confidence: f64,
    pub reason: String,
}

/// Soil health summary returned alongside recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoilHealth {
    pub status: String,
    pub recommendations: Vec<String>,
}

/// Response of `POST /crops/recommendation`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub recommended_crops: Vec<RecommendedCrop>,
    pub soil_health: SoilHealth,
}

/// Parameters for `POST /crops/yield-prediction`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldPredictionRequest {
    pub crop_id: i64,
    pub area: f64,
    pub soil_type: String,
    pub irrigation_type: String,
    pub season: String,
}
