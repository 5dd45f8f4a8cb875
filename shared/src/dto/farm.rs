use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Farm record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farm {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub area: f64,
    pub soil_type: String,
    pub irrigation_type: String,
    pub owner_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for `POST /farms`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmCreate {
    pub name: String,
    pub location: String,
    pub area: f64,
    pub soil_type: String,
    pub irrigation_type: String,
}

/// Partial payload for `PUT /farms/{id}`; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FarmUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrigation_type: Option<String>,
}

/// Soil test attached to a farm (`GET /farms/{id}/soil-tests`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilTest {
    pub id: i64,
    pub farm_id: i64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter: f64,
    pub test_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
