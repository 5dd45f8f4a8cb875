use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed external icon host; icon resolution is a string template, not an
/// API call.
const ICON_HOST: &str = "https://openweathermap.org/img/wn";

/// Weather observation for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherData {
    pub id: i64,
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind_speed: f64,
    pub date: NaiveDateTime,
    /// Short provider icon code, e.g. `"10d"`. Optional: historical rows
    /// predate icon capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Resolve a short weather icon code to a fully qualified image URL.
///
/// ```
/// use shared::dto::weather::icon_url;
///
/// assert_eq!(icon_url("10d"), "https://openweathermap.org/img/wn/10d@2x.png");
/// ```
pub fn icon_url(code: &str) -> String {
    format!("{}/{}@2x.png", ICON_HOST, code)
}
