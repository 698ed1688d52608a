use serde::{Deserialize, Serialize};

/// Envelope returned by the weather endpoint.
///
/// The API encodes everything as strings, numbers included, and sends either
/// a `lives` list (current conditions) or a `forecasts` list (multi-day),
/// depending on the query. Both sections are optional; a missing section is
/// simply not rendered, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub lives: Option<Vec<LiveWeather>>,
    #[serde(default)]
    pub forecasts: Option<Vec<Forecast>>,
}

impl WeatherResponse {
    /// The endpoint marks success with the string "1".
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("1")
    }
}

/// One current-conditions reading. The API returns at most one per query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveWeather {
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub reporttime: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub humidity: String,
    #[serde(default)]
    pub winddirection: String,
    #[serde(default)]
    pub windpower: String,
}

/// Forecast envelope for one city, holding one entry per predicted day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub reporttime: String,
    #[serde(default)]
    pub casts: Vec<DailyCast>,
}

/// A single day's predicted weather.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyCast {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub daytemp: String,
    #[serde(default)]
    pub nighttemp: String,
    #[serde(default)]
    pub dayweather: String,
    #[serde(default)]
    pub nightweather: String,
    #[serde(default)]
    pub daypower: String,
    #[serde(default)]
    pub nightpower: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_one_is_ok() {
        let resp = WeatherResponse { status: Some("1".into()), ..Default::default() };
        assert!(resp.is_ok());
    }

    #[test]
    fn missing_or_failed_status_is_not_ok() {
        assert!(!WeatherResponse::default().is_ok());

        let resp = WeatherResponse { status: Some("0".into()), ..Default::default() };
        assert!(!resp.is_ok());
    }

    #[test]
    fn decodes_with_absent_sections() {
        let resp: WeatherResponse =
            serde_json::from_str(r#"{"status":"1"}"#).expect("minimal body must decode");

        assert!(resp.lives.is_none());
        assert!(resp.forecasts.is_none());
    }
}
