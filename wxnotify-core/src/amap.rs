use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{Error, Result};
use crate::model::WeatherResponse;

const DEFAULT_BASE_URL: &str = "https://restapi.amap.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Which report to request from the weather endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Current conditions for the district.
    Live,
    /// Multi-day forecast (the endpoint calls this `extensions=all`).
    Forecast,
}

/// Client for the Amap weather endpoint.
#[derive(Debug, Clone)]
pub struct AmapClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl AmapClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { api_key, base_url, http })
    }

    /// Fetch weather data for a city code.
    ///
    /// Fails on transport errors, on any response status other than 200, and
    /// on bodies that do not decode as the expected JSON shape. A successful
    /// decode is returned as-is; whether the payload carries live conditions
    /// or forecasts is the caller's business.
    pub async fn query(&self, kind: QueryKind, city_code: &str) -> Result<WeatherResponse> {
        let url = format!("{}/v3/weather/weatherInfo", self.base_url);

        let mut params = vec![("key", self.api_key.as_str()), ("city", city_code)];
        if kind == QueryKind::Forecast {
            params.push(("extensions", "all"));
        }

        tracing::debug!(city = city_code, kind = ?kind, "requesting weather data");

        let res = self.http.get(&url).query(&params).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(Error::Status(status));
        }

        let body = res.text().await?;
        let parsed = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}
