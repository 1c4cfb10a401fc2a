// OpenWeather One Call adapter for the forecast source port
use crate::application::error::ForecastError;
use crate::application::forecast_source::ForecastSource;
use crate::domain::forecast::RawDayRecord;
use crate::infrastructure::config::{LocationSettings, OpenWeatherSettings};
use async_trait::async_trait;
use serde::Deserialize;

/// Value shipped in the sample config in place of a real key.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

const ONE_CALL_PATH: &str = "/data/3.0/onecall";

#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    latitude: f64,
    longitude: f64,
    exclude: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    #[serde(default)]
    daily: Vec<RawDayRecord>,
}

impl OpenWeatherSource {
    pub fn new(settings: &OpenWeatherSettings, location: &LocationSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            exclude: settings.exclude.clone(),
        }
    }

    /// The configured key, unless it is absent, blank or the placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != API_KEY_PLACEHOLDER)
    }

    fn build_url(&self, api_key: &str) -> String {
        format!(
            "{}{}?lat={}&lon={}&exclude={}&appid={}",
            self.base_url,
            ONE_CALL_PATH,
            self.latitude,
            self.longitude,
            urlencoding::encode(&self.exclude.join(",")),
            urlencoding::encode(api_key)
        )
    }
}

#[async_trait]
impl ForecastSource for OpenWeatherSource {
    async fn fetch_daily(&self) -> Result<Vec<RawDayRecord>, ForecastError> {
        let api_key = self.usable_api_key().ok_or(ForecastError::MissingApiKey)?;
        let url = self.build_url(api_key);

        tracing::debug!(
            "Requesting daily forecast for {},{}",
            self.latitude,
            self.longitude
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ForecastError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let data: OneCallResponse = serde_json::from_slice(&bytes)?;
        tracing::debug!("Received {} daily forecast entries", data.daily.len());

        Ok(data.daily)
    }
}
