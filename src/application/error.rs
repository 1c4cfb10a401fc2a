// Failures of a single forecast load
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    /// No usable API key; the request was never sent.
    #[error("forecast API key is missing or still the placeholder")]
    MissingApiKey,
    #[error("forecast request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("forecast provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("forecast response could not be parsed: {0}")]
    Document(#[from] serde_json::Error),
}

impl ForecastError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ForecastError::MissingApiKey)
    }

    /// Text safe to show to the user. Upstream causes stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            ForecastError::MissingApiKey => {
                "Missing OpenWeather API key. Set openweather.api_key in config/hikecast.toml or HIKECAST__OPENWEATHER__API_KEY."
            }
            _ => "Error loading forecast. See server logs for details.",
        }
    }
}
