// View model shared by the HTML page and the JSON endpoint
use crate::application::error::ForecastError;
use crate::application::forecast_service::ForecastReport;
use crate::domain::thresholds::ThresholdConfig;
use crate::domain::verdict::DayVerdict;
use chrono::NaiveDate;
use serde::Serialize;

pub const NO_DATA_MESSAGE: &str = "No forecast data available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Ok,
    NoData,
    ConfigError,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCard {
    pub date: NaiveDate,
    pub date_label: String,
    pub feels_like_f: Option<f64>,
    pub wind_mph: f64,
    pub clouds: f64,
    pub sky_description: String,
    pub good_temp: bool,
    pub good_wind: bool,
    pub good_sky: bool,
    pub overall: bool,
    pub headline: &'static str,
    pub reasons: [&'static str; 3],
}

impl DayCard {
    pub fn new(verdict: DayVerdict, thresholds: &ThresholdConfig) -> Self {
        let reasons = verdict.reasons(thresholds);
        Self {
            date_label: format_date(verdict.date),
            headline: if verdict.overall { "Good hiking day" } else { "Not ideal" },
            reasons,
            date: verdict.date,
            feels_like_f: verdict.feels_like_f,
            wind_mph: verdict.wind_mph,
            clouds: verdict.clouds,
            sky_description: verdict.sky_description,
            good_temp: verdict.good_temp,
            good_wind: verdict.good_wind,
            good_sky: verdict.good_sky,
            overall: verdict.overall,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastView {
    pub status: LoadStatus,
    pub message: String,
    pub days: Vec<DayCard>,
}

impl ForecastView {
    pub fn from_outcome(
        outcome: Result<ForecastReport, ForecastError>,
        location: &str,
        thresholds: &ThresholdConfig,
    ) -> Self {
        match outcome {
            Ok(ForecastReport::Days(verdicts)) => Self {
                status: LoadStatus::Ok,
                message: format!("Next {} days for {}", verdicts.len(), location),
                days: verdicts
                    .into_iter()
                    .map(|v| DayCard::new(v, thresholds))
                    .collect(),
            },
            Ok(ForecastReport::NoData) => Self {
                status: LoadStatus::NoData,
                message: NO_DATA_MESSAGE.to_string(),
                days: Vec::new(),
            },
            Err(e) => Self {
                status: if e.is_configuration() {
                    LoadStatus::ConfigError
                } else {
                    LoadStatus::Error
                },
                message: e.user_message().to_string(),
                days: Vec::new(),
            },
        }
    }
}

/// "Tue, Nov 14"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
