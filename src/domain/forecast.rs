// Raw daily forecast records as delivered by the forecast provider
use serde::Deserialize;

/// One entry of the provider's `daily` array. Only the fields the evaluator
/// reads are modelled; anything else in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDayRecord {
    /// Epoch seconds.
    pub dt: i64,
    #[serde(default)]
    pub feels_like: Option<FeelsLike>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub clouds: Option<f64>,
    #[serde(default)]
    pub weather: Vec<WeatherDescriptor>,
}

/// Feels-like temperature in Kelvin, either a single value or broken down by
/// period of the day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeelsLike {
    Flat(f64),
    PerPeriod(PeriodTemperatures),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PeriodTemperatures {
    #[serde(default)]
    pub day: Option<f64>,
    #[serde(default)]
    #[allow(dead_code)]
    pub night: Option<f64>,
    #[serde(default)]
    #[allow(dead_code)]
    pub eve: Option<f64>,
    #[serde(default)]
    #[allow(dead_code)]
    pub morn: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherDescriptor {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub const SKY_DESCRIPTION_FALLBACK: &str = "N/A";

/// Feels-like Kelvin for the day. The daytime value of a per-period reading is
/// used; a per-period reading without one resolves to `None`, as does a record
/// with no feels-like field at all.
pub fn resolve_feels_like_kelvin(record: &RawDayRecord) -> Option<f64> {
    match record.feels_like.as_ref()? {
        FeelsLike::Flat(kelvin) => Some(*kelvin),
        FeelsLike::PerPeriod(periods) => periods.day,
    }
}

pub fn resolve_wind_speed_ms(record: &RawDayRecord) -> f64 {
    record.wind_speed.unwrap_or(0.0)
}

pub fn resolve_clouds(record: &RawDayRecord) -> f64 {
    record.clouds.unwrap_or(0.0)
}

fn primary_weather(record: &RawDayRecord) -> Option<&WeatherDescriptor> {
    record.weather.first()
}

/// Category label of the first descriptor ("Clear", "Clouds", ...), or "".
pub fn resolve_primary_category(record: &RawDayRecord) -> &str {
    primary_weather(record)
        .and_then(|w| w.main.as_deref())
        .unwrap_or("")
}

/// Free-text description of the first descriptor for classification, or "".
pub fn resolve_sky_text(record: &RawDayRecord) -> &str {
    primary_weather(record)
        .and_then(|w| w.description.as_deref())
        .unwrap_or("")
}

/// Description shown to the user; empty or missing text becomes "N/A".
pub fn resolve_sky_description(record: &RawDayRecord) -> String {
    match resolve_sky_text(record) {
        "" => SKY_DESCRIPTION_FALLBACK.to_string(),
        text => text.to_string(),
    }
}
