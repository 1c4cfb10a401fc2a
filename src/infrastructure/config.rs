use crate::application::forecast_service::DEFAULT_FORECAST_DAYS;
use crate::domain::thresholds::ThresholdConfig;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub location: LocationSettings,
    pub openweather: OpenWeatherSettings,
    pub thresholds: ThresholdConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationSettings {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenWeatherSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,
}

fn default_exclude() -> Vec<String> {
    ["current", "minutely", "hourly", "alerts"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_forecast_days() -> usize {
    DEFAULT_FORECAST_DAYS
}

/// Load `config/hikecast.{toml,..}` with `HIKECAST__SECTION__KEY` overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/hikecast")
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = base_builder()?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("HIKECAST")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .context("failed to read configuration")?;

    into_app_config(settings)
}

fn base_builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    let defaults = ThresholdConfig::closed_range();
    Ok(config::Config::builder()
        .set_default("server.bind_address", "0.0.0.0:8080")?
        .set_default("location.name", "Boulder, CO")?
        .set_default("location.latitude", 40.02)?
        .set_default("location.longitude", -105.25)?
        .set_default("openweather.base_url", "https://api.openweathermap.org")?
        .set_default("thresholds.min_feels_like_f", defaults.min_feels_like_f)?
        .set_default("thresholds.max_wind_mph", defaults.max_wind_mph)?
        .set_default("thresholds.max_cloud_percent_sunny", defaults.max_cloud_percent_sunny)?)
}

fn into_app_config(settings: config::Config) -> anyhow::Result<AppConfig> {
    let app_config: AppConfig = settings
        .try_deserialize()
        .context("invalid configuration")?;
    app_config
        .thresholds
        .validate()
        .context("invalid [thresholds] section")?;
    if app_config.openweather.forecast_days == 0 {
        anyhow::bail!("openweather.forecast_days must be at least 1");
    }
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> anyhow::Result<AppConfig> {
        let settings = base_builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        into_app_config(settings)
    }

    #[test]
    fn test_defaults_without_file() {
        let cfg = from_toml("").unwrap();
        assert_eq!(cfg.location.name, "Boulder, CO");
        assert_eq!(cfg.location.latitude, 40.02);
        assert_eq!(cfg.openweather.api_key, None);
        assert_eq!(cfg.openweather.forecast_days, 5);
        assert_eq!(cfg.openweather.exclude, vec!["current", "minutely", "hourly", "alerts"]);
        // no ceiling unless one is configured
        assert_eq!(cfg.thresholds.max_feels_like_f, None);
        assert_eq!(cfg.thresholds.min_feels_like_f, 45.0);
    }

    #[test]
    fn test_closed_range_from_file() {
        let cfg = from_toml(
            r#"
            [openweather]
            api_key = "abc123"

            [thresholds]
            min_feels_like_f = 45.0
            max_feels_like_f = 75.0
            max_wind_mph = 10.0
            max_cloud_percent_sunny = 35.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.openweather.api_key.as_deref(), Some("abc123"));
        assert_eq!(cfg.thresholds, ThresholdConfig::closed_range());
    }

    #[test]
    fn test_floor_only_from_file() {
        let cfg = from_toml(
            r#"
            [thresholds]
            min_feels_like_f = 50.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.thresholds, ThresholdConfig::floor_only());
    }

    #[test]
    fn test_invalid_thresholds_are_rejected() {
        let err = from_toml(
            r#"
            [thresholds]
            max_cloud_percent_sunny = -5.0
            "#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("max_cloud_percent_sunny"));
    }

    #[test]
    fn test_zero_forecast_days_is_rejected() {
        assert!(from_toml("[openweather]\nforecast_days = 0").is_err());
    }

    #[test]
    fn test_shipped_config_file_loads() {
        let cfg = load_app_config_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config/hikecast")).unwrap();
        assert_eq!(cfg.thresholds, ThresholdConfig::closed_range());
        assert_eq!(cfg.openweather.api_key.as_deref(), Some("YOUR_API_KEY_HERE"));
    }
}
