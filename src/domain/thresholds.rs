// Hiking thresholds applied to every forecast day
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("threshold {0} must be a finite number")]
    NotFinite(&'static str),
    #[error("max_cloud_percent_sunny must be >= 0, got {0}")]
    NegativeCloudBound(f64),
    #[error("max_feels_like_f ({max}) is below min_feels_like_f ({min})")]
    InvertedTemperatureRange { min: f64, max: f64 },
}

/// Immutable rule set for one process. The temperature ceiling is optional:
/// some deployments only require a floor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ThresholdConfig {
    pub min_feels_like_f: f64,
    #[serde(default)]
    pub max_feels_like_f: Option<f64>,
    /// Exclusive upper bound.
    pub max_wind_mph: f64,
    /// Inclusive upper bound.
    pub max_cloud_percent_sunny: f64,
}

impl ThresholdConfig {
    /// 45..=75 °F, wind under 10 mph, clouds up to 35%.
    pub fn closed_range() -> Self {
        Self {
            min_feels_like_f: 45.0,
            max_feels_like_f: Some(75.0),
            max_wind_mph: 10.0,
            max_cloud_percent_sunny: 35.0,
        }
    }

    /// At least 50 °F with no ceiling, wind under 10 mph, clouds up to 35%.
    pub fn floor_only() -> Self {
        Self {
            min_feels_like_f: 50.0,
            max_feels_like_f: None,
            max_wind_mph: 10.0,
            max_cloud_percent_sunny: 35.0,
        }
    }

    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !self.min_feels_like_f.is_finite() {
            return Err(ThresholdError::NotFinite("min_feels_like_f"));
        }
        if !self.max_wind_mph.is_finite() {
            return Err(ThresholdError::NotFinite("max_wind_mph"));
        }
        if !self.max_cloud_percent_sunny.is_finite() {
            return Err(ThresholdError::NotFinite("max_cloud_percent_sunny"));
        }
        if self.max_cloud_percent_sunny < 0.0 {
            return Err(ThresholdError::NegativeCloudBound(self.max_cloud_percent_sunny));
        }
        if let Some(max) = self.max_feels_like_f {
            if !max.is_finite() {
                return Err(ThresholdError::NotFinite("max_feels_like_f"));
            }
            if max < self.min_feels_like_f {
                return Err(ThresholdError::InvertedTemperatureRange {
                    min: self.min_feels_like_f,
                    max,
                });
            }
        }
        Ok(())
    }

    pub fn accepts_temperature(&self, feels_like_f: f64) -> bool {
        feels_like_f >= self.min_feels_like_f
            && self.max_feels_like_f.is_none_or(|max| feels_like_f <= max)
    }

    pub fn accepts_wind(&self, wind_mph: f64) -> bool {
        wind_mph < self.max_wind_mph
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::closed_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(ThresholdConfig::closed_range().validate(), Ok(()));
        assert_eq!(ThresholdConfig::floor_only().validate(), Ok(()));
    }

    #[test]
    fn test_closed_range_temperature() {
        let t = ThresholdConfig::closed_range();
        assert!(!t.accepts_temperature(44.9));
        assert!(t.accepts_temperature(45.0));
        assert!(t.accepts_temperature(75.0));
        assert!(!t.accepts_temperature(75.1));
    }

    #[test]
    fn test_floor_only_has_no_ceiling() {
        let t = ThresholdConfig::floor_only();
        assert!(!t.accepts_temperature(49.9));
        assert!(t.accepts_temperature(50.0));
        assert!(t.accepts_temperature(110.0));
    }

    #[test]
    fn test_wind_bound_is_exclusive() {
        let t = ThresholdConfig::closed_range();
        assert!(t.accepts_wind(9.99));
        assert!(!t.accepts_wind(10.0));
    }

    #[test]
    fn test_nan_temperature_is_rejected() {
        assert!(!ThresholdConfig::floor_only().accepts_temperature(f64::NAN));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut t = ThresholdConfig::closed_range();
        t.max_cloud_percent_sunny = -1.0;
        assert_eq!(t.validate(), Err(ThresholdError::NegativeCloudBound(-1.0)));

        let mut t = ThresholdConfig::closed_range();
        t.max_feels_like_f = Some(40.0);
        assert_eq!(
            t.validate(),
            Err(ThresholdError::InvertedTemperatureRange { min: 45.0, max: 40.0 })
        );

        let mut t = ThresholdConfig::floor_only();
        t.max_wind_mph = f64::INFINITY;
        assert_eq!(t.validate(), Err(ThresholdError::NotFinite("max_wind_mph")));
    }
}
