// Forecast service - Use case for loading and judging the upcoming days
use crate::application::error::ForecastError;
use crate::application::forecast_source::ForecastSource;
use crate::domain::thresholds::ThresholdConfig;
use crate::domain::verdict::{evaluate_day, DayVerdict};
use std::sync::Arc;

pub const DEFAULT_FORECAST_DAYS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastReport {
    /// Never empty.
    Days(Vec<DayVerdict>),
    NoData,
}

#[derive(Clone)]
pub struct ForecastService {
    source: Arc<dyn ForecastSource>,
    thresholds: ThresholdConfig,
    days: usize,
}

impl ForecastService {
    pub fn new(source: Arc<dyn ForecastSource>, thresholds: ThresholdConfig, days: usize) -> Self {
        Self {
            source,
            thresholds,
            days,
        }
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Fetch once and evaluate the first `days` records in order. Any fetch
    /// failure fails the whole load; nothing is retried or cached.
    pub async fn load(&self) -> Result<ForecastReport, ForecastError> {
        let records = self.source.fetch_daily().await.inspect_err(|e| {
            tracing::error!("Forecast load failed: {}", e);
        })?;

        if records.is_empty() {
            tracing::info!("Forecast provider returned no daily entries");
            return Ok(ForecastReport::NoData);
        }

        let verdicts: Vec<DayVerdict> = records
            .iter()
            .take(self.days)
            .map(|record| evaluate_day(record, &self.thresholds))
            .collect();

        tracing::debug!(
            "Evaluated {} of {} forecast days, {} good for hiking",
            verdicts.len(),
            records.len(),
            verdicts.iter().filter(|v| v.overall).count()
        );

        Ok(ForecastReport::Days(verdicts))
    }
}
