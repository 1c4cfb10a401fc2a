// Seam to the external forecast provider
use crate::application::error::ForecastError;
use crate::domain::forecast::RawDayRecord;
use async_trait::async_trait;

#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the provider's daily records in chronological order.
    async fn fetch_daily(&self) -> Result<Vec<RawDayRecord>, ForecastError>;
}
