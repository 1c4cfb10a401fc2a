// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::html::render_page;
use crate::presentation::view::{ForecastView, LoadStatus};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Each request is one load: fetch, evaluate, render. Nothing is cached, so
/// reloading the page is how a failed load is retried.
async fn load_view(state: &AppState) -> ForecastView {
    let service = &state.forecast_service;
    let outcome = service.load().await;
    ForecastView::from_outcome(outcome, &state.location_name, service.thresholds())
}

/// Day cards as an HTML page
pub async fn forecast_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = load_view(&state).await;
    (status_code(view.status), Html(render_page(&view, &state.location_name)))
}

/// Day cards as JSON
pub async fn forecast_json(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = load_view(&state).await;
    (status_code(view.status), Json(view))
}

fn status_code(status: LoadStatus) -> StatusCode {
    match status {
        LoadStatus::Ok | LoadStatus::NoData => StatusCode::OK,
        LoadStatus::ConfigError => StatusCode::SERVICE_UNAVAILABLE,
        LoadStatus::Error => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ForecastError;
    use crate::application::forecast_service::ForecastService;
    use crate::application::forecast_source::ForecastSource;
    use crate::domain::forecast::{FeelsLike, RawDayRecord};
    use crate::domain::thresholds::ThresholdConfig;
    use async_trait::async_trait;

    struct StaticSource(Vec<RawDayRecord>);

    #[async_trait]
    impl ForecastSource for StaticSource {
        async fn fetch_daily(&self) -> Result<Vec<RawDayRecord>, ForecastError> {
            Ok(self.0.clone())
        }
    }

    struct NoKeySource;

    #[async_trait]
    impl ForecastSource for NoKeySource {
        async fn fetch_daily(&self) -> Result<Vec<RawDayRecord>, ForecastError> {
            Err(ForecastError::MissingApiKey)
        }
    }

    fn state(source: Arc<dyn ForecastSource>) -> Arc<AppState> {
        Arc::new(AppState {
            forecast_service: ForecastService::new(source, ThresholdConfig::closed_range(), 5),
            location_name: "Boulder, CO".to_string(),
        })
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(status_code(LoadStatus::Ok), StatusCode::OK);
        assert_eq!(status_code(LoadStatus::NoData), StatusCode::OK);
        assert_eq!(status_code(LoadStatus::ConfigError), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_code(LoadStatus::Error), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_load_view_evaluates_days() {
        let record = RawDayRecord {
            dt: 1_700_000_000,
            feels_like: Some(FeelsLike::Flat(293.0)),
            wind_speed: Some(2.0),
            clouds: Some(10.0),
            weather: Vec::new(),
        };
        let view = load_view(&state(Arc::new(StaticSource(vec![record])))).await;

        assert_eq!(view.status, LoadStatus::Ok);
        assert_eq!(view.days.len(), 1);
        assert!(view.days[0].overall);
    }

    #[tokio::test]
    async fn test_forecast_json_reports_config_error() {
        let response = forecast_json(State(state(Arc::new(NoKeySource)))).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_forecast_page_no_data() {
        let response = forecast_page(State(state(Arc::new(StaticSource(Vec::new())))))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
