use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;

use gatepost_application::queries::station_queries;
use gatepost_application::store::LoadStatus;
use gatepost_application::AppState;

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

/// Ready once a dashboard load has succeeded and the last one did not fail.
pub async fn health_ready(State(state): State<AppState>) -> StatusCode {
    match station_queries::load_status(&state).await {
        LoadStatus::Ready { .. } => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload)
}
