use axum::extract::{Query, State};
use axum::Json;

use gatepost_application::commands::{criteria_commands, load_commands};
use gatepost_application::dtos::{CriteriaUpdate, LogView, PaginationUpdate, StatsQuery};
use gatepost_application::queries::{log_queries, station_queries};
use gatepost_application::store::LoadStatus;
use gatepost_application::AppState;
use gatepost_domain::{FilterCriteria, LogStats, PaginationState};

use crate::error::HttpError;

/// Re-fetches every collection. A failure is reported and also blocks the
/// views until the next successful refresh.
pub async fn refresh_dashboard(State(state): State<AppState>) -> Result<Json<LoadStatus>, HttpError> {
    load_commands::load_dashboard(&state).await?;
    Ok(Json(station_queries::load_status(&state).await))
}

pub async fn get_load_status(State(state): State<AppState>) -> Json<LoadStatus> {
    Json(station_queries::load_status(&state).await)
}

pub async fn get_logs(State(state): State<AppState>) -> Result<Json<LogView>, HttpError> {
    Ok(Json(log_queries::log_view(&state).await?))
}

pub async fn update_criteria(
    State(state): State<AppState>,
    Json(payload): Json<CriteriaUpdate>,
) -> Json<FilterCriteria> {
    Json(criteria_commands::update_criteria(&state, payload).await)
}

pub async fn update_pagination(
    State(state): State<AppState>,
    Json(payload): Json<PaginationUpdate>,
) -> Result<Json<PaginationState>, HttpError> {
    Ok(Json(criteria_commands::update_pagination(&state, payload).await?))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<LogStats>, HttpError> {
    Ok(Json(log_queries::log_stats(&state, query).await?))
}

pub async fn get_location_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, HttpError> {
    Ok(Json(station_queries::location_options(&state).await?))
}
