use axum::extract::{Path, State};
use axum::Json;

use gatepost_application::commands::guard_commands;
use gatepost_application::dtos::{GuardPanelView, GuardToggleResult};
use gatepost_application::queries::guard_queries;
use gatepost_application::AppState;
use gatepost_domain::{AssignmentDiff, StationId, UserAccount, UserId};

use crate::error::HttpError;

pub async fn select_station(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
) -> Result<Json<GuardPanelView>, HttpError> {
    Ok(Json(guard_commands::select_station(&state, station_id).await?))
}

pub async fn get_guard_panel(State(state): State<AppState>) -> Json<GuardPanelView> {
    Json(guard_queries::guard_panel(&state).await)
}

pub async fn toggle_guard(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<GuardToggleResult>, HttpError> {
    Ok(Json(guard_commands::toggle_guard(&state, user_id).await?))
}

pub async fn save_guards(State(state): State<AppState>) -> Result<Json<AssignmentDiff>, HttpError> {
    Ok(Json(guard_commands::save_guards(&state).await?))
}

pub async fn list_guard_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserAccount>>, HttpError> {
    Ok(Json(guard_queries::guard_candidates(&state).await?))
}
