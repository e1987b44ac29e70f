use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use gatepost_application::commands::{criteria_commands, station_commands};
use gatepost_application::dtos::{
    CreateStationRequest, RenameStationRequest, StationListView, StationTabUpdate,
    ToggleActiveRequest,
};
use gatepost_application::queries::station_queries;
use gatepost_application::store::StationTab;
use gatepost_application::AppState;
use gatepost_domain::{Station, StationId};

use crate::error::HttpError;

pub async fn list_stations(State(state): State<AppState>) -> Result<Json<StationListView>, HttpError> {
    Ok(Json(station_queries::station_list(&state).await?))
}

pub async fn update_station_tab(
    State(state): State<AppState>,
    Json(payload): Json<StationTabUpdate>,
) -> Json<StationTab> {
    Json(criteria_commands::update_station_tab(&state, payload).await)
}

pub async fn create_station(
    State(state): State<AppState>,
    Json(payload): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<Station>), HttpError> {
    let station = station_commands::create_station(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(station)))
}

pub async fn rename_station(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
    Json(payload): Json<RenameStationRequest>,
) -> Result<Json<Station>, HttpError> {
    Ok(Json(
        station_commands::rename_station(&state, station_id, payload).await?,
    ))
}

pub async fn toggle_station_active(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
    Json(payload): Json<ToggleActiveRequest>,
) -> Result<Json<Station>, HttpError> {
    Ok(Json(
        station_commands::toggle_station_active(&state, station_id, payload).await?,
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use gatepost_application::commands::load_commands::load_dashboard;
    use gatepost_domain::{RuntimeConfig, StationCategory};
    use gatepost_infrastructure::FileDashboardGateway;

    async fn file_state(dir: &tempfile::TempDir) -> AppState {
        let path = dir.path().join("dashboard.json");
        tokio::fs::write(
            &path,
            r#"{"stations": [{"id": 1, "name": "Gate 1", "stationType": "gate"}]}"#,
        )
        .await
        .expect("fixture");
        let gateway = FileDashboardGateway::open(&path).await.expect("open");
        let state = AppState::new(RuntimeConfig::default(), Arc::new(gateway));
        load_dashboard(&state).await.expect("load");
        state
    }

    #[tokio::test]
    async fn create_returns_created_station() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = file_state(&dir).await;
        let (status, Json(station)) = create_station(
            State(state.clone()),
            Json(CreateStationRequest {
                name: "2".to_string(),
                category: StationCategory::Gate,
            }),
        )
        .await
        .expect("create");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(station.name, "Gate 2");

        let Json(view) = list_stations(State(state)).await.expect("list");
        assert_eq!(view.stations.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_create_is_bad_request() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = file_state(&dir).await;
        let err = create_station(
            State(state),
            Json(CreateStationRequest {
                name: "gate 1".to_string(),
                category: StationCategory::Gate,
            }),
        )
        .await
        .expect_err("duplicate");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unconfirmed_toggle_is_bad_request() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = file_state(&dir).await;
        let err = toggle_station_active(
            State(state),
            Path(1),
            Json(ToggleActiveRequest { confirm: false }),
        )
        .await
        .expect_err("unconfirmed");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
