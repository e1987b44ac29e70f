use tracing::{error, info};

use gatepost_domain::{
    toggled_active, validate_new_station, validate_rename, NewStation, Station, StationId,
    StationUpdate,
};

use crate::dtos::{CreateStationRequest, RenameStationRequest, ToggleActiveRequest};
use crate::{AppError, AppState};

fn station_update_failed(state: &AppState, action: &str, err: anyhow::Error) -> AppError {
    error!("failed to {} station: {}", action, err);
    state.metrics.record_station_update_error();
    AppError::StationUpdate(err.to_string())
}

async fn find_station(state: &AppState, station_id: StationId) -> Result<Station, AppError> {
    state
        .store
        .read()
        .await
        .station(station_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("station {}", station_id)))
}

/// Validates and creates a station. Only the backend's response is inserted
/// into the local list.
pub async fn create_station(
    state: &AppState,
    request: CreateStationRequest,
) -> Result<Station, AppError> {
    let final_name = {
        let store = state.store.read().await;
        validate_new_station(&request.name, request.category, &store.snapshot().stations)?
    };
    let payload = NewStation {
        name: final_name,
        station_type: request.category,
        active: true,
    };
    let created = state
        .gateway
        .create_station(&payload)
        .await
        .map_err(|err| station_update_failed(state, "create", err));
    let mut store = state.store.write().await;
    match created {
        Ok(station) => {
            info!("station created: id={}, name={}", station.id, station.name);
            state.metrics.record_station_update();
            store.upsert_station(station.clone());
            store.clear_error();
            Ok(station)
        }
        Err(err) => {
            store.record_error(err.to_string());
            Err(err)
        }
    }
}

pub async fn rename_station(
    state: &AppState,
    station_id: StationId,
    request: RenameStationRequest,
) -> Result<Station, AppError> {
    let station = find_station(state, station_id).await?;
    let (name, category) = validate_rename(&station, &request.name, request.category)?;
    let update = StationUpdate {
        id: station.id,
        name,
        active: station.is_active(),
        station_type: category,
    };
    let updated = state
        .gateway
        .update_station(&update)
        .await
        .map_err(|err| station_update_failed(state, "rename", err));
    let mut store = state.store.write().await;
    match updated {
        Ok(station) => {
            info!("station renamed: id={}, name={}", station.id, station.name);
            state.metrics.record_station_update();
            store.upsert_station(station.clone());
            store.clear_error();
            Ok(station)
        }
        Err(err) => {
            store.record_error(err.to_string());
            Err(err)
        }
    }
}

/// Flips the station's active flag after operator confirmation.
pub async fn toggle_station_active(
    state: &AppState,
    station_id: StationId,
    request: ToggleActiveRequest,
) -> Result<Station, AppError> {
    if !request.confirm {
        return Err(AppError::BadRequest(
            "station activation change must be confirmed".to_string(),
        ));
    }
    let station = find_station(state, station_id).await?;
    let next_active = toggled_active(&station);
    let updated = state
        .gateway
        .set_station_active(station_id, next_active)
        .await
        .map_err(|err| station_update_failed(state, "toggle", err));
    let mut store = state.store.write().await;
    match updated {
        Ok(station) => {
            info!("station {} active={}", station.id, station.is_active());
            state.metrics.record_station_update();
            if store.apply_active_change(station.clone()) {
                info!("selection cleared after deactivating station {}", station.id);
            }
            store.clear_error();
            Ok(station)
        }
        Err(err) => {
            store.record_error(err.to_string());
            Err(err)
        }
    }
}
