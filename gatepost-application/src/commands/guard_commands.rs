use tracing::{debug, error, info, warn};

use gatepost_domain::{compute_assignment_diff, AssignmentDiff, StationId, UserId};

use crate::dtos::{GuardPanelView, GuardToggleResult};
use crate::queries::guard_queries::guard_panel;
use crate::{AppError, AppState};

/// Fetches assignments for `station_id` and applies them only if the station
/// is still the one selected once the response arrives.
async fn refresh_guards(state: &AppState, station_id: StationId, generation: u64) {
    let fetched = state.gateway.fetch_station_guards(station_id).await;
    let mut store = state.store.write().await;
    let applied = match fetched {
        Ok(assigned) => store.apply_guard_fetch(generation, assigned),
        Err(err) => {
            warn!("failed to fetch guards for station {}: {}", station_id, err);
            store.fail_guard_fetch(generation, err.to_string())
        }
    };
    if !applied {
        debug!(
            "discarded stale guard response for station {} (generation {})",
            station_id, generation
        );
        state.metrics.record_stale_guard_response();
    }
}

/// Selects a station and loads its guard assignments. The store lock is not
/// held across the backend call, so a later selection can supersede this one.
pub async fn select_station(
    state: &AppState,
    station_id: StationId,
) -> Result<GuardPanelView, AppError> {
    let generation = {
        let mut store = state.store.write().await;
        if store.station(station_id).is_none() {
            return Err(AppError::NotFound(format!("station {}", station_id)));
        }
        store.begin_guard_fetch(station_id)
    };
    refresh_guards(state, station_id, generation).await;
    Ok(guard_panel(state).await)
}

pub async fn toggle_guard(state: &AppState, user_id: UserId) -> Result<GuardToggleResult, AppError> {
    let mut store = state.store.write().await;
    let selected = store
        .toggle_guard(user_id)
        .ok_or_else(|| AppError::BadRequest("no station selected".to_string()))?;
    Ok(GuardToggleResult { user_id, selected })
}

/// Replaces the selected station's assignments with the local selection.
/// A failed update keeps the selection so the operator can retry.
pub async fn save_guards(state: &AppState) -> Result<AssignmentDiff, AppError> {
    let (station_id, diff) = {
        let store = state.store.read().await;
        let guards = store.guards();
        let station_id = guards
            .station_id
            .ok_or_else(|| AppError::BadRequest("no station selected".to_string()))?;
        if guards.loading {
            return Err(AppError::BadRequest(
                "guard assignments are still loading".to_string(),
            ));
        }
        (
            station_id,
            compute_assignment_diff(&guards.assigned_ids(), &guards.selection),
        )
    };

    if let Err(err) = state
        .gateway
        .update_station_guards(station_id, &diff.user_ids)
        .await
    {
        error!("failed to update guards for station {}: {}", station_id, err);
        state.metrics.record_assignment_update_error();
        let message = err.to_string();
        state.store.write().await.record_error(message.clone());
        return Err(AppError::AssignmentUpdate(message));
    }

    if diff.is_unchanged() {
        debug!("guards for station {} saved without changes", station_id);
    } else {
        info!(
            "guards updated for station {}: added={:?}, removed={:?}",
            station_id, diff.added, diff.removed
        );
    }
    state.metrics.record_assignment_update();

    let generation = {
        let mut store = state.store.write().await;
        store.clear_error();
        if store.guards().station_id != Some(station_id) {
            return Ok(diff);
        }
        store.guards().generation()
    };
    let fetched = state.gateway.fetch_station_guards(station_id).await;
    let mut store = state.store.write().await;
    let applied = match fetched {
        Ok(assigned) => store.apply_saved_guards(generation, assigned, &diff.user_ids),
        Err(err) => {
            warn!("failed to re-read guards for station {}: {}", station_id, err);
            store.fail_guard_fetch(generation, err.to_string())
        }
    };
    if !applied {
        state.metrics.record_stale_guard_response();
    }
    Ok(diff)
}
