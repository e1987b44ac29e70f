use gatepost_domain::{build_location_options, classify_station, icon_for, list_for};

use crate::dtos::{StationListView, StationRow};
use crate::queries::ensure_available;
use crate::store::LoadStatus;
use crate::{AppError, AppState};

/// Stations under the active tab, honouring the include-inactive toggle.
pub async fn station_list(state: &AppState) -> Result<StationListView, AppError> {
    let store = state.store.read().await;
    ensure_available(&store)?;
    let tab = store.tab();
    let stations = list_for(&store.snapshot().stations, tab.category, tab.include_inactive)
        .into_iter()
        .map(|station| StationRow {
            category: classify_station(station),
            icon: icon_for(station),
            legacy: station.is_legacy(),
            station: station.clone(),
        })
        .collect();
    Ok(StationListView {
        tab,
        stations,
        last_error: store.last_error().map(ToString::to_string),
    })
}

/// Location filter choices, including inactive stations.
pub async fn location_options(state: &AppState) -> Result<Vec<String>, AppError> {
    let store = state.store.read().await;
    ensure_available(&store)?;
    Ok(build_location_options(&store.snapshot().stations))
}

pub async fn load_status(state: &AppState) -> LoadStatus {
    state.store.read().await.status().clone()
}
