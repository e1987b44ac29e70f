use tracing::error;

use gatepost_domain::{guard_accounts, UserAccount};

use crate::dtos::GuardPanelView;
use crate::{AppError, AppState};

pub async fn guard_panel(state: &AppState) -> GuardPanelView {
    let store = state.store.read().await;
    let guards = store.guards();
    GuardPanelView {
        station_id: guards.station_id,
        assigned: guards.assigned.clone(),
        selection: guards.selection.iter().copied().collect(),
        loading: guards.loading,
        error: guards.error.clone(),
        last_error: store.last_error().map(ToString::to_string),
    }
}

/// Accounts eligible for assignment to any station.
pub async fn guard_candidates(state: &AppState) -> Result<Vec<UserAccount>, AppError> {
    let users = state.gateway.fetch_all_users().await.map_err(|err| {
        error!("failed to fetch users: {}", err);
        AppError::Fetch(err.to_string())
    })?;
    Ok(guard_accounts(&users))
}
