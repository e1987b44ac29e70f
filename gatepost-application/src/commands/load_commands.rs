use chrono::Utc;
use tracing::{error, info};

use gatepost_domain::ActiveLogSet;

use crate::store::DashboardSnapshot;
use crate::{AppError, AppState};

/// Fetches logs, active logs and stations concurrently. The store is only
/// updated once all three succeed; any failure leaves a single error state.
pub async fn load_dashboard(state: &AppState) -> Result<(), AppError> {
    let gateway = &state.gateway;
    let fetched = tokio::try_join!(
        gateway.fetch_all_logs(),
        gateway.fetch_active_logs(),
        gateway.fetch_all_stations()
    );

    let (logs, active_logs, stations) = match fetched {
        Ok(collections) => collections,
        Err(err) => {
            error!("failed to load dashboard data: {}", err);
            state.metrics.record_load_error();
            let message = err.to_string();
            state.store.write().await.mark_failed(message.clone());
            return Err(AppError::Fetch(message));
        }
    };

    let snapshot = DashboardSnapshot {
        active_ids: ActiveLogSet::from_entries(&active_logs),
        logs,
        stations,
    };
    info!(
        "dashboard loaded: logs={}, active={}, stations={}",
        snapshot.logs.len(),
        snapshot.active_ids.len(),
        snapshot.stations.len()
    );
    state
        .store
        .write()
        .await
        .replace_snapshot(snapshot, Utc::now().to_rfc3339());
    state.metrics.record_load();
    Ok(())
}
