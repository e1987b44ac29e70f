use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{info, warn};

use gatepost_domain::{
    AssignedUser, DashboardGateway, LogId, NewStation, Station, StationId, StationUpdate,
    UserAccount, UserId, VisitorLogEntry,
};

/// On-disk dashboard data used in file mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSnapshot {
    pub logs: Vec<VisitorLogEntry>,
    pub active_log_ids: Vec<LogId>,
    pub stations: Vec<Station>,
    pub users: Vec<UserAccount>,
    pub guards: BTreeMap<StationId, Vec<UserId>>,
}

/// Serves a JSON snapshot file and writes station and assignment changes
/// back to it.
pub struct FileDashboardGateway {
    path: PathBuf,
    snapshot: Mutex<FileSnapshot>,
}

impl FileDashboardGateway {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let snapshot = if path.exists() {
            let content = fs::read_to_string(&path).await?;
            serde_json::from_str(&content)
                .map_err(|err| anyhow!("invalid snapshot {}: {}", path.display(), err))?
        } else {
            warn!("snapshot {} not found, starting empty", path.display());
            FileSnapshot::default()
        };
        info!(
            "file gateway opened: {} ({} logs, {} stations)",
            path.display(),
            snapshot.logs.len(),
            snapshot.stations.len()
        );
        Ok(Self {
            path,
            snapshot: Mutex::new(snapshot),
        })
    }

    async fn persist(&self, snapshot: &FileSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Runs `change` on a copy of the snapshot and keeps it only once the
    /// copy has been written to disk.
    async fn commit<T, F>(&self, change: F) -> Result<T>
    where
        T: Send,
        F: FnOnce(&mut FileSnapshot) -> Result<T> + Send,
    {
        let mut current = self.snapshot.lock().await;
        let mut staged = current.clone();
        let outcome = change(&mut staged)?;
        self.persist(&staged).await?;
        *current = staged;
        Ok(outcome)
    }
}

fn find_station(snapshot: &mut FileSnapshot, station_id: StationId) -> Result<&mut Station> {
    snapshot
        .stations
        .iter_mut()
        .find(|station| station.id == station_id)
        .ok_or_else(|| anyhow!("station {} not found", station_id))
}

#[async_trait]
impl DashboardGateway for FileDashboardGateway {
    async fn fetch_all_logs(&self) -> Result<Vec<VisitorLogEntry>> {
        Ok(self.snapshot.lock().await.logs.clone())
    }

    async fn fetch_active_logs(&self) -> Result<Vec<VisitorLogEntry>> {
        let snapshot = self.snapshot.lock().await;
        Ok(snapshot
            .logs
            .iter()
            .filter(|log| snapshot.active_log_ids.contains(&log.log_id))
            .cloned()
            .collect())
    }

    async fn fetch_all_stations(&self) -> Result<Vec<Station>> {
        Ok(self.snapshot.lock().await.stations.clone())
    }

    async fn fetch_all_users(&self) -> Result<Vec<UserAccount>> {
        Ok(self.snapshot.lock().await.users.clone())
    }

    async fn fetch_station_guards(&self, station_id: StationId) -> Result<Vec<AssignedUser>> {
        let snapshot = self.snapshot.lock().await;
        let ids = snapshot.guards.get(&station_id).cloned().unwrap_or_default();
        Ok(ids
            .into_iter()
            .map(|id| {
                snapshot
                    .users
                    .iter()
                    .find(|user| user.id == id)
                    .map(AssignedUser::from)
                    .unwrap_or(AssignedUser {
                        id,
                        username: String::new(),
                        account_type: String::new(),
                    })
            })
            .collect())
    }

    async fn update_station_guards(&self, station_id: StationId, user_ids: &[UserId]) -> Result<()> {
        self.commit(|snapshot| {
            find_station(snapshot, station_id)?;
            snapshot.guards.insert(station_id, user_ids.to_vec());
            Ok(())
        })
        .await
    }

    async fn create_station(&self, station: &NewStation) -> Result<Station> {
        self.commit(|snapshot| {
            let id = snapshot.stations.iter().map(|s| s.id).max().unwrap_or(0) + 1;
            let created = Station {
                id,
                name: station.name.clone(),
                station_type: Some(station.station_type.as_str().to_string()),
                active: Some(station.active),
            };
            snapshot.stations.push(created.clone());
            Ok(created)
        })
        .await
    }

    async fn update_station(&self, update: &StationUpdate) -> Result<Station> {
        self.commit(|snapshot| {
            let station = find_station(snapshot, update.id)?;
            station.name = update.name.clone();
            station.station_type = Some(update.station_type.as_str().to_string());
            station.active = Some(update.active);
            Ok(station.clone())
        })
        .await
    }

    async fn set_station_active(&self, station_id: StationId, active: bool) -> Result<Station> {
        self.commit(|snapshot| {
            let station = find_station(snapshot, station_id)?;
            station.active = Some(active);
            Ok(station.clone())
        })
        .await
    }
}
