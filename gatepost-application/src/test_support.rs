use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::Mutex;

use gatepost_domain::{
    AssignedUser, DashboardGateway, NewStation, RuntimeConfig, Station, StationId,
    StationUpdate, UserAccount, UserId, VisitorLogEntry,
};

use crate::AppState;

#[derive(Default)]
pub struct FakeGateway {
    pub logs: Vec<VisitorLogEntry>,
    pub active: Vec<VisitorLogEntry>,
    pub stations: Mutex<Vec<Station>>,
    pub users: Vec<UserAccount>,
    pub guards: Mutex<HashMap<StationId, Vec<AssignedUser>>>,
    pub guard_delays: HashMap<StationId, Duration>,
    pub guard_write_delay: Option<Duration>,
    pub guard_updates: Mutex<Vec<(StationId, Vec<UserId>)>>,
    pub fail_active_logs: AtomicBool,
    pub fail_station_writes: AtomicBool,
    pub fail_guard_writes: AtomicBool,
}

impl FakeGateway {
    pub fn guard(id: UserId, username: &str) -> AssignedUser {
        AssignedUser {
            id,
            username: username.to_string(),
            account_type: "GUARD".to_string(),
        }
    }

    pub fn into_state(self) -> (AppState, Arc<FakeGateway>) {
        let gateway = Arc::new(self);
        let state = AppState::new(RuntimeConfig::default(), gateway.clone());
        (state, gateway)
    }
}

#[async_trait]
impl DashboardGateway for FakeGateway {
    async fn fetch_all_logs(&self) -> anyhow::Result<Vec<VisitorLogEntry>> {
        Ok(self.logs.clone())
    }

    async fn fetch_active_logs(&self) -> anyhow::Result<Vec<VisitorLogEntry>> {
        if self.fail_active_logs.load(Ordering::SeqCst) {
            return Err(anyhow!("active logs unavailable"));
        }
        Ok(self.active.clone())
    }

    async fn fetch_all_stations(&self) -> anyhow::Result<Vec<Station>> {
        Ok(self.stations.lock().await.clone())
    }

    async fn fetch_all_users(&self) -> anyhow::Result<Vec<UserAccount>> {
        Ok(self.users.clone())
    }

    async fn fetch_station_guards(&self, station_id: StationId) -> anyhow::Result<Vec<AssignedUser>> {
        if let Some(delay) = self.guard_delays.get(&station_id) {
            tokio::time::sleep(*delay).await;
        }
        Ok(self
            .guards
            .lock()
            .await
            .get(&station_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_station_guards(
        &self,
        station_id: StationId,
        user_ids: &[UserId],
    ) -> anyhow::Result<()> {
        if let Some(delay) = self.guard_write_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_guard_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("assignment service rejected the update"));
        }
        self.guard_updates
            .lock()
            .await
            .push((station_id, user_ids.to_vec()));
        let assigned = user_ids
            .iter()
            .map(|id| FakeGateway::guard(*id, &format!("guard{}", id)))
            .collect();
        self.guards.lock().await.insert(station_id, assigned);
        Ok(())
    }

    async fn create_station(&self, station: &NewStation) -> anyhow::Result<Station> {
        if self.fail_station_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("station service unavailable"));
        }
        let mut stations = self.stations.lock().await;
        let id = stations.iter().map(|station| station.id).max().unwrap_or(0) + 1;
        let created = Station {
            id,
            name: station.name.clone(),
            station_type: Some(station.station_type.as_str().to_string()),
            active: Some(station.active),
        };
        stations.push(created.clone());
        Ok(created)
    }

    async fn update_station(&self, update: &StationUpdate) -> anyhow::Result<Station> {
        if self.fail_station_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("station service unavailable"));
        }
        let updated = Station {
            id: update.id,
            name: update.name.clone(),
            station_type: Some(update.station_type.as_str().to_string()),
            active: Some(update.active),
        };
        let mut stations = self.stations.lock().await;
        if let Some(existing) = stations.iter_mut().find(|station| station.id == update.id) {
            *existing = updated.clone();
        }
        Ok(updated)
    }

    async fn set_station_active(&self, station_id: StationId, active: bool) -> anyhow::Result<Station> {
        if self.fail_station_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("station service unavailable"));
        }
        let mut stations = self.stations.lock().await;
        let station = stations
            .iter_mut()
            .find(|station| station.id == station_id)
            .ok_or_else(|| anyhow!("station {} not found", station_id))?;
        station.active = Some(active);
        Ok(station.clone())
    }
}
