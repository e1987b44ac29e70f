use async_trait::async_trait;

use crate::entities::{AssignedUser, NewStation, Station, StationUpdate, UserAccount, VisitorLogEntry};
use crate::value_objects::{StationId, UserId};

/// Data-access collaborator backed by the records service.
#[async_trait]
pub trait DashboardGateway: Send + Sync {
    async fn fetch_all_logs(&self) -> anyhow::Result<Vec<VisitorLogEntry>>;
    /// Entries of visitors still on site; only their `log_id` is consumed.
    async fn fetch_active_logs(&self) -> anyhow::Result<Vec<VisitorLogEntry>>;
    async fn fetch_all_stations(&self) -> anyhow::Result<Vec<Station>>;
    async fn fetch_all_users(&self) -> anyhow::Result<Vec<UserAccount>>;
    async fn fetch_station_guards(&self, station_id: StationId) -> anyhow::Result<Vec<AssignedUser>>;
    /// Replaces the full set of guards assigned to a station.
    async fn update_station_guards(
        &self,
        station_id: StationId,
        user_ids: &[UserId],
    ) -> anyhow::Result<()>;
    async fn create_station(&self, station: &NewStation) -> anyhow::Result<Station>;
    async fn update_station(&self, update: &StationUpdate) -> anyhow::Result<Station>;
    async fn set_station_active(&self, station_id: StationId, active: bool) -> anyhow::Result<Station>;
}
