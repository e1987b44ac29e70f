// Request and view types exchanged with the presentation layer

use serde::{Deserialize, Serialize};

use gatepost_domain::{
    AssignedUser, LocationFilter, PaginationState, Station, StationCategory, StationId,
    StatusFilter, UserId, VisitorLogEntry,
};

use crate::store::StationTab;

/// Partial criteria update; omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaUpdate {
    pub search: Option<String>,
    pub status_filter: Option<StatusFilter>,
    pub location_filter: Option<LocationFilter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationUpdate {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTabUpdate {
    pub category: Option<StationCategory>,
    pub include_inactive: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStationRequest {
    pub name: String,
    pub category: StationCategory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameStationRequest {
    pub name: String,
    pub category: Option<StationCategory>,
}

/// Activation changes require an explicit operator confirmation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleActiveRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRow {
    #[serde(flatten)]
    pub entry: VisitorLogEntry,
    pub active: bool,
    pub category: StationCategory,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogView {
    pub items: Vec<LogRow>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_elements: usize,
    pub pagination: PaginationState,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRow {
    #[serde(flatten)]
    pub station: Station,
    pub category: StationCategory,
    pub icon: &'static str,
    pub legacy: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationListView {
    pub tab: StationTab,
    pub stations: Vec<StationRow>,
    /// Message from the most recent failed station or assignment write.
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardPanelView {
    pub station_id: Option<StationId>,
    pub assigned: Vec<AssignedUser>,
    pub selection: Vec<UserId>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardToggleResult {
    pub user_id: UserId,
    pub selected: bool,
}
