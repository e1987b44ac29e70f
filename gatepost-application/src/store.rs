// Dashboard store
// Mutable holder of fetched records and UI inputs; every view is re-derived
// from it on read

use std::collections::BTreeSet;

use serde::Serialize;

use gatepost_domain::{
    clamp_page, filter_logs, should_clear_selection, toggle_guard, ActiveLogSet, AssignedUser,
    FilterCriteria, PaginationState, Station, StationCategory, StationId, UserId,
    VisitorLogEntry,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadStatus {
    Idle,
    #[serde(rename_all = "camelCase")]
    Ready { loaded_at: String },
    Failed { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub logs: Vec<VisitorLogEntry>,
    pub active_ids: ActiveLogSet,
    pub stations: Vec<Station>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTab {
    pub category: StationCategory,
    pub include_inactive: bool,
    pub selected: Option<StationId>,
}

impl Default for StationTab {
    fn default() -> Self {
        Self {
            category: StationCategory::Gate,
            include_inactive: false,
            selected: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GuardPanel {
    pub station_id: Option<StationId>,
    pub assigned: Vec<AssignedUser>,
    pub selection: BTreeSet<UserId>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl GuardPanel {
    pub fn assigned_ids(&self) -> BTreeSet<UserId> {
        self.assigned.iter().map(|user| user.id).collect()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct DashboardStore {
    snapshot: DashboardSnapshot,
    status: LoadStatus,
    criteria: FilterCriteria,
    pagination: PaginationState,
    tab: StationTab,
    guards: GuardPanel,
    last_error: Option<String>,
}

impl DashboardStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            snapshot: DashboardSnapshot::default(),
            status: LoadStatus::Idle,
            criteria: FilterCriteria::default(),
            pagination: PaginationState {
                page: 0,
                page_size: page_size.max(1),
            },
            tab: StationTab::default(),
            guards: GuardPanel::default(),
            last_error: None,
        }
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn tab(&self) -> StationTab {
        self.tab
    }

    pub fn guards(&self) -> &GuardPanel {
        &self.guards
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn station(&self, station_id: StationId) -> Option<&Station> {
        self.snapshot
            .stations
            .iter()
            .find(|station| station.id == station_id)
    }

    /// Swaps in a complete snapshot. Callers only reach this once every
    /// source collection has been fetched.
    pub fn replace_snapshot(&mut self, snapshot: DashboardSnapshot, loaded_at: String) {
        self.snapshot = snapshot;
        self.status = LoadStatus::Ready { loaded_at };
        if let Some(selected) = self.tab.selected {
            if self.station(selected).is_none() {
                self.clear_selection();
            }
        }
        self.clamp_page();
    }

    /// Records a failed load; the previous snapshot is kept but views are
    /// blocked until the next successful load.
    pub fn mark_failed(&mut self, message: String) {
        self.status = LoadStatus::Failed { message };
    }

    pub fn filtered_logs(&self) -> Vec<&VisitorLogEntry> {
        filter_logs(&self.snapshot.logs, &self.snapshot.active_ids, &self.criteria)
    }

    fn clamp_page(&mut self) {
        let total = self.filtered_logs().len();
        self.pagination.page = clamp_page(self.pagination.page, total, self.pagination.page_size);
    }

    /// Any criteria change invalidates the current page index.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.pagination.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = page;
        self.clamp_page();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.page = 0;
    }

    pub fn select_category(&mut self, category: StationCategory) {
        self.tab.category = category;
    }

    pub fn set_include_inactive(&mut self, include_inactive: bool) {
        self.tab.include_inactive = include_inactive;
    }

    pub fn clear_selection(&mut self) {
        self.tab.selected = None;
        let generation = self.guards.generation + 1;
        self.guards = GuardPanel {
            generation,
            ..GuardPanel::default()
        };
    }

    /// Selects a station and opens a guard fetch for it. The returned
    /// generation identifies the fetch; earlier ones become stale.
    pub fn begin_guard_fetch(&mut self, station_id: StationId) -> u64 {
        self.tab.selected = Some(station_id);
        let generation = self.guards.generation + 1;
        self.guards = GuardPanel {
            station_id: Some(station_id),
            loading: true,
            generation,
            ..GuardPanel::default()
        };
        generation
    }

    pub fn is_current_guard_fetch(&self, generation: u64) -> bool {
        self.guards.generation == generation
    }

    /// Applies fetched assignments unless a newer selection superseded them.
    pub fn apply_guard_fetch(&mut self, generation: u64, assigned: Vec<AssignedUser>) -> bool {
        if !self.is_current_guard_fetch(generation) {
            return false;
        }
        self.guards.selection = assigned.iter().map(|user| user.id).collect();
        self.guards.assigned = assigned;
        self.guards.loading = false;
        self.guards.error = None;
        true
    }

    /// Applies assignments re-read after a save. The selection is replaced
    /// only while it still matches what was saved, so toggles made during
    /// the write survive.
    pub fn apply_saved_guards(
        &mut self,
        generation: u64,
        assigned: Vec<AssignedUser>,
        saved: &[UserId],
    ) -> bool {
        if !self.is_current_guard_fetch(generation) {
            return false;
        }
        if self.guards.selection.iter().eq(saved.iter()) {
            self.guards.selection = assigned.iter().map(|user| user.id).collect();
        }
        self.guards.assigned = assigned;
        self.guards.loading = false;
        self.guards.error = None;
        true
    }

    pub fn fail_guard_fetch(&mut self, generation: u64, message: String) -> bool {
        if !self.is_current_guard_fetch(generation) {
            return false;
        }
        self.guards.loading = false;
        self.guards.error = Some(message);
        true
    }

    /// Flips a guard in the local selection; `None` when no station is open.
    pub fn toggle_guard(&mut self, user_id: UserId) -> Option<bool> {
        self.guards.station_id?;
        Some(toggle_guard(&mut self.guards.selection, user_id))
    }

    pub fn upsert_station(&mut self, station: Station) {
        match self
            .snapshot
            .stations
            .iter_mut()
            .find(|existing| existing.id == station.id)
        {
            Some(existing) => *existing = station,
            None => self.snapshot.stations.push(station),
        }
    }

    /// Stores the station returned by an activation toggle and drops the
    /// selection when the station just disappeared from the visible list.
    pub fn apply_active_change(&mut self, station: Station) -> bool {
        let clear = should_clear_selection(
            self.tab.selected,
            station.id,
            station.is_active(),
            self.tab.include_inactive,
        );
        self.upsert_station(station);
        if clear {
            self.clear_selection();
        }
        clear
    }

    pub fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
