// Derived view models

use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

pub const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_elements: usize,
}

/// Dashboard summary cards.
///
/// `unique_week` and `unique_month` count distinct visitor names across the
/// whole loaded log set; they are not calendar windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStats {
    pub total_today: usize,
    pub active: usize,
    pub unique_today: usize,
    pub frequent_building: String,
    pub highest_gate: String,
    pub unique_week: usize,
    pub unique_month: usize,
}
