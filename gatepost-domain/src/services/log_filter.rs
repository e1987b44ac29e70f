use crate::entities::{ActiveLogSet, VisitorLogEntry};
use crate::value_objects::{FilterCriteria, StatusFilter};

pub fn matches_status(log: &VisitorLogEntry, active: &ActiveLogSet, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Active => active.is_active(log.log_id),
        StatusFilter::Inactive => !active.is_active(log.log_id),
    }
}

pub fn matches_location(log: &VisitorLogEntry, location: Option<&str>) -> bool {
    let Some(wanted) = location else {
        return true;
    };
    let actual = log.location.trim().to_lowercase();
    if actual.is_empty() {
        return false;
    }
    actual == wanted.trim().to_lowercase()
}

/// Case-insensitive substring match against any single searchable field.
pub fn matches_search(log: &VisitorLogEntry, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    log.searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_criteria(
    log: &VisitorLogEntry,
    active: &ActiveLogSet,
    criteria: &FilterCriteria,
) -> bool {
    matches_status(log, active, criteria.status_filter)
        && matches_location(log, criteria.location_filter.named())
        && matches_search(log, &criteria.search)
}

/// Stable filter: the result keeps the relative order of `logs`.
pub fn filter_logs<'a>(
    logs: &'a [VisitorLogEntry],
    active: &ActiveLogSet,
    criteria: &FilterCriteria,
) -> Vec<&'a VisitorLogEntry> {
    logs.iter()
        .filter(|log| matches_criteria(log, active, criteria))
        .collect()
}
