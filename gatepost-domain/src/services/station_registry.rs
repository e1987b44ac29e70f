use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::Station;
use crate::errors::ValidationError;
use crate::services::classifier::{classify_station, name_mentions_gate};
use crate::value_objects::{StationCategory, StationId, UserId};

const GATE_PREFIX: &str = "Gate ";

fn matches_category(station: &Station, category: StationCategory) -> bool {
    classify_station(station) == category || station.is_legacy()
}

/// Stations shown under a category tab, in input order.
pub fn list_for(
    stations: &[Station],
    category: StationCategory,
    include_inactive: bool,
) -> Vec<&Station> {
    stations
        .iter()
        .filter(|station| matches_category(station, category))
        .filter(|station| include_inactive || station.is_active())
        .collect()
}

/// Next value of the station's active flag; a missing flag counts as active.
pub fn toggled_active(station: &Station) -> bool {
    !station.is_active()
}

/// Whether the selection must be dropped after `toggled` changed its flag.
pub fn should_clear_selection(
    selected: Option<StationId>,
    toggled: StationId,
    now_active: bool,
    include_inactive: bool,
) -> bool {
    selected == Some(toggled) && !now_active && !include_inactive
}

/// Prefixes "Gate " onto gate names that do not already mention a gate.
pub fn normalize_station_name(name: &str, category: StationCategory) -> String {
    let trimmed = name.trim();
    if category == StationCategory::Gate && !name_mentions_gate(trimmed) {
        format!("{}{}", GATE_PREFIX, trimmed)
    } else {
        trimmed.to_string()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

pub fn validate_new_station(
    name: &str,
    category: StationCategory,
    existing: &[Station],
) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let final_name = normalize_station_name(name, category);
    if let Some(taken) = existing
        .iter()
        .find(|station| same_name(&station.name, name) || same_name(&station.name, &final_name))
    {
        return Err(ValidationError::DuplicateName {
            name: taken.name.trim().to_string(),
        });
    }
    Ok(final_name)
}

/// Rename checks. Unlike creation, the new name is not checked against other
/// stations. A missing category keeps the station's current one.
pub fn validate_rename(
    station: &Station,
    new_name: &str,
    new_category: Option<StationCategory>,
) -> Result<(String, StationCategory), ValidationError> {
    if new_name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let category = new_category.unwrap_or_else(|| classify_station(station));
    Ok((normalize_station_name(new_name, category), category))
}

/// Flips one guard in the local assignment selection; returns whether it is
/// now selected.
pub fn toggle_guard(selection: &mut BTreeSet<UserId>, user_id: UserId) -> bool {
    if selection.remove(&user_id) {
        false
    } else {
        selection.insert(user_id);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDiff {
    /// Full replacement set sent to the backend.
    pub user_ids: Vec<UserId>,
    pub added: Vec<UserId>,
    pub removed: Vec<UserId>,
}

impl AssignmentDiff {
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

pub fn compute_assignment_diff(
    previous: &BTreeSet<UserId>,
    selected: &BTreeSet<UserId>,
) -> AssignmentDiff {
    AssignmentDiff {
        user_ids: selected.iter().copied().collect(),
        added: selected.difference(previous).copied().collect(),
        removed: previous.difference(selected).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: StationId, name: &str, station_type: Option<&str>, active: Option<bool>) -> Station {
        Station {
            id,
            name: name.to_string(),
            station_type: station_type.map(ToString::to_string),
            active,
        }
    }

    fn ids(stations: &[&Station]) -> Vec<StationId> {
        stations.iter().map(|station| station.id).collect()
    }

    fn sample() -> Vec<Station> {
        vec![
            station(1, "Gate 1", Some("gate"), None),
            station(2, "Library", None, Some(true)),
            station(3, "", None, None),
            station(4, "North Gate", None, Some(false)),
            station(5, "Gate 9", Some("building"), None),
            station(6, "N/A", None, Some(false)),
        ]
    }

    #[test]
    fn gate_tab_lists_gates_and_legacy_records() {
        let stations = sample();
        assert_eq!(ids(&list_for(&stations, StationCategory::Gate, false)), vec![1, 3]);
        assert_eq!(ids(&list_for(&stations, StationCategory::Gate, true)), vec![1, 3, 4, 6]);
    }

    #[test]
    fn building_tab_lists_buildings_and_legacy_records() {
        let stations = sample();
        assert_eq!(ids(&list_for(&stations, StationCategory::Building, false)), vec![2, 3, 5]);
        assert_eq!(ids(&list_for(&stations, StationCategory::Building, true)), vec![2, 3, 5, 6]);
    }

    #[test]
    fn toggle_is_a_boolean_flip() {
        let unset = station(1, "Lobby", None, None);
        assert!(!toggled_active(&unset));
        let inactive = station(1, "Lobby", None, Some(false));
        assert!(toggled_active(&inactive));
        let active = station(1, "Lobby", None, Some(true));
        assert!(!toggled_active(&active));
    }

    #[test]
    fn deactivating_selected_station_clears_hidden_selection() {
        assert!(should_clear_selection(Some(4), 4, false, false));
        assert!(!should_clear_selection(Some(4), 4, false, true));
        assert!(!should_clear_selection(Some(4), 4, true, false));
        assert!(!should_clear_selection(Some(2), 4, false, false));
        assert!(!should_clear_selection(None, 4, false, false));
    }

    #[test]
    fn create_prefixes_gate_names() {
        let existing = vec![station(1, "Library", None, None)];
        assert_eq!(
            validate_new_station("3", StationCategory::Gate, &existing),
            Ok("Gate 3".to_string())
        );
        assert_eq!(
            validate_new_station("East GATE", StationCategory::Gate, &existing),
            Ok("East GATE".to_string())
        );
        assert_eq!(
            validate_new_station(" Annex ", StationCategory::Building, &existing),
            Ok("Annex".to_string())
        );
    }

    #[test]
    fn create_rejects_duplicates_case_insensitively() {
        let existing = vec![station(1, " Gate 3 ", Some("gate"), None)];
        assert_eq!(
            validate_new_station("gate 3", StationCategory::Gate, &existing),
            Err(ValidationError::DuplicateName {
                name: "Gate 3".to_string()
            })
        );
        assert!(matches!(
            validate_new_station("3", StationCategory::Gate, &existing),
            Err(ValidationError::DuplicateName { .. })
        ));
    }

    #[test]
    fn create_then_recreate_is_duplicate() {
        let mut existing = Vec::new();
        let name = validate_new_station("3", StationCategory::Gate, &existing).expect("valid");
        existing.push(station(10, &name, Some("gate"), Some(true)));
        assert!(matches!(
            validate_new_station("Gate 3", StationCategory::Gate, &existing),
            Err(ValidationError::DuplicateName { .. })
        ));
    }

    #[test]
    fn create_rejects_blank_names() {
        assert_eq!(
            validate_new_station("   ", StationCategory::Gate, &[]),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn rename_skips_duplicate_check() {
        let target = station(2, "Library", None, None);
        let (name, category) =
            validate_rename(&target, "Gate 1", Some(StationCategory::Gate)).expect("rename");
        assert_eq!(name, "Gate 1");
        assert_eq!(category, StationCategory::Gate);
    }

    #[test]
    fn rename_keeps_current_category_and_prefixes_gates() {
        let gate = station(1, "West Gate", None, None);
        let (name, category) = validate_rename(&gate, "7", None).expect("rename");
        assert_eq!(category, StationCategory::Gate);
        assert_eq!(name, "Gate 7");
        assert_eq!(validate_rename(&gate, " ", None), Err(ValidationError::EmptyName));
    }

    #[test]
    fn assignment_diff_is_full_replacement() {
        let previous: BTreeSet<UserId> = [1, 2, 3].into_iter().collect();
        let selected: BTreeSet<UserId> = [3, 4].into_iter().collect();
        let diff = compute_assignment_diff(&previous, &selected);
        assert_eq!(diff.user_ids, vec![3, 4]);
        assert_eq!(diff.added, vec![4]);
        assert_eq!(diff.removed, vec![1, 2]);
        assert!(!diff.is_unchanged());

        let cleared = compute_assignment_diff(&previous, &BTreeSet::new());
        assert!(cleared.user_ids.is_empty());
    }

    #[test]
    fn toggle_guard_flips_membership() {
        let mut selection = BTreeSet::new();
        assert!(toggle_guard(&mut selection, 5));
        assert!(selection.contains(&5));
        assert!(!toggle_guard(&mut selection, 5));
        assert!(selection.is_empty());
    }
}
