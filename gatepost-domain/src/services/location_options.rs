use std::collections::HashSet;

use crate::entities::{is_usable_name, Station};
use crate::services::natural_sort::gate_aware_cmp;

/// Location names offered by the log location filter.
///
/// Blank and placeholder names are skipped; duplicates differing only in case
/// or surrounding whitespace keep the first spelling seen.
pub fn build_location_options(stations: &[Station]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options: Vec<String> = Vec::new();
    for station in stations {
        if !is_usable_name(&station.name) {
            continue;
        }
        let name = station.name.trim();
        if seen.insert(name.to_lowercase()) {
            options.push(name.to_string());
        }
    }
    options.sort_by(|a, b| gate_aware_cmp(a, b));
    options
}
