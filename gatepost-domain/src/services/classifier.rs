use crate::entities::Station;
use crate::value_objects::StationCategory;

const GATE_MARKER: &str = "gate";

pub fn name_mentions_gate(name: &str) -> bool {
    name.to_lowercase().contains(GATE_MARKER)
}

/// Resolves a station's effective category.
///
/// An explicit stored type wins; otherwise the name decides, with anything
/// not mentioning "gate" (including a blank name) treated as a building.
pub fn classify(station_type: Option<&str>, name: &str) -> StationCategory {
    if let Some(category) = station_type.and_then(StationCategory::parse) {
        return category;
    }
    if name_mentions_gate(name) {
        StationCategory::Gate
    } else {
        StationCategory::Building
    }
}

pub fn classify_station(station: &Station) -> StationCategory {
    classify(station.station_type.as_deref(), &station.name)
}

pub fn icon_for(station: &Station) -> &'static str {
    classify_station(station).as_str()
}

/// Category of a log row's location, via the station carrying that name.
pub fn category_for_location(location: &str, stations: &[Station]) -> StationCategory {
    let wanted = location.trim().to_lowercase();
    stations
        .iter()
        .find(|station| !wanted.is_empty() && station.name.trim().to_lowercase() == wanted)
        .map(classify_station)
        .unwrap_or_else(|| classify(None, location))
}
