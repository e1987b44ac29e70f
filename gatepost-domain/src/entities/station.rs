// Station entity
// A named physical checkpoint: a gate (entry/exit) or a building (destination)

use serde::{Deserialize, Serialize};

use crate::utils::string_or_empty;
use crate::value_objects::{StationCategory, StationId};

pub const NAME_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    /// Stored type as sent by the backend. Legacy records may omit it or carry
    /// values other than `gate`/`building`.
    #[serde(default)]
    pub station_type: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Station {
    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    pub fn has_usable_name(&self) -> bool {
        is_usable_name(&self.name)
    }

    pub fn has_usable_type(&self) -> bool {
        self.station_type
            .as_deref()
            .and_then(StationCategory::parse)
            .is_some()
    }

    /// Untyped, unnamed records kept visible under every tab for correction.
    pub fn is_legacy(&self) -> bool {
        !self.has_usable_name() && !self.has_usable_type()
    }
}

pub fn is_usable_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(NAME_PLACEHOLDER)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStation {
    pub name: String,
    pub station_type: StationCategory,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationUpdate {
    pub id: StationId,
    pub name: String,
    pub active: bool,
    pub station_type: StationCategory,
}
