// Station category value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationCategory {
    Gate,
    Building,
}

impl StationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationCategory::Gate => "gate",
            StationCategory::Building => "building",
        }
    }

    /// Recognizes a stored station type. Unknown or legacy values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("gate") {
            Some(StationCategory::Gate)
        } else if value.eq_ignore_ascii_case("building") {
            Some(StationCategory::Building)
        } else {
            None
        }
    }
}

impl std::fmt::Display for StationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
