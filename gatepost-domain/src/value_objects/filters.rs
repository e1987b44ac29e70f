// Log filter criteria and pagination value objects

use serde::{Deserialize, Serialize};

pub const ALL_LOCATIONS: &str = "all";

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }
}

/// Location constraint on the log list. Serialized as the bare location name,
/// with the literal `"all"` meaning no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationFilter {
    #[default]
    All,
    Named(String),
}

impl LocationFilter {
    pub fn named(&self) -> Option<&str> {
        match self {
            LocationFilter::All => None,
            LocationFilter::Named(name) => Some(name.as_str()),
        }
    }
}

impl From<String> for LocationFilter {
    fn from(value: String) -> Self {
        if value == ALL_LOCATIONS {
            LocationFilter::All
        } else {
            LocationFilter::Named(value)
        }
    }
}

impl From<&str> for LocationFilter {
    fn from(value: &str) -> Self {
        LocationFilter::from(value.to_string())
    }
}

impl From<LocationFilter> for String {
    fn from(value: LocationFilter) -> Self {
        match value {
            LocationFilter::All => ALL_LOCATIONS.to_string(),
            LocationFilter::Named(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search: String,
    pub status_filter: StatusFilter,
    pub location_filter: LocationFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
