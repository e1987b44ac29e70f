// Visitor log entity
// One recorded visit at a station; produced by the log-recording subsystem

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::utils::string_or_empty;
use crate::value_objects::LogId;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorLogEntry {
    pub log_id: LogId,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id_type: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub pass_no: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub purpose: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub logged_by: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub time: String,
}

impl VisitorLogEntry {
    /// Text fields matched by the free-text search, in display order.
    pub fn searchable_fields(&self) -> [&str; 8] {
        [
            self.full_name.as_str(),
            self.id_type.as_str(),
            self.pass_no.as_str(),
            self.location.as_str(),
            self.purpose.as_str(),
            self.logged_by.as_str(),
            self.date.as_str(),
            self.time.as_str(),
        ]
    }
}

/// Log ids of visitors that have not checked out yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveLogSet {
    ids: HashSet<LogId>,
}

impl ActiveLogSet {
    pub fn from_entries(entries: &[VisitorLogEntry]) -> Self {
        entries.iter().map(|entry| entry.log_id).collect()
    }

    pub fn is_active(&self, log_id: LogId) -> bool {
        self.ids.contains(&log_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<LogId> for ActiveLogSet {
    fn from_iter<I: IntoIterator<Item = LogId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
