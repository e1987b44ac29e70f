use std::collections::{HashMap, HashSet};

use crate::entities::{ActiveLogSet, LogStats, VisitorLogEntry, NOT_AVAILABLE, UNKNOWN_LOCATION};
use crate::services::classifier::name_mentions_gate;

pub fn compute_stats(logs: &[VisitorLogEntry], active: &ActiveLogSet, today: &str) -> LogStats {
    let today_logs: Vec<&VisitorLogEntry> = logs.iter().filter(|log| log.date == today).collect();

    let active_today = today_logs
        .iter()
        .filter(|log| active.is_active(log.log_id))
        .count();
    let unique_today = distinct_names(today_logs.iter().copied());

    let locations: Vec<&str> = today_logs.iter().map(|log| location_key(log)).collect();
    let frequent_building = most_frequent(locations.iter().copied())
        .unwrap_or(NOT_AVAILABLE)
        .to_string();
    let highest_gate = most_frequent(locations.iter().copied().filter(|name| name_mentions_gate(name)))
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    // Name-based, whole-dataset counts.
    let unique_overall = distinct_names(logs.iter());

    LogStats {
        total_today: today_logs.len(),
        active: active_today,
        unique_today,
        frequent_building,
        highest_gate,
        unique_week: unique_overall,
        unique_month: unique_overall,
    }
}

fn location_key(log: &VisitorLogEntry) -> &str {
    if log.location.trim().is_empty() {
        UNKNOWN_LOCATION
    } else {
        &log.location
    }
}

fn distinct_names<'a>(logs: impl Iterator<Item = &'a VisitorLogEntry>) -> usize {
    logs.map(|log| log.full_name.as_str()).collect::<HashSet<_>>().len()
}

/// Highest count wins; ties go to the value encountered first.
fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for value in order {
        let count = counts.get(value).copied().unwrap_or_default();
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}
