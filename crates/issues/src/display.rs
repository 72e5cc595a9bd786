//! Presentation hints derived from a task, returned alongside it so clients
//! only have to map them to styles.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::time::parse_timestamp;

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*([0-9]+)$").expect("numbered pattern is valid"));

/// How long ago a timestamp was, in the dashboard's colour bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBucket {
    /// Up to 5 days.
    Fresh,
    /// 6 to 7 days.
    Aging,
    /// 8 to 30 days.
    Overdue,
    /// More than 30 days.
    Stale,
    Unknown,
}

pub fn age_bucket(timestamp: &str, now: DateTime<Utc>) -> AgeBucket {
    let Some(at) = parse_timestamp(timestamp) else {
        return AgeBucket::Unknown;
    };
    let days = (now - at.with_timezone(&Utc)).num_days();
    match days {
        d if d > 30 => AgeBucket::Stale,
        d if d > 7 => AgeBucket::Overdue,
        d if d > 5 => AgeBucket::Aging,
        _ => AgeBucket::Fresh,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    ToDo,
    InProgress,
    Testing,
    Done,
    Other,
}

pub fn status_category(status: &str) -> StatusCategory {
    match status.trim().to_lowercase().as_str() {
        "to do" => StatusCategory::ToDo,
        "in progress" => StatusCategory::InProgress,
        "testing" => StatusCategory::Testing,
        "done" => StatusCategory::Done,
        _ => StatusCategory::Other,
    }
}

/// Short label for a sprint list.
///
/// `["Sprint 4", "Sprint 3"]` becomes `"Sprint 3, 4"`: the prefix of the
/// first name followed by every numeric suffix in ascending order (names
/// without one keep their order after the numbers). If the first name has no
/// numeric suffix the names are joined as-is.
pub fn sprint_summary(names: &[String]) -> Option<String> {
    let first = names.first()?;
    let Some(caps) = NUMBERED.captures(first) else {
        return Some(names.join(", "));
    };
    let prefix = &caps[1];

    let mut numbers: Vec<u64> = Vec::new();
    let mut others: Vec<&str> = Vec::new();
    for name in names {
        match NUMBERED
            .captures(name)
            .and_then(|c| c[2].parse::<u64>().ok())
        {
            Some(n) => numbers.push(n),
            None => others.push(name),
        }
    }
    numbers.sort_unstable();

    let parts: Vec<String> = numbers
        .iter()
        .map(u64::to_string)
        .chain(others.iter().map(|s| s.to_string()))
        .collect();
    Some(format!("{prefix} {}", parts.join(", ")))
}
