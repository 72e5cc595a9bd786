use chrono::{DateTime, FixedOffset};

/// Parse a Jira timestamp.
///
/// Jira Cloud sends `2024-03-01T10:15:30.000+0000` (offset without a colon),
/// which is not RFC 3339, so both shapes are accepted.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}
