//! Lenient parsing for caller-supplied timestamps.
//!
//! Browser date-time inputs produce ISO strings without an offset
//! (`2026-11-01T17:00` or `2026-11-01T17:00:00`). Those are read as UTC;
//! strings with an offset are converted to UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::types::Timestamp;

/// Offset-less layouts accepted after RFC 3339 fails. `%.f` also matches
/// an absent fractional part.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an RFC 3339 timestamp, or an offset-less ISO date-time taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid date-time '{raw}'"))
}

/// `deserialize_with` helper for `Option<Timestamp>` fields. Pair it with
/// `#[serde(default)]` so an absent field stays `None`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
