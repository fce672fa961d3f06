//! Time utilities: parsing HH:MM[:SS] and ISO timestamps, formatting.

use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Naive timestamp layouts accepted in addition to RFC 3339.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}:\d{2}(:\d{2})?$").expect("valid time regex"))
}

/// Parse a wall-clock time in `HH:MM` or `HH:MM:SS` form.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();
    if !time_regex().is_match(t) {
        return Err(AppError::InvalidTime(format!(
            "{t} (time must be in HH:MM or HH:MM:SS format)"
        )));
    }

    let fmt = if t.len() == 5 { "%H:%M" } else { "%H:%M:%S" };
    NaiveTime::parse_from_str(t, fmt).map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Parse a timestamp string into local wall-clock time.
///
/// Timestamps carrying an offset are converted to the local zone; naive
/// timestamps are taken as already local.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// True when `fmt` is a strftime pattern chrono can render.
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|i| matches!(i, Item::Error))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
