use chrono::NaiveDate;
use serde::Serialize;

/// Per-day totals of a merged timeline.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub available_windows: usize,
    pub gap_windows: usize,
    pub available_minutes: i64,
    pub gap_minutes: i64,
    pub emissions_saved: f64,
}
