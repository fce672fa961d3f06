use crate::core::calculator::gaps::{GapPolicy, find_gaps_with};
use crate::errors::AppResult;
use crate::models::charging_window::ChargingWindow;
use crate::utils::date::day_key;
use chrono::NaiveDate;
use serde::Serialize;

/// All windows (available and gaps) starting on one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DayTimeline {
    pub date: NaiveDate,
    pub windows: Vec<ChargingWindow>,
}

impl DayTimeline {
    pub fn key(&self) -> String {
        day_key(self.date)
    }
}

/// Merged, chronologically sorted timeline split by day.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Timeline {
    pub days: Vec<DayTimeline>,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayTimeline> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Every window in timeline order.
    pub fn windows(&self) -> impl Iterator<Item = &ChargingWindow> {
        self.days.iter().flat_map(|d| d.windows.iter())
    }
}

pub fn build_timeline(schedule: &[ChargingWindow], policy: GapPolicy) -> AppResult<Timeline> {
    if schedule.is_empty() {
        return Ok(Timeline::default());
    }

    // -----------------------------
    // Merge windows and gaps
    // -----------------------------
    let gaps = find_gaps_with(schedule, policy)?;

    let mut merged: Vec<ChargingWindow> = Vec::with_capacity(schedule.len() + gaps.len());
    merged.extend_from_slice(schedule);
    merged.extend(gaps);
    merged.sort_by_key(|w| w.start());

    // -----------------------------
    // Partition by day
    // -----------------------------
    let mut days: Vec<DayTimeline> = Vec::new();

    for w in merged {
        let date = w.day();
        match days.iter_mut().find(|d| d.date == date) {
            Some(day) => day.windows.push(w),
            None => days.push(DayTimeline {
                date,
                windows: vec![w],
            }),
        }
    }

    Ok(Timeline { days })
}
