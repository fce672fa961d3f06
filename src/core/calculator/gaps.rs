//! Gap finder: the complement of the available charging windows within
//! each calendar day that has at least one window.

use crate::errors::{AppError, AppResult};
use crate::models::charging_window::ChargingWindow;
use crate::utils::date::{end_of_day, start_of_day};
use chrono::{NaiveDate, NaiveDateTime};

/// Knobs for gap detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GapPolicy {
    /// Also emit a gap from midnight to the first window of each day.
    /// Off by default: the time before the first window is left uncovered.
    pub leading_gap: bool,
}

impl GapPolicy {
    pub fn with_leading_gap(leading_gap: bool) -> Self {
        Self { leading_gap }
    }
}

/// `[00:00:00.000, 23:59:59.999]` of `day`.
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (start_of_day(day), end_of_day(day))
}

/// Gaps with the default policy.
pub fn find_gaps(windows: &[ChargingWindow]) -> AppResult<Vec<ChargingWindow>> {
    find_gaps_with(windows, GapPolicy::default())
}

/// Compute the gap windows for `windows`.
///
/// The input does not need to be sorted and is never reordered: the
/// computation runs on a sorted copy. Days without any window produce no
/// gaps. Gaps are returned in ascending order and never have zero length.
pub fn find_gaps_with(
    windows: &[ChargingWindow],
    policy: GapPolicy,
) -> AppResult<Vec<ChargingWindow>> {
    if windows.is_empty() {
        return Err(AppError::InvalidInput(
            "cannot compute gaps of an empty schedule".to_string(),
        ));
    }

    let mut sorted = windows.to_vec();
    // stable: ties keep their original relative order
    sorted.sort_by_key(|w| w.start());

    let (mut day_start, mut day_end) = day_bounds(sorted[0].day());
    let mut gaps = Vec::new();
    let mut latest_end: Option<NaiveDateTime> = None;

    for (i, window) in sorted.iter().enumerate() {
        let new_day = window.start() > day_end;
        if new_day {
            (day_start, day_end) = day_bounds(window.day());
        }

        if policy.leading_gap && (i == 0 || new_day) {
            // windows spilling over midnight already cover the early hours
            let from = latest_end
                .filter(|&end| end > day_start)
                .unwrap_or(day_start);
            if from < window.start() {
                gaps.push(ChargingWindow::gap(from, window.start())?);
            }
        }

        match sorted.get(i + 1) {
            Some(next) if next.start() <= day_end => {
                if window.end() < next.start() {
                    gaps.push(ChargingWindow::gap(window.end(), next.start())?);
                }
            }
            // last window of the day: close out until midnight
            _ => {
                if window.end() < day_end {
                    gaps.push(ChargingWindow::gap(window.end(), day_end)?);
                }
            }
        }

        latest_end = latest_end.max(Some(window.end()));
    }

    tracing::debug!(
        windows = sorted.len(),
        gaps = gaps.len(),
        leading_gap = policy.leading_gap,
        "computed schedule gaps"
    );

    Ok(gaps)
}
