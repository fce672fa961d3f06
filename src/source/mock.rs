use super::ScheduleSource;
use crate::errors::AppResult;
use crate::models::charging_window::{ChargingWindow, RawChargingWindow, RawSchedule};

/// Fixed demo schedule, handy for trying the CLI without a backend.
pub struct MockSource;

const MOCK_WINDOWS: [(&str, &str, f64); 4] = [
    ("2024-02-02T08:00:00", "2024-02-02T12:00:00", 333.0),
    ("2024-02-03T08:00:00", "2024-02-03T12:00:00", 50.0),
    ("2024-02-03T14:00:00", "2024-02-03T18:00:00", 60.0),
    ("2024-02-04T14:00:00", "2024-02-04T18:00:00", 33.0),
];

impl ScheduleSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch(&self, _user_id: &str) -> AppResult<Vec<ChargingWindow>> {
        let raw = MOCK_WINDOWS
            .iter()
            .map(|(start, end, emissions)| RawChargingWindow {
                start_time: start.to_string(),
                end_time: end.to_string(),
                emissions: Some(*emissions),
            })
            .collect();

        RawSchedule::List(raw).into_windows()
    }
}
