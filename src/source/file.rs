use super::ScheduleSource;
use crate::errors::{AppError, AppResult};
use crate::models::charging_window::{ChargingWindow, RawSchedule};
use std::fs;
use std::path::PathBuf;

/// Schedule read from a JSON file, either a bare array of windows or an
/// `availableChargingWindows` envelope.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self, user_id: &str) -> AppResult<Vec<ChargingWindow>> {
        tracing::debug!(path = %self.path.display(), user_id, "reading schedule file");

        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Fetch(format!("cannot read {}: {e}", self.path.display()))
        })?;

        RawSchedule::from_json(&content)?.into_windows()
    }
}
