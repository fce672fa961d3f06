use super::{day_of_week::DayOfWeek, traffic::TrafficLevel};
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::Serialize;

/// One recurring use of the car on a given weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    pub day: DayOfWeek,
    pub start_time: NaiveTime,
    /// `None` for single (one-way) trips.
    pub end_time: Option<NaiveTime>,
}

impl UsageEntry {
    pub fn new(day: DayOfWeek, start_time: NaiveTime, end_time: Option<NaiveTime>) -> AppResult<Self> {
        if let Some(end) = end_time
            && end < start_time
        {
            return Err(AppError::InvalidUsage(format!(
                "{}: end {} is before start {}",
                day.code(),
                end.format("%H:%M"),
                start_time.format("%H:%M")
            )));
        }

        Ok(Self {
            day,
            start_time,
            end_time,
        })
    }

    /// Parse the CLI form `DAY@HH:MM[-HH:MM]`, e.g. `MON@08:00-08:45`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (day_str, times) = s
            .split_once('@')
            .ok_or_else(|| AppError::InvalidUsage(format!("{s} (expected DAY@HH:MM[-HH:MM])")))?;

        let day = DayOfWeek::from_code(day_str).ok_or_else(|| AppError::InvalidDay(day_str.to_string()))?;

        let (start, end) = match times.split_once('-') {
            Some((a, b)) => (parse_time(a)?, Some(parse_time(b)?)),
            None => (parse_time(times)?, None),
        };

        Self::new(day, start, end)
    }

    pub fn display(&self) -> String {
        match self.end_time {
            Some(end) => format!(
                "{}@{}-{}",
                self.day.code(),
                self.start_time.format("%H:%M"),
                end.format("%H:%M")
            ),
            None => format!("{}@{}", self.day.code(), self.start_time.format("%H:%M")),
        }
    }
}

/// A recurring commute pattern submitted by a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commute {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub is_round_trip: bool,
    pub usage: Vec<UsageEntry>,
    pub approx_distance_km: f64,
    pub approx_duration_minutes: f64,
    pub traffic: TrafficLevel,
    pub created_at: String,
}

impl Commute {
    /// Check the fields a user can get wrong on the command line.
    pub fn validate(&self) -> AppResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::InvalidInput("user id must not be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("commute name must not be empty".into()));
        }
        if self.usage.is_empty() {
            return Err(AppError::InvalidUsage(
                "at least one usage entry is required".into(),
            ));
        }
        if !self.approx_distance_km.is_finite() || self.approx_distance_km < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "distance must be a non-negative number, got {}",
                self.approx_distance_km
            )));
        }
        if !self.approx_duration_minutes.is_finite() || self.approx_duration_minutes < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "duration must be a non-negative number, got {}",
                self.approx_duration_minutes
            )));
        }
        Ok(())
    }

    pub fn usage_display(&self) -> String {
        self.usage
            .iter()
            .map(UsageEntry::display)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
