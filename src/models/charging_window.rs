use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// What a window on the timeline represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WindowKind {
    /// Charging is possible and saves `emissions_saved` kg of CO2.
    Available {
        #[serde(rename = "emissionsSaved")]
        emissions_saved: f64,
    },
    /// No charging available.
    Gap,
}

impl WindowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowKind::Available { .. } => "available",
            WindowKind::Gap => "gap",
        }
    }
}

/// A closed time interval on the local wall clock.
///
/// Fields are private: every constructor checks `end >= start`, so a window
/// that exists is always well formed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingWindow {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    #[serde(flatten)]
    kind: WindowKind,
}

impl ChargingWindow {
    /// Window with a recorded emissions saving.
    pub fn available(start: NaiveDateTime, end: NaiveDateTime, emissions: f64) -> AppResult<Self> {
        if !emissions.is_finite() || emissions < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "emissions must be a non-negative number, got {emissions}"
            )));
        }
        Self::new(
            start,
            end,
            WindowKind::Available {
                emissions_saved: emissions,
            },
        )
    }

    pub fn gap(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<Self> {
        Self::new(start, end, WindowKind::Gap)
    }

    fn new(start: NaiveDateTime, end: NaiveDateTime, kind: WindowKind) -> AppResult<Self> {
        if end < start {
            return Err(AppError::MalformedInterval {
                start: format_timestamp(&start),
                end: format_timestamp(&end),
            });
        }
        Ok(Self {
            start_time: start,
            end_time: end,
            kind,
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Emissions saved, `None` for gaps.
    pub fn emissions(&self) -> Option<f64> {
        match self.kind {
            WindowKind::Available { emissions_saved } => Some(emissions_saved),
            WindowKind::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self.kind, WindowKind::Gap)
    }

    pub fn is_available(&self) -> bool {
        !self.is_gap()
    }

    /// Calendar day the window belongs to (the day of its start).
    pub fn day(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Wire record as served by the schedule API.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChargingWindow {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub emissions: Option<f64>,
}

impl TryFrom<RawChargingWindow> for ChargingWindow {
    type Error = AppError;

    fn try_from(raw: RawChargingWindow) -> AppResult<Self> {
        let start = parse_timestamp(&raw.start_time)?;
        let end = parse_timestamp(&raw.end_time)?;

        match raw.emissions {
            Some(e) => ChargingWindow::available(start, end, e),
            None => ChargingWindow::gap(start, end),
        }
    }
}

/// A schedule payload: either a bare array or the
/// `{ "availableChargingWindows": [...] }` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSchedule {
    List(Vec<RawChargingWindow>),
    Wrapped {
        #[serde(rename = "availableChargingWindows")]
        available_charging_windows: Vec<RawChargingWindow>,
    },
}

impl RawSchedule {
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn into_windows(self) -> AppResult<Vec<ChargingWindow>> {
        let raw = match self {
            RawSchedule::List(v) => v,
            RawSchedule::Wrapped {
                available_charging_windows,
            } => available_charging_windows,
        };

        raw.into_iter().map(ChargingWindow::try_from).collect()
    }
}
