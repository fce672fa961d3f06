use super::ScheduleSource;
use crate::errors::{AppError, AppResult};
use crate::models::charging_window::{ChargingWindow, RawSchedule};
use reqwest::blocking::Client;
use std::time::Duration;

/// Schedule served by the backend at `GET {base_url}/schedule?user_id=...`.
/// A failed request is reported once; there is no retry.
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn schedule_url(&self) -> String {
        format!("{}/schedule", self.base_url.trim_end_matches('/'))
    }
}

impl ScheduleSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch(&self, user_id: &str) -> AppResult<Vec<ChargingWindow>> {
        if user_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "a user id is required to request a schedule".into(),
            ));
        }

        let url = self.schedule_url();
        tracing::info!(%url, user_id, "requesting schedule");

        let response = self
            .client
            .get(&url)
            .query(&[("user_id", user_id)])
            .header("Content-Type", "application/json")
            .send()
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "schedule request failed");
            return Err(AppError::Fetch(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .map_err(|e| AppError::Fetch(format!("unreadable response body: {e}")))?;
        let raw = RawSchedule::from_json(&body).map_err(|e| {
            tracing::warn!(error = %e, "schedule response is not a valid schedule");
            AppError::Fetch(format!("invalid schedule response: {e}"))
        })?;

        raw.into_windows()
    }
}
