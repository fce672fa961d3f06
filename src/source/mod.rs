//! Schedule data sources.
//!
//! The schedule itself is computed elsewhere; a source only hands over the
//! available charging windows for a user. Which source is used is decided
//! once, when the command starts, through [`build_source`].

mod file;
mod http;
mod mock;

pub use file::FileSource;
pub use http::HttpSource;
pub use mock::MockSource;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::charging_window::ChargingWindow;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub trait ScheduleSource {
    /// Short label used in messages and the audit log.
    fn name(&self) -> &str;

    /// Available charging windows for `user_id`, timestamps already parsed.
    fn fetch(&self, user_id: &str) -> AppResult<Vec<ChargingWindow>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Mock,
    File,
    Http,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Mock => "mock",
            SourceKind::File => "file",
            SourceKind::Http => "http",
        }
    }
}

/// Command-line overrides of the configured source settings.
#[derive(Debug, Default, Clone)]
pub struct SourceOverrides {
    pub kind: Option<SourceKind>,
    pub file: Option<String>,
    pub url: Option<String>,
}

pub fn build_source(cfg: &Config, overrides: &SourceOverrides) -> AppResult<Box<dyn ScheduleSource>> {
    let kind = overrides.kind.unwrap_or(cfg.schedule_source);

    tracing::debug!(source = kind.as_str(), "selecting schedule source");

    match kind {
        SourceKind::Mock => Ok(Box::new(MockSource)),
        SourceKind::File => {
            let path = overrides
                .file
                .clone()
                .or_else(|| cfg.schedule_file.clone())
                .ok_or_else(|| {
                    AppError::InvalidSource(
                        "file source requires --file or `schedule_file` in the configuration".into(),
                    )
                })?;
            Ok(Box::new(FileSource::new(crate::utils::path::expand_tilde(&path))))
        }
        SourceKind::Http => {
            let url = overrides
                .url
                .clone()
                .unwrap_or_else(|| cfg.api_base_url.clone());
            if url.trim().is_empty() {
                return Err(AppError::InvalidSource(
                    "http source requires --url or `api_base_url` in the configuration".into(),
                ));
            }
            Ok(Box::new(HttpSource::new(url)?))
        }
    }
}
