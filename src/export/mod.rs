// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::WindowExport;

use crate::core::calculator::timeline::Timeline;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write the merged timeline to `file`.
pub fn export_timeline(
    timeline: &Timeline,
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);

    if path.is_dir() {
        return Err(AppError::Export(format!("{file} is a directory")));
    }

    fs_utils::ensure_writable(path, force)?;

    let rows = model::timeline_to_rows(timeline);
    if rows.is_empty() {
        warning("No windows to export.");
        return Ok(());
    }

    match format {
        ExportFormat::Csv => json_csv::export_csv(&rows, path),
        ExportFormat::Json => json_csv::export_json(&rows, path),
    }
}
