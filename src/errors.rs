//! Unified application error type.
//! All modules (core, db, source, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Schedule / timeline
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed interval: end {end} is before start {start}")]
    MalformedInterval { start: String, end: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid day of week: {0}")]
    InvalidDay(String),

    #[error("Invalid traffic level: {0}")]
    InvalidTraffic(String),

    #[error("Invalid usage entry: {0}")]
    InvalidUsage(String),

    #[error("Invalid schedule source: {0}")]
    InvalidSource(String),

    // ---------------------------
    // Commutes
    // ---------------------------
    #[error("No commute found with id {0}")]
    CommuteNotFound(i64),

    // ---------------------------
    // Upstream fetch
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Couldn't complete request: {0}")]
    Fetch(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
