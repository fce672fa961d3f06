// src/export/model.rs

use crate::core::calculator::timeline::Timeline;
use crate::utils::time::format_timestamp;
use serde::Serialize;

/// Flat row for exporting one timeline window.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WindowExport {
    pub day: String,
    pub start: String,
    pub end: String,
    pub kind: String,
    pub emissions: Option<f64>,
}

pub(crate) fn timeline_to_rows(timeline: &Timeline) -> Vec<WindowExport> {
    timeline
        .days
        .iter()
        .flat_map(|day| {
            let key = day.key();
            day.windows.iter().map(move |w| WindowExport {
                day: key.clone(),
                start: format_timestamp(&w.start()),
                end: format_timestamp(&w.end()),
                kind: w.kind().as_str().to_string(),
                emissions: w.emissions(),
            })
        })
        .collect()
}
