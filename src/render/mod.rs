//! Terminal rendering of a merged timeline.

use crate::core::calculator::summary::summarize_day;
use crate::core::calculator::timeline::{DayTimeline, Timeline};
use crate::errors::AppResult;
use crate::models::charging_window::{ChargingWindow, WindowKind};
use crate::models::day_summary::DaySummary;
use crate::utils::colors::{GREEN, GREY, RED, RESET};
use crate::utils::formatting::{bold, format_emissions};
use crate::utils::time::format_minutes;
use serde::Serialize;

/// Render options coming from config and CLI flags.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub time_format: String,
    pub show_summary: bool,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            time_format: "%H:%M".to_string(),
            show_summary: false,
            color: true,
        }
    }
}

fn paint(s: &str, color: &str, opts: &RenderOptions) -> String {
    if opts.color {
        format!("{color}{s}{RESET}")
    } else {
        s.to_string()
    }
}

/// One line for a window, classified purely by its kind.
pub fn render_window(w: &ChargingWindow, opts: &RenderOptions) -> String {
    let span = format!(
        "{} to {}",
        w.start().format(&opts.time_format),
        w.end().format(&opts.time_format)
    );

    match w.kind() {
        WindowKind::Available { emissions_saved } => paint(
            &format!(
                "  ● {span}  Emissions saved: {} kg/CO2",
                format_emissions(emissions_saved)
            ),
            GREEN,
            opts,
        ),
        WindowKind::Gap => paint(&format!("  ○ {span}  No Charging"), RED, opts),
    }
}

pub fn render_summary(s: &DaySummary, opts: &RenderOptions) -> String {
    paint(
        &format!(
            "  Σ available {} in {} window(s) | no charging {} | saved {} kg/CO2",
            format_minutes(s.available_minutes),
            s.available_windows,
            format_minutes(s.gap_minutes),
            format_emissions(s.emissions_saved)
        ),
        GREY,
        opts,
    )
}

pub fn render_day(day: &DayTimeline, opts: &RenderOptions) -> String {
    let mut out = String::new();

    let title = format!("Schedule for {}", day.key());
    out.push_str(&if opts.color { bold(&title) } else { title });
    out.push('\n');

    for w in &day.windows {
        out.push_str(&render_window(w, opts));
        out.push('\n');
    }

    if opts.show_summary {
        out.push_str(&render_summary(&summarize_day(day), opts));
        out.push('\n');
    }

    out
}

/// Full text rendering, one section per day in timeline order.
pub fn render_text(timeline: &Timeline, opts: &RenderOptions) -> String {
    timeline
        .days
        .iter()
        .map(|d| render_day(d, opts))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDay<'a> {
    day: String,
    windows: &'a [ChargingWindow],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<DaySummary>,
}

/// JSON rendering: an array of `{ day, windows[, summary] }` objects.
pub fn render_json(timeline: &Timeline, with_summary: bool) -> AppResult<String> {
    let days: Vec<JsonDay> = timeline
        .days
        .iter()
        .map(|d| JsonDay {
            day: d.key(),
            windows: &d.windows,
            summary: with_summary.then(|| summarize_day(d)),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&days)?)
}
