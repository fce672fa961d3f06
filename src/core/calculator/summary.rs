use crate::core::calculator::timeline::{DayTimeline, Timeline};
use crate::models::charging_window::WindowKind;
use crate::models::day_summary::DaySummary;

pub fn summarize_day(day: &DayTimeline) -> DaySummary {
    let mut summary = DaySummary {
        date: day.date,
        ..Default::default()
    };

    for w in &day.windows {
        match w.kind() {
            WindowKind::Available { emissions_saved } => {
                summary.available_windows += 1;
                summary.available_minutes += w.duration_minutes();
                summary.emissions_saved += emissions_saved;
            }
            WindowKind::Gap => {
                summary.gap_windows += 1;
                summary.gap_minutes += w.duration_minutes();
            }
        }
    }

    summary
}

pub fn summarize(timeline: &Timeline) -> Vec<DaySummary> {
    timeline.days.iter().map(summarize_day).collect()
}
