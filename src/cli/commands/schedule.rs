use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::gaps::GapPolicy;
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::export_timeline;
use crate::render::{RenderOptions, render_json, render_text};
use crate::source::{SourceOverrides, build_source};
use crate::ui::messages::{info, request_failed, warning};
use crate::utils::time::is_valid_format;
use std::path::Path;

/// Fetch the schedule and print the merged timeline.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        user,
        source,
        file,
        url,
        leading_gap,
        summary,
        json,
        no_color,
        export,
        format,
        force,
    } = cmd
    {
        let overrides = SourceOverrides {
            kind: *source,
            file: file.clone(),
            url: url.clone(),
        };
        let source = build_source(cfg, &overrides)?;

        let user_id = user
            .clone()
            .unwrap_or_else(|| cfg.default_user.clone());

        let policy = GapPolicy::with_leading_gap(*leading_gap || cfg.leading_gap);

        let timeline = match Core::build_schedule(source.as_ref(), &user_id, policy) {
            Ok(t) => t,
            Err(e @ (AppError::Fetch(_) | AppError::Http(_))) => {
                request_failed();
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        if *json {
            println!("{}", render_json(&timeline, *summary || cfg.show_summary)?);
        } else if timeline.is_empty() {
            info("No charging windows in the schedule.");
        } else {
            let time_format = if is_valid_format(&cfg.time_format) {
                cfg.time_format.clone()
            } else {
                warning(format!(
                    "Invalid time_format '{}' in configuration, using %H:%M",
                    cfg.time_format
                ));
                "%H:%M".to_string()
            };
            let opts = RenderOptions {
                time_format,
                show_summary: *summary || cfg.show_summary,
                color: !*no_color,
            };
            print!("{}", render_text(&timeline, &opts));
        }

        if let Some(path) = export {
            export_timeline(&timeline, *format, path, *force)?;
        }

        record_audit(cfg, source.name(), &user_id, timeline.days.len());
    }

    Ok(())
}

/// Best effort: a missing or read-only database must not break viewing.
fn record_audit(cfg: &Config, source: &str, user_id: &str, days: usize) {
    if !Path::new(&cfg.database).exists() {
        return;
    }

    let result = DbPool::new(&cfg.database).and_then(|pool| {
        audit(
            &pool.conn,
            "schedule",
            source,
            &format!("Viewed {} day(s) for '{}'", days, user_id),
        )
    });

    if let Err(e) = result {
        tracing::debug!(error = %e, "schedule audit skipped");
    }
}
