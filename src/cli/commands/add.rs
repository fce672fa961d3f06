use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewCommute};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Add a recurring commute.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        user,
        name,
        round_trip,
        usage,
        distance,
        duration,
        traffic,
    } = cmd
    {
        let user_id = resolve_user(user, cfg)?;

        let input = NewCommute {
            user_id,
            name: name.clone(),
            round_trip: *round_trip,
            usage: usage.clone(),
            distance_km: *distance,
            duration_minutes: *duration,
            traffic: traffic.clone(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let commute = AddLogic::apply(&mut pool, &input)?;

        success(format!(
            "Commute #{} '{}' added for {} ({})",
            commute.id,
            commute.name,
            commute.user_id,
            commute.usage_display()
        ));
    }

    Ok(())
}

/// `--user` if given, else the configured default user.
pub(crate) fn resolve_user(user: &Option<String>, cfg: &Config) -> AppResult<String> {
    match user {
        Some(u) if !u.trim().is_empty() => Ok(u.trim().to_string()),
        _ if !cfg.default_user.trim().is_empty() => Ok(cfg.default_user.trim().to_string()),
        _ => Err(AppError::InvalidInput(
            "no user given: use --user or set `default_user` in the configuration".into(),
        )),
    }
}
