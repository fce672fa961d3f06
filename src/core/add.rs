use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_commute;
use crate::errors::{AppError, AppResult};
use crate::models::commute::{Commute, UsageEntry};
use crate::models::traffic::TrafficLevel;
use chrono::Local;

/// Raw values collected by the `add` command.
#[derive(Debug, Clone)]
pub struct NewCommute {
    pub user_id: String,
    pub name: String,
    pub round_trip: bool,
    pub usage: Vec<String>,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub traffic: String,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Parse and validate a commute without touching the database.
    pub fn build(input: &NewCommute) -> AppResult<Commute> {
        let traffic = TrafficLevel::from_code(&input.traffic)
            .ok_or_else(|| AppError::InvalidTraffic(input.traffic.clone()))?;

        let mut usage = input
            .usage
            .iter()
            .map(|u| UsageEntry::parse(u))
            .collect::<AppResult<Vec<_>>>()?;
        usage.sort_by_key(|u| (u.day.index(), u.start_time));

        let commute = Commute {
            id: 0,
            user_id: input.user_id.trim().to_string(),
            name: input.name.trim().to_string(),
            is_round_trip: input.round_trip,
            usage,
            approx_distance_km: input.distance_km,
            approx_duration_minutes: input.duration_minutes,
            traffic,
            created_at: Local::now().to_rfc3339(),
        };

        commute.validate()?;
        Ok(commute)
    }

    /// Store the commute and return it with its new id.
    pub fn apply(pool: &mut DbPool, input: &NewCommute) -> AppResult<Commute> {
        let mut commute = Self::build(input)?;
        commute.id = insert_commute(pool, &commute)?;

        if let Err(e) = audit(
            &pool.conn,
            "add",
            &commute.id.to_string(),
            &format!("Added commute '{}' for {}", commute.name, commute.user_id),
        ) {
            tracing::warn!(error = %e, "failed to write audit log");
        }

        Ok(commute)
    }
}
