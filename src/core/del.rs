use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_commute, load_commute};
use crate::errors::{AppError, AppResult};
use crate::models::commute::Commute;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a commute by id and return what was removed.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Commute> {
        let commute = load_commute(pool, id)?.ok_or(AppError::CommuteNotFound(id))?;

        if delete_commute(pool, id)? == 0 {
            return Err(AppError::CommuteNotFound(id));
        }

        if let Err(e) = audit(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Deleted commute '{}'", commute.name),
        ) {
            tracing::warn!(error = %e, "failed to write audit log");
        }

        Ok(commute)
    }
}
