use crate::core::calculator::gaps::GapPolicy;
use crate::core::calculator::timeline::{Timeline, build_timeline};
use crate::errors::AppResult;
use crate::source::ScheduleSource;

pub struct Core;

impl Core {
    /// Fetch the schedule for `user_id` and turn it into a day-grouped
    /// timeline of available windows and gaps.
    pub fn build_schedule(
        source: &dyn ScheduleSource,
        user_id: &str,
        policy: GapPolicy,
    ) -> AppResult<Timeline> {
        let windows = source.fetch(user_id)?;
        tracing::debug!(
            source = source.name(),
            user_id,
            windows = windows.len(),
            "schedule fetched"
        );

        build_timeline(&windows, policy)
    }
}
