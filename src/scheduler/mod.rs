pub mod allocator;
pub mod availability;
pub mod month;
pub mod rules;
pub mod week;

use crate::models::{Day, Week};

/// Canonical day domain for one week.
pub const WEEK_DAYS: [Day; 7] = [1, 2, 3, 4, 5, 6, 7];

/// ISO weeks covered by the planning period unless overridden in config.
pub const DEFAULT_PLANNING_WEEKS: [Week; 4] = [23, 24, 25, 26];

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Demand was still unmet after both the primary and the forced pass.
    #[error("cannot satisfy scheduling constraints for week {week}")]
    Unsatisfiable { week: Week },
}
