use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::EmployeeId;

/// Day of the week, 1 through 7.
pub type Day = u8;

/// ISO week number.
pub type Week = u32;

/// The days one employee works in one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Assignment {
    pub employee_id: EmployeeId,
    #[serde(rename = "schedule")]
    pub days: Vec<Day>,
}

/// All assignments for one week of the planning period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeeklySchedule {
    pub week: Week,
    #[serde(rename = "schedules")]
    pub assignments: Vec<Assignment>,
}

/// One weekly schedule per week of the planning period, in configured order.
pub type MonthlySchedule = Vec<WeeklySchedule>;

/// Per-employee view of a monthly schedule; weeks without assigned days are
/// omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeWeek {
    pub week: Week,
    #[serde(rename = "schedules")]
    pub days: Vec<Day>,
}
