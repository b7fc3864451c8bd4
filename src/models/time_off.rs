use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Day, EmployeeId, Week};

/// A time-off request for one employee in one week. An employee may have
/// several requests for the same week; their day lists are unioned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeOffRequest {
    pub employee_id: EmployeeId,
    pub week: Week,
    pub days: Vec<Day>,
}
