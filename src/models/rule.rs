use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::EmployeeId;

/// Rule-kind identifiers used by the constraints service.
pub const MAX_SHIFT_RULE_ID: u32 = 2;
pub const MIN_SHIFT_RULE_ID: u32 = 4;
pub const EMPLOYEES_PER_SHIFT_RULE_ID: u32 = 7;

/// A shift-count rule. Personal rules carry an `employee_id`; corporate
/// defaults omit it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftRule {
    pub rule_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
    pub value: u32,
}
