use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type EmployeeId = u32;

/// Employee record as served by the constraints service. Only the id is
/// relevant to scheduling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    pub id: EmployeeId,
}
