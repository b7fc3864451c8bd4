use axum::{
    extract::{Query, State},
    Json,
};
use moka::future::Cache;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use utoipa::IntoParams;

use crate::{
    models::{EmployeeId, MonthlySchedule},
    scheduler, AppError, AppResult, AppState,
};

// Computed schedule, cached with a 5-minute TTL. Constraints change rarely
// and a recompute is a single upstream round trip.
static SCHEDULE_CACHE: Lazy<Cache<&'static str, MonthlySchedule>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(300))
        .build()
});

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetShiftsQuery {
    #[serde(rename = "employeeId")]
    pub employee_id: Option<EmployeeId>,
}

/// GET /api/shifts?employeeId=
#[utoipa::path(
    get,
    path = "/api/shifts",
    params(GetShiftsQuery),
    responses(
        (status = 200, description = "Monthly schedule, or one employee's non-empty weeks when employeeId is given"),
        (status = 409, description = "Demand cannot be satisfied under current rules"),
        (status = 502, description = "Constraints service unavailable")
    ),
    tag = "shifts"
)]
pub async fn get_shifts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GetShiftsQuery>,
) -> AppResult<Json<Value>> {
    let schedule = monthly_schedule(&state).await?;

    let payload = match query.employee_id {
        Some(employee_id) => {
            let own = scheduler::month::employee_schedule(&schedule, employee_id);
            serde_json::to_value(own)
        }
        None => serde_json::to_value(schedule),
    }
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(payload))
}

/// Returns the cached schedule for the planning period, computing it from
/// freshly fetched constraints on a cache miss.
pub async fn monthly_schedule(state: &AppState) -> AppResult<MonthlySchedule> {
    if let Some(cached) = SCHEDULE_CACHE.get(&"month").await {
        return Ok(cached);
    }

    let constraints = state.constraints.fetch_all().await?;
    let employee_ids: Vec<EmployeeId> = constraints.employees.iter().map(|e| e.id).collect();

    let schedule = scheduler::month::build_month(
        &state.config.planning_weeks,
        &employee_ids,
        &constraints.rules,
        &constraints.time_off,
    )?;

    SCHEDULE_CACHE.insert("month", schedule.clone()).await;

    Ok(schedule)
}

/// Precomputes the schedule at startup so the first request does not pay for
/// the upstream round trip. A failure here is not fatal; the next request
/// simply recomputes.
pub async fn warm_schedule_cache(state: Arc<AppState>) {
    match monthly_schedule(&state).await {
        Ok(schedule) => {
            tracing::info!(weeks = schedule.len(), "monthly schedule precomputed")
        }
        Err(e) => tracing::warn!(error = %e, "could not precompute monthly schedule"),
    }
}
