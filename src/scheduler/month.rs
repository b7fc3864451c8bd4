use crate::models::{
    EmployeeId, EmployeeWeek, MonthlySchedule, ShiftRule, TimeOffRequest, Week, WeeklySchedule,
};
use crate::scheduler::{week, ScheduleError};

/// Builds one weekly schedule per planning week, in the given order. The
/// whole month fails as soon as one week cannot be satisfied.
pub fn build_month(
    weeks: &[Week],
    employee_ids: &[EmployeeId],
    rules: &[ShiftRule],
    time_off: &[TimeOffRequest],
) -> Result<MonthlySchedule, ScheduleError> {
    weeks
        .iter()
        .map(|&wk| {
            let week_time_off: Vec<TimeOffRequest> = time_off
                .iter()
                .filter(|request| request.week == wk)
                .cloned()
                .collect();
            week::build_week(wk, employee_ids, rules, &week_time_off)
        })
        .collect()
}

/// One employee's weekly day lists out of a full monthly schedule. Weeks in
/// which the employee has no assigned days are omitted.
pub fn employee_schedule(schedule: &[WeeklySchedule], employee_id: EmployeeId) -> Vec<EmployeeWeek> {
    schedule
        .iter()
        .filter_map(|weekly| {
            weekly
                .assignments
                .iter()
                .find(|assignment| assignment.employee_id == employee_id)
                .filter(|assignment| !assignment.days.is_empty())
                .map(|assignment| EmployeeWeek {
                    week: weekly.week,
                    days: assignment.days.clone(),
                })
        })
        .collect()
}
