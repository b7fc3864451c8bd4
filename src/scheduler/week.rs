use crate::models::{Assignment, Day, EmployeeId, ShiftRule, TimeOffRequest, Week, WeeklySchedule};
use crate::scheduler::allocator::{self, AllocationOutcome, EmployeeAvailability};
use crate::scheduler::{availability, rules, ScheduleError, WEEK_DAYS};

/// Builds the schedule for one week. `time_off` must already be filtered to
/// this week. Fails only when demand is still unmet after the forced pass.
pub fn build_week(
    week: Week,
    employee_ids: &[EmployeeId],
    rules: &[ShiftRule],
    time_off: &[TimeOffRequest],
) -> Result<WeeklySchedule, ScheduleError> {
    let mut employees: Vec<EmployeeAvailability> = employee_ids
        .iter()
        .map(|&employee_id| {
            // Bounds are resolved per employee but not yet enforced during
            // allocation; only time off narrows availability today.
            // TODO: clamp each assignment to max_shifts.
            let _bounds = rules::resolve(employee_id, rules);

            EmployeeAvailability {
                employee_id,
                available_days: availability::available_days(&time_off_days(
                    employee_id,
                    time_off,
                )),
            }
        })
        .collect();

    let headcount = rules::employees_per_shift(rules);
    let demand: Vec<Vec<Day>> = (0..headcount).map(|_| WEEK_DAYS.to_vec()).collect();

    allocator::sort_by_flexibility(&mut employees);
    let primary = allocator::allocate(demand, &employees);

    if primary.demand_met() {
        return Ok(WeeklySchedule {
            week,
            assignments: primary.assignments,
        });
    }

    tracing::warn!(week, "primary pass left demand unmet, force-scheduling over time off");

    let forced = force_schedule(employee_ids, &primary);
    if !forced.demand_met() {
        return Err(ScheduleError::Unsatisfiable { week });
    }

    Ok(WeeklySchedule {
        week,
        assignments: merge_assignments(primary.assignments, forced.assignments),
    })
}

/// Last-resort pass: each employee's availability becomes the full week minus
/// whatever the primary pass already gave them. Time off is deliberately
/// ignored here.
fn force_schedule(employee_ids: &[EmployeeId], primary: &AllocationOutcome) -> AllocationOutcome {
    let mut employees: Vec<EmployeeAvailability> = employee_ids
        .iter()
        .map(|&employee_id| {
            let assigned = primary
                .assignments
                .iter()
                .find(|a| a.employee_id == employee_id)
                .map_or(&[] as &[Day], |a| a.days.as_slice());

            EmployeeAvailability {
                employee_id,
                available_days: WEEK_DAYS
                    .iter()
                    .copied()
                    .filter(|day| !assigned.contains(day))
                    .collect(),
            }
        })
        .collect();

    allocator::sort_by_flexibility(&mut employees);
    allocator::allocate(primary.remaining_demand.clone(), &employees)
}

/// Folds primary and forced assignments into one entry per employee, primary
/// days first. First-appearance order is kept.
fn merge_assignments(primary: Vec<Assignment>, forced: Vec<Assignment>) -> Vec<Assignment> {
    let mut merged: Vec<Assignment> = Vec::new();
    for assignment in primary.into_iter().chain(forced) {
        match merged
            .iter_mut()
            .find(|a| a.employee_id == assignment.employee_id)
        {
            Some(existing) => existing.days.extend(assignment.days),
            None => merged.push(assignment),
        }
    }
    merged
}

/// Union (by concatenation) of the employee's time-off days this week.
fn time_off_days(employee_id: EmployeeId, time_off: &[TimeOffRequest]) -> Vec<Day> {
    time_off
        .iter()
        .filter(|request| request.employee_id == employee_id)
        .flat_map(|request| request.days.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EMPLOYEES_PER_SHIFT_RULE_ID;

    fn headcount_rule(value: u32) -> ShiftRule {
        ShiftRule {
            rule_id: EMPLOYEES_PER_SHIFT_RULE_ID,
            employee_id: None,
            value,
        }
    }

    fn time_off(employee_id: EmployeeId, week: Week, days: &[Day]) -> TimeOffRequest {
        TimeOffRequest {
            employee_id,
            week,
            days: days.to_vec(),
        }
    }

    #[test]
    fn a_week_without_time_off_is_covered_by_the_first_employees() {
        let schedule = build_week(23, &[1, 2, 3], &[headcount_rule(2)], &[]).unwrap();

        assert_eq!(schedule.week, 23);
        assert_eq!(schedule.assignments.len(), 2);
        for assignment in &schedule.assignments {
            assert_eq!(assignment.days, WEEK_DAYS.to_vec());
        }
    }

    #[test]
    fn time_off_is_respected_when_cover_exists() {
        let requests = vec![time_off(1, 23, &[6, 7])];
        let schedule = build_week(23, &[1, 2], &[headcount_rule(1)], &requests).unwrap();

        // Employee 2 is more flexible, goes first, and takes the whole week;
        // employee 1 is never reached.
        assert_eq!(schedule.assignments.len(), 1);
        assert_eq!(schedule.assignments[0].employee_id, 2);
        assert_eq!(schedule.assignments[0].days, WEEK_DAYS.to_vec());
    }

    #[test]
    fn several_requests_for_one_employee_are_unioned() {
        let requests = vec![time_off(1, 23, &[1, 2]), time_off(1, 23, &[6, 7])];
        let schedule = build_week(23, &[1], &[headcount_rule(1)], &requests);

        // 1 works 3,4,5 in the primary pass and is forced back onto the rest.
        let schedule = schedule.unwrap();
        assert_eq!(schedule.assignments.len(), 1);
        assert_eq!(schedule.assignments[0].days, vec![3, 4, 5, 1, 2, 6, 7]);
    }

    #[test]
    fn forced_pass_overrides_time_off_as_a_last_resort() {
        // The only employee asked the whole week off; the week still gets
        // covered, preferences notwithstanding.
        let requests = vec![time_off(1, 23, &WEEK_DAYS)];
        let schedule = build_week(23, &[1], &[headcount_rule(1)], &requests).unwrap();

        assert_eq!(schedule.assignments.len(), 1);
        assert_eq!(schedule.assignments[0].employee_id, 1);
        assert_eq!(schedule.assignments[0].days, WEEK_DAYS.to_vec());
    }

    #[test]
    fn demand_beyond_total_capacity_is_unsatisfiable() {
        // Two slots, one employee: even forced scheduling cannot put one
        // person on two slots the same day.
        let err = build_week(24, &[1], &[headcount_rule(2)], &[]).unwrap_err();
        assert!(matches!(err, ScheduleError::Unsatisfiable { week: 24 }));
    }

    #[test]
    fn forced_days_are_appended_after_primary_days() {
        let requests = vec![time_off(1, 23, &[1, 2, 3]), time_off(2, 23, &[5, 6, 7])];
        let schedule = build_week(23, &[1, 2], &[headcount_rule(2)], &requests).unwrap();

        for assignment in &schedule.assignments {
            // Each employee ends up with all seven days, primary ones first,
            // and no day twice.
            let mut days = assignment.days.clone();
            days.sort_unstable();
            assert_eq!(days, WEEK_DAYS.to_vec());
        }
        assert_eq!(schedule.assignments.len(), 2);
    }

    #[test]
    fn merge_folds_both_passes_into_one_entry_per_employee() {
        let primary = vec![
            Assignment {
                employee_id: 13,
                days: vec![1, 2],
            },
            Assignment {
                employee_id: 5,
                days: vec![3],
            },
        ];
        let forced = vec![
            Assignment {
                employee_id: 5,
                days: vec![4, 5],
            },
            Assignment {
                employee_id: 9,
                days: vec![6],
            },
        ];

        let merged = merge_assignments(primary, forced);
        assert_eq!(
            merged,
            vec![
                Assignment {
                    employee_id: 13,
                    days: vec![1, 2]
                },
                Assignment {
                    employee_id: 5,
                    days: vec![3, 4, 5]
                },
                Assignment {
                    employee_id: 9,
                    days: vec![6]
                },
            ]
        );
    }
}
