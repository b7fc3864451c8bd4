use crate::models::{Assignment, Day, EmployeeId};

/// One employee's remaining options within a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeAvailability {
    pub employee_id: EmployeeId,
    pub available_days: Vec<Day>,
}

/// Result of one allocation pass. Unmet demand is reported structurally in
/// `remaining_demand`; the caller decides whether that is a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome {
    pub remaining_demand: Vec<Vec<Day>>,
    pub assignments: Vec<Assignment>,
}

impl AllocationOutcome {
    /// Slots drain strictly left to right, so the final slot is the last one
    /// to empty; checking it alone is enough.
    pub fn demand_met(&self) -> bool {
        self.remaining_demand
            .last()
            .map_or(true, |slot| slot.is_empty())
    }
}

/// Orders employees so that those with the most open days go first and soak
/// up hard-to-fill days before the constrained ones are reached. Stable, so
/// ties keep their input order.
pub fn sort_by_flexibility(employees: &mut [EmployeeAvailability]) {
    employees.sort_by(|a, b| b.available_days.len().cmp(&a.available_days.len()));
}

/// Greedy first-fit pass over the demand matrix. Each employee in turn covers
/// whatever still-open days they can, one slot at a time; a day taken in one
/// slot leaves the employee's pool, so nobody is double-booked across slots
/// within the same week. Employees reached after demand is met are skipped
/// and get no assignment entry at all.
pub fn allocate(mut demand: Vec<Vec<Day>>, employees: &[EmployeeAvailability]) -> AllocationOutcome {
    let mut assignments = Vec::new();

    for employee in employees {
        if demand.last().map_or(true, |slot| slot.is_empty()) {
            break;
        }

        let mut pool = employee.available_days.clone();
        for slot in demand.iter_mut() {
            let taken = intersection(slot, &pool);
            pool.retain(|day| !taken.contains(day));
            slot.retain(|day| !taken.contains(day));
        }

        // Days consumed across all slots, in the employee's original
        // availability order.
        assignments.push(Assignment {
            employee_id: employee.employee_id,
            days: difference(&employee.available_days, &pool),
        });
    }

    AllocationOutcome {
        remaining_demand: demand,
        assignments,
    }
}

fn intersection(a: &[Day], b: &[Day]) -> Vec<Day> {
    a.iter().copied().filter(|day| b.contains(day)).collect()
}

fn difference(a: &[Day], b: &[Day]) -> Vec<Day> {
    a.iter().copied().filter(|day| !b.contains(day)).collect()
}
