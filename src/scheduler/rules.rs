use crate::models::{
    EmployeeId, ShiftRule, EMPLOYEES_PER_SHIFT_RULE_ID, MAX_SHIFT_RULE_ID, MIN_SHIFT_RULE_ID,
};

pub const DEFAULT_MIN_SHIFTS: u32 = 0;
pub const DEFAULT_MAX_SHIFTS: u32 = 7;

/// Effective shift-count bounds for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftBounds {
    pub min_shifts: u32,
    pub max_shifts: u32,
}

/// Resolves the min/max shift counts that apply to an employee. A personal
/// rule wins over the corporate default; a missing rule is normal and falls
/// back to the fixed defaults.
pub fn resolve(employee_id: EmployeeId, rules: &[ShiftRule]) -> ShiftBounds {
    ShiftBounds {
        min_shifts: find_rule(MIN_SHIFT_RULE_ID, rules, employee_id)
            .map_or(DEFAULT_MIN_SHIFTS, |rule| rule.value),
        max_shifts: find_rule(MAX_SHIFT_RULE_ID, rules, employee_id)
            .map_or(DEFAULT_MAX_SHIFTS, |rule| rule.value),
    }
}

/// Required headcount per shift-day, from the corporate employees-per-shift
/// rule. Defaults to 1 when the rule is absent.
pub fn employees_per_shift(rules: &[ShiftRule]) -> u32 {
    rules
        .iter()
        .find(|rule| rule.rule_id == EMPLOYEES_PER_SHIFT_RULE_ID && rule.employee_id.is_none())
        .map_or(1, |rule| rule.value)
}

fn find_rule(rule_id: u32, rules: &[ShiftRule], employee_id: EmployeeId) -> Option<&ShiftRule> {
    rules
        .iter()
        .find(|rule| rule.rule_id == rule_id && rule.employee_id == Some(employee_id))
        .or_else(|| {
            rules
                .iter()
                .find(|rule| rule.rule_id == rule_id && rule.employee_id.is_none())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corp(rule_id: u32, value: u32) -> ShiftRule {
        ShiftRule {
            rule_id,
            employee_id: None,
            value,
        }
    }

    fn personal(rule_id: u32, employee_id: EmployeeId, value: u32) -> ShiftRule {
        ShiftRule {
            rule_id,
            employee_id: Some(employee_id),
            value,
        }
    }

    #[test]
    fn personal_rule_wins_over_corporate_default() {
        let rules = vec![
            corp(MAX_SHIFT_RULE_ID, 5),
            personal(MAX_SHIFT_RULE_ID, 13, 3),
            corp(MIN_SHIFT_RULE_ID, 1),
        ];

        let bounds = resolve(13, &rules);
        assert_eq!(bounds.max_shifts, 3);
        assert_eq!(bounds.min_shifts, 1);
    }

    #[test]
    fn corporate_default_applies_when_no_personal_rule() {
        let rules = vec![personal(MAX_SHIFT_RULE_ID, 13, 3), corp(MAX_SHIFT_RULE_ID, 5)];

        let bounds = resolve(7, &rules);
        assert_eq!(bounds.max_shifts, 5);
    }

    #[test]
    fn another_employees_personal_rule_is_never_borrowed() {
        // Only a personal rule for employee 13 exists; employee 7 falls back
        // to the fixed default, not to 13's override.
        let rules = vec![personal(MAX_SHIFT_RULE_ID, 13, 3)];

        let bounds = resolve(7, &rules);
        assert_eq!(bounds.max_shifts, DEFAULT_MAX_SHIFTS);
    }

    #[test]
    fn missing_rules_resolve_to_defaults() {
        let bounds = resolve(42, &[]);
        assert_eq!(bounds.min_shifts, DEFAULT_MIN_SHIFTS);
        assert_eq!(bounds.max_shifts, DEFAULT_MAX_SHIFTS);
    }

    #[test]
    fn headcount_comes_from_the_corporate_rule() {
        let rules = vec![corp(EMPLOYEES_PER_SHIFT_RULE_ID, 2)];
        assert_eq!(employees_per_shift(&rules), 2);
    }

    #[test]
    fn headcount_defaults_to_one_without_a_rule() {
        assert_eq!(employees_per_shift(&[]), 1);
    }
}
