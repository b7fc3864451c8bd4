pub mod employee;
pub mod rule;
pub mod schedule;
pub mod time_off;

pub use employee::{Employee, EmployeeId};
pub use rule::{ShiftRule, EMPLOYEES_PER_SHIFT_RULE_ID, MAX_SHIFT_RULE_ID, MIN_SHIFT_RULE_ID};
pub use schedule::{Assignment, Day, EmployeeWeek, MonthlySchedule, Week, WeeklySchedule};
pub use time_off::TimeOffRequest;
