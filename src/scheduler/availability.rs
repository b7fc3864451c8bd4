use crate::models::Day;
use crate::scheduler::WEEK_DAYS;

/// Days of the week not covered by the employee's time-off requests, in
/// canonical 1..7 order. An empty time-off list yields the full week.
pub fn available_days(time_off_days: &[Day]) -> Vec<Day> {
    WEEK_DAYS
        .iter()
        .copied()
        .filter(|day| !time_off_days.contains(day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_week_when_no_time_off() {
        assert_eq!(available_days(&[]), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn time_off_days_are_excluded() {
        assert_eq!(available_days(&[4, 7]), vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn duplicate_time_off_days_make_no_difference() {
        // Requests are unioned upstream by concatenation, so duplicates occur.
        assert_eq!(available_days(&[4, 4, 7, 4]), vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn a_fully_booked_out_week_leaves_nothing() {
        assert_eq!(available_days(&[1, 2, 3, 4, 5, 6, 7]), Vec::<Day>::new());
    }
}
