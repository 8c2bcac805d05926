//! Weekly recurrence rules and occurrence generation.
//!
//! A [`RecurringPlan`] repeats on a set of weekdays from its start date on.
//! [`generate_occurrences`] turns that rule into concrete calendar dates. It is
//! a pure function of its inputs: it never looks at, or moves,
//! `last_confirmed_date`, so a date that was already confirmed keeps coming
//! back as "next" until the reference date passes it.

use jiff::{
    civil::{Date, Time},
    ToSpan,
};
use serde::{Deserialize, Serialize};

use crate::models::RecurringPlan;

/// How many occurrences list views show per plan.
pub const DEFAULT_OCCURRENCE_COUNT: usize = 3;

/// How many days forward the generator scans before giving up.
pub const SCAN_HORIZON_DAYS: usize = 365;

/// One concrete date implied by a plan's recurrence rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Occurrence {
    pub date: Date,
    pub time: Time,
}

/// Sunday-zero weekday index (0 = Sunday .. 6 = Saturday).
pub fn weekday_index(date: Date) -> u8 {
    date.weekday().to_sunday_zero_offset().unsigned_abs()
}

/// Deduplicate weekday indices, drop anything outside `0..=6` and sort.
///
/// ```rust
/// use walkies_core::schedule::normalize_days;
///
/// assert_eq!(normalize_days(&[5, 1, 1, 3]), vec![1, 3, 5]);
/// assert_eq!(normalize_days(&[-1, 8, 2]), vec![2]);
/// ```
pub fn normalize_days(days: &[i32]) -> Vec<u8> {
    let mut normalized: Vec<u8> = days
        .iter()
        .filter_map(|&day| u8::try_from(day).ok())
        .filter(|&day| day <= 6)
        .collect();
    normalized.sort_unstable();
    normalized.dedup();
    normalized
}

/// Deduplicate ids, keeping the first occurrence of each in place.
pub fn normalize_ids(ids: &[u64]) -> Vec<u64> {
    let mut seen = Vec::with_capacity(ids.len());
    for &id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// Next `count` dates on or after `max(plan.start_date, from)` whose weekday
/// is one of the plan's days.
///
/// Returns an empty vector when the plan has no days. The scan covers at most
/// [`SCAN_HORIZON_DAYS`] days, so fewer than `count` dates may come back.
///
/// ```rust
/// use jiff::civil::date;
/// use walkies_core::{models::RecurringPlan, schedule::generate_occurrences};
///
/// # let plan = RecurringPlan {
/// #     id: 1,
/// #     label: String::new(),
/// #     dog_ids: vec![1],
/// #     walker_id: Some(1),
/// #     days_of_week: vec![1, 3, 5],
/// #     time: RecurringPlan::DEFAULT_TIME,
/// #     duration: 30,
/// #     start_date: date(2025, 9, 18),
/// #     address: String::new(),
/// #     notes: String::new(),
/// #     status: Default::default(),
/// #     last_confirmed_date: None,
/// # };
/// // Mon/Wed/Fri starting Thursday 2025-09-18
/// let next = generate_occurrences(&plan, 3, date(2025, 9, 1));
/// let dates: Vec<_> = next.iter().map(|o| o.date).collect();
/// assert_eq!(dates, vec![date(2025, 9, 19), date(2025, 9, 22), date(2025, 9, 24)]);
/// ```
pub fn generate_occurrences(plan: &RecurringPlan, count: usize, from: Date) -> Vec<Occurrence> {
    if plan.days_of_week.is_empty() || count == 0 {
        return Vec::new();
    }

    let cursor = plan.start_date.max(from);
    cursor
        .series(1.day())
        .take(SCAN_HORIZON_DAYS)
        .filter(|day| *day >= plan.start_date && plan.days_of_week.contains(&weekday_index(*day)))
        .take(count)
        .map(|date| Occurrence {
            date,
            time: plan.time,
        })
        .collect()
}

/// The first occurrence on or after `from`, if any within the horizon.
pub fn next_occurrence(plan: &RecurringPlan, from: Date) -> Option<Occurrence> {
    generate_occurrences(plan, 1, from).into_iter().next()
}

/// Price of one plan occurrence with the given walker.
///
/// Thirty minutes cost the walker's base price; an hour is discounted to 1.6x
/// rather than doubled. Other lengths scale linearly. Rounded to cents.
///
/// ```rust
/// use walkies_core::schedule::occurrence_price;
///
/// assert_eq!(occurrence_price(25.0, 30), 25.0);
/// assert_eq!(occurrence_price(25.0, 60), 40.0);
/// assert_eq!(occurrence_price(22.0, 45), 33.0);
/// ```
pub fn occurrence_price(walker_price: f64, duration: u32) -> f64 {
    let multiplier = if duration == 60 {
        1.6
    } else {
        f64::from(duration) / 30.0
    };
    (walker_price * multiplier * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::PlanStatus;

    fn plan(days: Vec<u8>, start_date: Date) -> RecurringPlan {
        RecurringPlan {
            id: 1,
            label: "Morning crew".to_string(),
            dog_ids: vec![1],
            walker_id: Some(1),
            days_of_week: days,
            time: Time::constant(7, 30, 0, 0),
            duration: 30,
            start_date,
            address: "123 Bark Ave".to_string(),
            notes: String::new(),
            status: PlanStatus::Active,
            last_confirmed_date: None,
        }
    }

    #[test]
    fn test_weekday_index_is_sunday_zero() {
        // 2025-09-21 is a Sunday
        assert_eq!(weekday_index(date(2025, 9, 21)), 0);
        assert_eq!(weekday_index(date(2025, 9, 22)), 1);
        assert_eq!(weekday_index(date(2025, 9, 27)), 6);
    }

    #[test]
    fn test_empty_days_yield_nothing() {
        let plan = plan(vec![], date(2025, 9, 1));
        assert!(generate_occurrences(&plan, 5, date(2025, 9, 1)).is_empty());
        assert!(next_occurrence(&plan, date(2025, 9, 1)).is_none());
    }

    #[test]
    fn test_occurrences_respect_rule() {
        let start = date(2025, 9, 18);
        let plan = plan(vec![1, 3, 5], start);
        let occurrences = generate_occurrences(&plan, 10, date(2025, 9, 1));

        assert_eq!(occurrences.len(), 10);
        for pair in occurrences.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        for occurrence in &occurrences {
            assert!(occurrence.date >= start);
            assert!(plan.days_of_week.contains(&weekday_index(occurrence.date)));
            assert_eq!(occurrence.time, plan.time);
        }
    }

    #[test]
    fn test_reference_date_after_start() {
        let plan = plan(vec![2], date(2025, 1, 1));
        // Tuesday 2025-09-23 itself qualifies
        let next = next_occurrence(&plan, date(2025, 9, 23)).expect("occurrence");
        assert_eq!(next.date, date(2025, 9, 23));

        let next = next_occurrence(&plan, date(2025, 9, 24)).expect("occurrence");
        assert_eq!(next.date, date(2025, 9, 30));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let plan = plan(vec![0, 6], date(2025, 9, 18));
        let from = date(2025, 10, 2);
        assert_eq!(
            generate_occurrences(&plan, 4, from),
            generate_occurrences(&plan, 4, from)
        );
    }

    #[test]
    fn test_confirmed_date_does_not_advance_generation() {
        let mut plan = plan(vec![5], date(2025, 9, 18));
        let before = next_occurrence(&plan, date(2025, 9, 18));
        plan.last_confirmed_date = before.map(|o| o.date);
        assert_eq!(next_occurrence(&plan, date(2025, 9, 18)), before);
    }

    #[test]
    fn test_count_zero_is_empty() {
        let plan = plan(vec![1], date(2025, 9, 18));
        assert!(generate_occurrences(&plan, 0, date(2025, 9, 18)).is_empty());
    }

    #[test]
    fn test_horizon_caps_results() {
        // One weekday a week cannot fill 100 slots within a year
        let plan = plan(vec![3], date(2025, 1, 1));
        let occurrences = generate_occurrences(&plan, 100, date(2025, 1, 1));
        assert!(occurrences.len() <= 53);
        assert!(occurrences.len() >= 52);
    }

    #[test]
    fn test_normalize_ids_keeps_first_seen_order() {
        assert_eq!(normalize_ids(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }
}
