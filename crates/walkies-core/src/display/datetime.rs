//! Date and time formatting for display.
//!
//! Dates are shown as `Wed, Sep 17` and times on a 12-hour clock
//! (`2:30 PM`). Parsing helpers are lenient and fall back to defaults rather
//! than fail, since they feed labels, not data.

use std::fmt;

use jiff::civil::{Date, Time};

/// Short weekday labels indexed Sunday-zero.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Time assumed when a time string cannot be read.
pub const FALLBACK_TIME: Time = Time::constant(9, 0, 0, 0);

/// Format a calendar date as `Wed, Sep 17`.
///
/// ```rust
/// use jiff::civil::date;
/// use walkies_core::display::format_date_display;
///
/// assert_eq!(format_date_display(date(2025, 9, 17)), "Wed, Sep 17");
/// assert_eq!(format_date_display(date(2025, 10, 5)), "Sun, Oct 5");
/// ```
pub fn format_date_display(date: Date) -> String {
    date.strftime("%a, %b %-d").to_string()
}

/// Format an ISO `YYYY-MM-DD` string as [`format_date_display`] does.
///
/// Empty input gives an empty string; anything that is not a valid date is
/// returned unchanged.
pub fn format_date_str(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match value.parse::<Date>() {
        Ok(date) => format_date_display(date),
        Err(_) => value.to_string(),
    }
}

/// Format a wall-clock time as `2:30 PM`.
///
/// ```rust
/// use jiff::civil::time;
/// use walkies_core::display::format_time_display;
///
/// assert_eq!(format_time_display(time(14, 30, 0, 0)), "2:30 PM");
/// assert_eq!(format_time_display(time(0, 5, 0, 0)), "12:05 AM");
/// ```
pub fn format_time_display(time: Time) -> String {
    time.strftime("%-I:%M %p").to_string()
}

/// Read an `HH:MM` string, substituting 9 for an unreadable hour and 0 for an
/// unreadable minute.
pub fn parse_time_or_default(value: &str) -> Time {
    let mut parts = value.trim().splitn(2, ':');
    let hour = parts
        .next()
        .and_then(|h| h.trim().parse::<i8>().ok())
        .filter(|h| (0..24).contains(h))
        .unwrap_or(FALLBACK_TIME.hour());
    let minute = parts
        .next()
        .and_then(|m| m.trim().parse::<i8>().ok())
        .filter(|m| (0..60).contains(m))
        .unwrap_or(0);
    Time::new(hour, minute, 0, 0).unwrap_or(FALLBACK_TIME)
}

/// Join the labels for a plan's days, e.g. `Mon, Wed, Fri`.
///
/// Days without a label are skipped. An empty day list reads
/// `No days selected`.
pub fn format_plan_days(days: &[u8], labels: &[&str]) -> String {
    if days.is_empty() {
        return "No days selected".to_string();
    }
    days.iter()
        .filter_map(|&day| labels.get(usize::from(day)).copied())
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Display` wrapper for an optional date and time pair, e.g.
/// `Wed, Sep 17 at 4:00 PM`.
pub struct WhenLabel(pub Date, pub Option<Time>);

impl fmt::Display for WhenLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date_display(self.0))?;
        if let Some(time) = self.1 {
            write!(f, " at {}", format_time_display(time))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2025-09-18"), "Thu, Sep 18");
        assert_eq!(format_date_str(""), "");
        assert_eq!(format_date_str("next tuesday"), "next tuesday");
    }

    #[test]
    fn test_parse_time_or_default() {
        assert_eq!(parse_time_or_default("16:45"), time(16, 45, 0, 0));
        assert_eq!(parse_time_or_default("7:05"), time(7, 5, 0, 0));
        assert_eq!(parse_time_or_default("xx:30"), time(9, 30, 0, 0));
        assert_eq!(parse_time_or_default("14"), time(14, 0, 0, 0));
        assert_eq!(parse_time_or_default(""), time(9, 0, 0, 0));
    }

    #[test]
    fn test_format_plan_days() {
        assert_eq!(format_plan_days(&[1, 3, 5], &DAY_LABELS), "Mon, Wed, Fri");
        assert_eq!(format_plan_days(&[], &DAY_LABELS), "No days selected");
        assert_eq!(format_plan_days(&[0, 9], &DAY_LABELS), "Sun");
    }

    #[test]
    fn test_when_label() {
        let label = WhenLabel(date(2025, 9, 16), Some(time(16, 0, 0, 0)));
        assert_eq!(label.to_string(), "Tue, Sep 16 at 4:00 PM");
        assert_eq!(WhenLabel(date(2025, 9, 11), None).to_string(), "Thu, Sep 11");
    }
}
