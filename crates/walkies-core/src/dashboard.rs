//! Home screen queries over walk history.
//!
//! Everything here is a pure function of a history slice and, where the
//! answer depends on the calendar, a reference date.

use jiff::{
    civil::{Date, Time},
    ToSpan,
};
use serde::Serialize;

use crate::{
    display::datetime::format_time_display,
    models::{WalkRecord, WalkStatus},
    schedule::weekday_index,
};

/// Sort key for a walk's start; walks without a time sort at midnight.
fn starts_at(walk: &WalkRecord) -> (Date, Time) {
    (walk.date, walk.time.unwrap_or(Time::midnight()))
}

fn status_priority(status: WalkStatus) -> u8 {
    match status {
        WalkStatus::InProgress => 0,
        WalkStatus::Upcoming => 1,
        WalkStatus::Completed => 2,
    }
}

/// The walk to feature: any walk in progress, otherwise the earliest
/// upcoming one.
pub fn upcoming_walk(history: &[WalkRecord]) -> Option<&WalkRecord> {
    history
        .iter()
        .filter(|walk| walk.status.is_scheduled())
        .min_by(|a, b| {
            status_priority(a.status)
                .cmp(&status_priority(b.status))
                .then_with(|| starts_at(a).cmp(&starts_at(b)))
        })
}

/// Scheduled walks other than the featured one, soonest first.
pub fn other_upcoming(history: &[WalkRecord], featured_id: Option<u64>) -> Vec<&WalkRecord> {
    let mut walks: Vec<&WalkRecord> = history
        .iter()
        .filter(|walk| walk.status.is_scheduled() && Some(walk.id) != featured_id)
        .collect();
    walks.sort_by_key(|walk| starts_at(walk));
    walks
}

/// Finished walks, most recent first.
pub fn completed_walks(history: &[WalkRecord]) -> Vec<&WalkRecord> {
    let mut walks: Vec<&WalkRecord> = history
        .iter()
        .filter(|walk| walk.status == WalkStatus::Completed)
        .collect();
    walks.sort_by(|a, b| starts_at(b).cmp(&starts_at(a)));
    walks
}

/// Figures shown in the home screen's metric tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyMetrics {
    /// Walks dated in the Sunday-to-Saturday week containing the reference date
    pub walks_this_week: usize,
    /// Walks upcoming or in progress, across all of history
    pub scheduled_count: usize,
    /// Booked minutes across all of history; undated lengths count as 30
    pub total_minutes: u32,
    /// Rating of the walker on the first scheduled walk in history order
    pub hero_walker_rating: Option<f64>,
}

impl WeeklyMetrics {
    /// Caption under the minutes tile.
    pub fn rating_caption(&self) -> String {
        match self.hero_walker_rating {
            Some(rating) => format!("★ {rating:.1} walker"),
            None => "Keep exploring".to_string(),
        }
    }
}

/// First and last day of the Sunday-start week containing `date`.
pub fn week_bounds(date: Date) -> (Date, Date) {
    let offset = i64::from(weekday_index(date));
    let start = date.checked_sub(offset.days()).unwrap_or(date);
    let end = start.checked_add(6.days()).unwrap_or(start);
    (start, end)
}

pub fn weekly_metrics(history: &[WalkRecord], today: Date) -> WeeklyMetrics {
    let (start, end) = week_bounds(today);
    WeeklyMetrics {
        walks_this_week: history
            .iter()
            .filter(|walk| (start..=end).contains(&walk.date))
            .count(),
        scheduled_count: history.iter().filter(|walk| walk.status.is_scheduled()).count(),
        total_minutes: history.iter().map(WalkRecord::duration_or_default).sum(),
        hero_walker_rating: history
            .iter()
            .find(|walk| walk.status.is_scheduled())
            .map(|walk| walk.walker.rating),
    }
}

/// Everything the home screen shows, gathered in one read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSummary {
    pub today: Date,
    pub greeting_name: String,
    pub featured: Option<WalkRecord>,
    pub other_upcoming: Vec<WalkRecord>,
    pub metrics: WeeklyMetrics,
    pub unread_messages: usize,
}

/// When a scheduled walk happens, relative to `today`.
///
/// `In progress now`, `Today at 4:00 PM`, `Sep 18 at 9:00 AM`, or just the
/// date label when the walk has no time.
pub fn format_upcoming_time(walk: &WalkRecord, today: Date) -> String {
    if walk.status == WalkStatus::InProgress {
        return "In progress now".to_string();
    }
    let day = if walk.date == today {
        "Today".to_string()
    } else {
        walk.date.strftime("%b %-d").to_string()
    };
    match walk.time {
        Some(time) => format!("{day} at {}", format_time_display(time)),
        None => day,
    }
}
