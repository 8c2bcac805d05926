//! Status enumerations for walks and recurring plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of walk statuses.
///
/// Progression is `Upcoming -> In Progress -> Completed`; the app never drives
/// it from real events, fixtures simply carry whichever status they need.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WalkStatus {
    /// Booked but not started
    Upcoming,

    /// Walker is out with the dogs right now
    #[serde(rename = "In Progress")]
    InProgress,

    /// Walk finished
    Completed,
}

impl FromStr for WalkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(WalkStatus::Upcoming),
            "in progress" | "inprogress" | "in_progress" => Ok(WalkStatus::InProgress),
            "completed" => Ok(WalkStatus::Completed),
            _ => Err(format!("Invalid walk status: {s}")),
        }
    }
}

impl WalkStatus {
    /// Human-readable label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            WalkStatus::Upcoming => "Upcoming",
            WalkStatus::InProgress => "In Progress",
            WalkStatus::Completed => "Completed",
        }
    }

    /// Whether the walk still lies ahead or is underway.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, WalkStatus::Upcoming | WalkStatus::InProgress)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use walkies_core::models::WalkStatus;
    ///
    /// assert_eq!(WalkStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(WalkStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(WalkStatus::Upcoming.with_icon(), "○ Upcoming");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            WalkStatus::Completed => "✓ Completed",
            WalkStatus::InProgress => "➤ In Progress",
            WalkStatus::Upcoming => "○ Upcoming",
        }
    }
}

/// Whether a recurring plan currently produces walks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is running
    #[default]
    Active,

    /// Plan is on hold; occurrences cannot be confirmed
    Paused,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "paused" => Ok(PlanStatus::Paused),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Paused => "paused",
        }
    }

    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            PlanStatus::Active => PlanStatus::Paused,
            PlanStatus::Paused => PlanStatus::Active,
        }
    }
}
