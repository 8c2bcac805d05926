//! Walk record model.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::{Dog, WalkStatus, Walker};

/// A concrete booked, running or finished walk.
///
/// `walker` and `dogs` are value copies taken when the walk was created, so
/// editing a dog profile later never rewrites history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalkRecord {
    /// Unique identifier for the walk
    pub id: u64,

    /// Calendar date of the walk
    pub date: Date,

    /// Start time, when one was booked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,

    /// Length in minutes; older records may not carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Snapshot of the walker at booking time
    pub walker: Walker,

    /// Snapshot of the dogs at booking time
    pub dogs: Vec<Dog>,

    /// Amount charged in dollars
    pub price: f64,

    pub status: WalkStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Walker's report or the owner's instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<WalkActivity>,

    /// Where the booking came from, when not a direct booking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<WalkSource>,
}

impl WalkRecord {
    /// Duration used for totals when the record carries none.
    pub const DEFAULT_DURATION: u32 = 30;

    pub fn duration_or_default(&self) -> u32 {
        self.duration.unwrap_or(Self::DEFAULT_DURATION)
    }

    /// Comma-separated dog names.
    pub fn dog_names(&self) -> String {
        self.dogs
            .iter()
            .map(|dog| dog.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Bathroom and hydration report for a finished walk.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalkActivity {
    pub pee: bool,
    pub poo: bool,
    pub water: bool,
}

/// Origin of a walk that was not booked through the wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WalkSource {
    #[serde(rename = "Recurring Plan")]
    RecurringPlan,
}

impl WalkSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalkSource::RecurringPlan => "Recurring Plan",
        }
    }
}
