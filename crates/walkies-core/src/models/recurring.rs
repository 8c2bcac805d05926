//! Recurring walk plan model.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::{Dog, PlanStatus, Walker};
use crate::error::ValidationFailure;

/// A weekly recurring walk schedule.
///
/// Unlike [`super::WalkRecord`], a plan only stores keys: `dog_ids` and
/// `walker_id` are looked up against the live catalog whenever the plan is
/// read, so profile edits show up immediately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPlan {
    pub id: u64,

    /// Optional display name, stored trimmed
    #[serde(default)]
    pub label: String,

    /// Dogs on this plan, deduplicated in first-seen order
    pub dog_ids: Vec<u64>,

    /// Preferred walker
    #[serde(default)]
    pub walker_id: Option<u64>,

    /// Weekdays (0 = Sunday .. 6 = Saturday), deduplicated and ascending
    pub days_of_week: Vec<u8>,

    /// Start time of each occurrence
    pub time: Time,

    /// Length in minutes
    pub duration: u32,

    /// No occurrence is generated before this date
    pub start_date: Date,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub status: PlanStatus,

    /// Date of the most recently confirmed occurrence
    #[serde(default)]
    pub last_confirmed_date: Option<Date>,
}

impl RecurringPlan {
    /// Default start time for new plans.
    pub const DEFAULT_TIME: Time = Time::constant(9, 0, 0, 0);

    /// Default length in minutes for new plans.
    pub const DEFAULT_DURATION: u32 = 30;

    pub fn is_active(&self) -> bool {
        self.status == PlanStatus::Active
    }

    /// The schedule form's checks, applied to a saved or edited plan: days,
    /// dogs, walker, address, in that order.
    pub fn validate_schedule(&self) -> Result<(), ValidationFailure> {
        if self.days_of_week.is_empty() {
            return Err(ValidationFailure::NoDaysSelected);
        }
        if self.dog_ids.is_empty() {
            return Err(ValidationFailure::NoDogsSelected);
        }
        if self.walker_id.is_none() {
            return Err(ValidationFailure::NoWalkerSelected);
        }
        if self.address.trim().is_empty() {
            return Err(ValidationFailure::MissingAddress);
        }
        Ok(())
    }
}

/// A plan with its keys looked up in the current collections.
///
/// Dogs or a walker that no longer exist are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlan {
    pub plan: RecurringPlan,
    pub walker: Option<Walker>,
    pub dogs: Vec<Dog>,
}

impl ResolvedPlan {
    /// Title used in lists: the label, or the dog names when unlabeled.
    pub fn title(&self) -> String {
        if !self.plan.label.is_empty() {
            return self.plan.label.clone();
        }
        let names: Vec<&str> = self.dogs.iter().map(|dog| dog.name.as_str()).collect();
        if names.is_empty() {
            "Recurring walk".to_string()
        } else {
            names.join(", ")
        }
    }
}

/// A resolved plan together with its next few occurrences, as listed on the
/// recurring walks screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOverview {
    pub resolved: ResolvedPlan,
    pub upcoming: Vec<crate::schedule::Occurrence>,
}
