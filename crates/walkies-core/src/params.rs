//! Parameter structures for Walkies operations
//!
//! This module contains shared parameter structures used across interfaces
//! (the CLI today, a UI shell tomorrow) without framework-specific derives.
//! Interface layers define their own argument structs and convert into these
//! via `From`, keeping clap and friends out of the core:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    AppStore     │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   mutators      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Partial updates live next to the models they touch, in
//! [`crate::models::requests`].

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::{
    error::ValidationFailure,
    models::{Dog, WalkActivity, WalkRecord, WalkSource, WalkStatus, Walker, WalkerFilter},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a dog. The store assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDog {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub vet: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub likes: String,
    #[serde(default)]
    pub dislikes: String,
}

impl NewDog {
    /// Avatar used when none is chosen.
    pub const DEFAULT_AVATAR: &'static str = "🐶";

    pub(crate) fn into_dog(self, id: u64) -> Dog {
        Dog {
            id,
            name: self.name,
            avatar: self
                .avatar
                .unwrap_or_else(|| Self::DEFAULT_AVATAR.to_string()),
            breed: self.breed,
            age: self.age,
            notes: self.notes,
            vet: self.vet,
            allergies: self.allergies,
            likes: self.likes,
            dislikes: self.dislikes,
        }
    }
}

/// Parameters for recording a walk. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWalk {
    pub date: Date,
    pub time: Option<Time>,
    pub duration: Option<u32>,
    pub walker: Walker,
    pub dogs: Vec<Dog>,
    pub price: f64,
    pub status: WalkStatus,
    pub address: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub activity: Option<WalkActivity>,
    pub source: Option<WalkSource>,
}

impl NewWalk {
    /// An upcoming walk with no photos, report or source.
    pub fn upcoming(
        date: Date,
        time: Time,
        duration: u32,
        walker: Walker,
        dogs: Vec<Dog>,
        price: f64,
    ) -> Self {
        Self {
            date,
            time: Some(time),
            duration: Some(duration),
            walker,
            dogs,
            price,
            status: WalkStatus::Upcoming,
            address: None,
            note: None,
            photos: Vec::new(),
            activity: None,
            source: None,
        }
    }

    pub(crate) fn into_record(self, id: u64) -> WalkRecord {
        WalkRecord {
            id,
            date: self.date,
            time: self.time,
            duration: self.duration,
            walker: self.walker,
            dogs: self.dogs,
            price: self.price,
            status: self.status,
            address: self.address,
            note: self.note,
            photos: self.photos,
            activity: self.activity,
            source: self.source,
        }
    }
}

/// Parameters for creating a recurring plan.
///
/// `days_of_week` accepts any integers; values outside `0..=6` are dropped
/// and the rest deduplicated and sorted. `time` defaults to 09:00 and
/// `duration` to 30 minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecurringPlan {
    #[serde(default)]
    pub label: String,
    pub dog_ids: Vec<u64>,
    pub walker_id: Option<u64>,
    pub days_of_week: Vec<i32>,
    pub time: Option<Time>,
    pub duration: Option<u32>,
    pub start_date: Date,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

impl CreateRecurringPlan {
    /// Minimal plan input; everything else takes its default.
    pub fn new(days_of_week: Vec<i32>, start_date: Date) -> Self {
        Self {
            label: String::new(),
            dog_ids: Vec::new(),
            walker_id: None,
            days_of_week,
            time: None,
            duration: None,
            start_date,
            address: String::new(),
            notes: String::new(),
        }
    }

    /// Check the schedule form before creating or saving a plan.
    ///
    /// Failures come back in the order the form asks for them: days, dogs,
    /// walker, address.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if crate::schedule::normalize_days(&self.days_of_week).is_empty() {
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

/// Parameters for listing upcoming occurrences of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OccurrenceQuery {
    pub plan_id: u64,
    /// How many occurrences to return
    #[serde(default = "default_occurrence_count")]
    pub count: usize,
    /// Reference date; today when absent
    pub from: Option<Date>,
}

fn default_occurrence_count() -> usize {
    crate::schedule::DEFAULT_OCCURRENCE_COUNT
}

/// Parameters for confirming or reviewing one plan occurrence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OccurrenceRef {
    pub plan_id: u64,
    pub date: Date,
}

/// Parameters for listing walkers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListWalkers {
    #[serde(default)]
    pub filter: WalkerFilter,
}

/// Parameters for listing walk history.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListWalks {
    /// Only finished walks, newest first
    #[serde(default)]
    pub completed: bool,
}

/// Raw card form input, validated by [`crate::payments::validate_new_card`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCard {
    /// Card number; spaces allowed
    pub card_number: String,
    /// `MM/YY`
    pub expiry: String,
    pub cvv: String,
    /// Cardholder name
    pub name: String,
    pub billing_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default)]
    pub make_default: bool,
}
