//! Partial-update request types.
//!
//! Every field is optional; `None` means "leave as is".

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::{Dog, RecurringPlan, UserProfile};
use crate::schedule;

/// Fields of a dog profile to overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DogUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub notes: Option<String>,
    pub vet: Option<String>,
    pub allergies: Option<String>,
    pub likes: Option<String>,
    pub dislikes: Option<String>,
}

impl DogUpdate {
    /// Merge the provided fields into `dog`.
    pub fn apply_to(&self, dog: &mut Dog) {
        let text_fields = [
            (&self.name, &mut dog.name),
            (&self.avatar, &mut dog.avatar),
            (&self.breed, &mut dog.breed),
            (&self.notes, &mut dog.notes),
            (&self.vet, &mut dog.vet),
            (&self.allergies, &mut dog.allergies),
            (&self.likes, &mut dog.likes),
            (&self.dislikes, &mut dog.dislikes),
        ];
        for (update, field) in text_fields {
            if let Some(value) = update {
                field.clone_from(value);
            }
        }
        if let Some(age) = self.age {
            dog.age = Some(age);
        }
    }

    /// Names of the fields this update touches, for change reporting.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut changes = Vec::new();
        let checks = [
            ("name", self.name.is_some()),
            ("avatar", self.avatar.is_some()),
            ("breed", self.breed.is_some()),
            ("age", self.age.is_some()),
            ("notes", self.notes.is_some()),
            ("vet", self.vet.is_some()),
            ("allergies", self.allergies.is_some()),
            ("likes", self.likes.is_some()),
            ("dislikes", self.dislikes.is_some()),
        ];
        for (name, present) in checks {
            if present {
                changes.push(name);
            }
        }
        changes
    }
}

/// Fields of a recurring plan to overwrite.
///
/// `days_of_week` and `dog_ids` are normalized the same way as on creation;
/// out-of-range days are dropped rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecurringPlanUpdate {
    pub label: Option<String>,
    pub dog_ids: Option<Vec<u64>>,
    pub walker_id: Option<u64>,
    pub days_of_week: Option<Vec<i32>>,
    pub time: Option<Time>,
    /// Zero is ignored
    pub duration: Option<u32>,
    pub start_date: Option<Date>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub last_confirmed_date: Option<Date>,
}

impl RecurringPlanUpdate {
    /// Update that only records a confirmed occurrence.
    pub fn confirmed_on(date: Date) -> Self {
        Self {
            last_confirmed_date: Some(date),
            ..Default::default()
        }
    }

    /// Merge the provided fields into `plan`, normalizing days and dog ids
    /// and trimming text.
    pub fn apply_to(&self, plan: &mut RecurringPlan) {
        if let Some(days) = &self.days_of_week {
            plan.days_of_week = schedule::normalize_days(days);
        }
        if let Some(dog_ids) = &self.dog_ids {
            plan.dog_ids = schedule::normalize_ids(dog_ids);
        }
        if let Some(walker_id) = self.walker_id {
            plan.walker_id = Some(walker_id);
        }
        if let Some(time) = self.time {
            plan.time = time;
        }
        if let Some(duration) = self.duration.filter(|&minutes| minutes > 0) {
            plan.duration = duration;
        }
        if let Some(start_date) = self.start_date {
            plan.start_date = start_date;
        }
        if let Some(address) = &self.address {
            plan.address = address.trim().to_string();
        }
        if let Some(notes) = &self.notes {
            plan.notes = notes.trim().to_string();
        }
        if let Some(label) = &self.label {
            plan.label = label.trim().to_string();
        }
        if let Some(date) = self.last_confirmed_date {
            plan.last_confirmed_date = Some(date);
        }
    }
}

/// Profile fields to overwrite (shallow merge).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub emergency_contact: Option<String>,
    pub preferred_walk_time: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn apply_to(&self, profile: &mut UserProfile) {
        let fields = [
            (&self.name, &mut profile.name),
            (&self.email, &mut profile.email),
            (&self.phone, &mut profile.phone),
            (&self.address, &mut profile.address),
            (&self.bio, &mut profile.bio),
            (&self.emergency_contact, &mut profile.emergency_contact),
            (&self.preferred_walk_time, &mut profile.preferred_walk_time),
            (&self.avatar, &mut profile.avatar),
        ];
        for (update, field) in fields {
            if let Some(value) = update {
                field.clone_from(value);
            }
        }
    }
}
