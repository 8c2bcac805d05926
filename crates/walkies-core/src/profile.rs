//! Profile completion scoring.

use serde::Serialize;

use crate::models::{ProfileKey, UserProfile};

/// A profile field to score, with the prompt shown while it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileField {
    pub key: ProfileKey,
    pub label: &'static str,
}

/// The checklist used by the profile screen.
pub const PROFILE_COMPLETION_FIELDS: [ProfileField; 6] = [
    ProfileField {
        key: ProfileKey::Email,
        label: "Add your email address",
    },
    ProfileField {
        key: ProfileKey::Phone,
        label: "Add a phone number",
    },
    ProfileField {
        key: ProfileKey::Address,
        label: "Add your home address",
    },
    ProfileField {
        key: ProfileKey::Bio,
        label: "Tell walkers about your dogs",
    },
    ProfileField {
        key: ProfileKey::EmergencyContact,
        label: "Add an emergency contact",
    },
    ProfileField {
        key: ProfileKey::PreferredWalkTime,
        label: "Share your preferred walk time",
    },
];

/// How complete a profile is against a field checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCompletion {
    /// Rounded to the nearest whole percent
    pub percentage: u8,
    pub filled: usize,
    pub total: usize,
    /// Labels of unfilled fields, in checklist order
    pub missing: Vec<&'static str>,
}

impl ProfileCompletion {
    pub fn is_complete(&self) -> bool {
        self.filled == self.total
    }
}

/// Score `profile` against `fields`.
///
/// A field counts as filled when it is non-blank after trimming. An empty
/// checklist is 100% complete.
pub fn calculate_profile_completion(profile: &UserProfile, fields: &[ProfileField]) -> ProfileCompletion {
    let total = fields.len();
    let (filled, missing): (Vec<&ProfileField>, Vec<&ProfileField>) = fields
        .iter()
        .partition(|field| !profile.field(field.key).trim().is_empty());

    let percentage = if total == 0 {
        100
    } else {
        // filled <= total, so the rounded ratio always fits in 0..=100
        ((filled.len() as f64 / total as f64) * 100.0).round() as u8
    };

    ProfileCompletion {
        percentage,
        filled: filled.len(),
        total,
        missing: missing.into_iter().map(|field| field.label).collect(),
    }
}
