//! User profile model.

use serde::{Deserialize, Serialize};

/// The single app user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub emergency_contact: String,
    pub preferred_walk_time: String,
    pub avatar: String,
}

/// Profile fields that can be scored for completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProfileKey {
    Name,
    Email,
    Phone,
    Address,
    Bio,
    EmergencyContact,
    PreferredWalkTime,
    Avatar,
}

impl UserProfile {
    /// Value of a single field.
    pub fn field(&self, key: ProfileKey) -> &str {
        match key {
            ProfileKey::Name => &self.name,
            ProfileKey::Email => &self.email,
            ProfileKey::Phone => &self.phone,
            ProfileKey::Address => &self.address,
            ProfileKey::Bio => &self.bio,
            ProfileKey::EmergencyContact => &self.emergency_contact,
            ProfileKey::PreferredWalkTime => &self.preferred_walk_time,
            ProfileKey::Avatar => &self.avatar,
        }
    }
}
