//! Dog profile model.

use serde::{Deserialize, Serialize};

/// A dog owned by the (single) app user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    /// Unique identifier for the dog
    pub id: u64,

    pub name: String,

    /// Emoji or image URL shown next to the name
    #[serde(default)]
    pub avatar: String,

    #[serde(default)]
    pub breed: String,

    /// Age in years, if known
    #[serde(default)]
    pub age: Option<u32>,

    /// Free-form care notes for the walker
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
