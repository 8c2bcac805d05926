//! Walker catalog model.

use serde::{Deserialize, Serialize};

/// A professional dog walker from the fixed catalog.
///
/// Only `favorite` ever changes after the store is seeded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Walker {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    /// Background check completed
    #[serde(default)]
    pub verified: bool,
    /// Average review score out of 5
    pub rating: f64,
    /// Number of reviews behind `rating`
    #[serde(default)]
    pub reviews: u32,
    /// Base price in dollars for a 30-minute walk
    pub price: f64,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl Walker {
    /// First name plus last initial, e.g. "Jordan L."
    pub fn short_name(&self) -> String {
        let mut parts = self.name.split_whitespace();
        match (parts.next(), parts.last()) {
            (Some(first), Some(last)) => match last.chars().next() {
                Some(initial) => format!("{first} {initial}."),
                None => first.to_string(),
            },
            (Some(first), None) => first.to_string(),
            _ => String::new(),
        }
    }
}
