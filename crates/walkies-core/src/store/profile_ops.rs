//! User profile operations for the AppStore.

use std::sync::Arc;

use log::debug;

use super::AppStore;
use crate::{
    models::{ProfileUpdate, UserProfile},
    profile::{calculate_profile_completion, ProfileCompletion, PROFILE_COMPLETION_FIELDS},
};

impl AppStore {
    pub fn user_profile(&self) -> Arc<UserProfile> {
        Arc::clone(&self.profile)
    }

    /// Shallow-merges the provided fields into the profile.
    pub fn update_user_profile(&mut self, update: &ProfileUpdate) -> UserProfile {
        let mut profile = self.profile.as_ref().clone();
        update.apply_to(&mut profile);
        debug!("Updated user profile for {}", profile.name);
        self.profile = Arc::new(profile.clone());
        profile
    }

    /// Completion of the profile against the standard checklist.
    pub fn profile_completion(&self) -> ProfileCompletion {
        calculate_profile_completion(&self.profile, &PROFILE_COMPLETION_FIELDS)
    }
}
