//! Dog operations for the AppStore.

use std::sync::Arc;

use log::debug;

use super::{replace_at, replace_with, AppStore};
use crate::{
    error::{Result, WalkiesError},
    models::{Dog, DogUpdate},
    params::NewDog,
};

impl AppStore {
    /// All dogs, in the order they were added.
    pub fn dogs(&self) -> Arc<Vec<Dog>> {
        Arc::clone(&self.dogs)
    }

    /// Retrieves a dog by its ID.
    pub fn dog(&self, id: u64) -> Option<Dog> {
        self.dogs.iter().find(|dog| dog.id == id).cloned()
    }

    /// Adds a dog with a freshly allocated id and returns it.
    pub fn add_dog(&mut self, params: NewDog) -> Dog {
        let dog = params.into_dog(self.ids.next_id());
        debug!("Adding dog {} ({})", dog.id, dog.name);
        let created = dog.clone();
        replace_with(&mut self.dogs, |dogs| dogs.push(dog));
        created
    }

    /// Merges the provided fields into an existing dog.
    ///
    /// Walks that already embed this dog keep their old copy.
    pub fn update_dog(&mut self, id: u64, update: &DogUpdate) -> Result<Dog> {
        let index = self
            .dogs
            .iter()
            .position(|dog| dog.id == id)
            .ok_or(WalkiesError::DogNotFound { id })?;
        debug!("Updating dog {id}: {:?}", update.changed_fields());
        Ok(replace_at(&mut self.dogs, index, |dog| update.apply_to(dog)))
    }

    /// Removes a dog.
    ///
    /// Recurring plans that list this dog keep its id in `dog_ids`; it simply
    /// stops resolving. Walk history keeps its embedded copy.
    pub fn delete_dog(&mut self, id: u64) -> Result<()> {
        if !self.dogs.iter().any(|dog| dog.id == id) {
            return Err(WalkiesError::DogNotFound { id });
        }
        debug!("Deleting dog {id}");
        replace_with(&mut self.dogs, |dogs| dogs.retain(|dog| dog.id != id));
        Ok(())
    }

    /// Looks up several dogs, skipping ids that no longer exist.
    pub fn dogs_by_ids(&self, ids: &[u64]) -> Vec<Dog> {
        ids.iter().filter_map(|&id| self.dog(id)).collect()
    }
}
