//! Walker catalog operations for the AppStore.

use std::sync::Arc;

use log::debug;

use super::{replace_at, AppStore};
use crate::{
    error::{Result, WalkiesError},
    models::{Walker, WalkerFilter},
};

impl AppStore {
    /// The walker catalog in its seeded order.
    pub fn walkers(&self) -> Arc<Vec<Walker>> {
        Arc::clone(&self.walkers)
    }

    /// Retrieves a walker by its ID.
    pub fn walker(&self, id: u64) -> Option<Walker> {
        self.walkers.iter().find(|walker| walker.id == id).cloned()
    }

    /// The catalog sorted or filtered by one of the list chips.
    pub fn list_walkers(&self, filter: WalkerFilter) -> Vec<Walker> {
        filter.apply(&self.walkers)
    }

    /// Flips a walker's favorite flag and returns the new value.
    pub fn toggle_walker_favorite(&mut self, id: u64) -> Result<bool> {
        let index = self
            .walkers
            .iter()
            .position(|walker| walker.id == id)
            .ok_or(WalkiesError::WalkerNotFound { id })?;
        let updated = replace_at(&mut self.walkers, index, |walker| {
            walker.favorite = !walker.favorite;
        });
        debug!("Walker {id} favorite: {}", updated.favorite);
        Ok(updated.favorite)
    }
}
