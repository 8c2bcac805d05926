//! Walk history operations for the AppStore.

use std::sync::Arc;

use log::{debug, info};

use super::{replace_with, AppStore};
use crate::{
    models::{WalkFilter, WalkRecord},
    params::NewWalk,
};

impl AppStore {
    /// Full walk history, most recently added first.
    pub fn walk_history(&self) -> Arc<Vec<WalkRecord>> {
        Arc::clone(&self.walks)
    }

    /// Retrieves a walk by its ID.
    pub fn walk(&self, id: u64) -> Option<WalkRecord> {
        self.walks.iter().find(|walk| walk.id == id).cloned()
    }

    /// Walks matching `filter`, in history order.
    pub fn list_walks(&self, filter: &WalkFilter) -> Vec<WalkRecord> {
        self.walks
            .iter()
            .filter(|walk| filter.matches(walk))
            .cloned()
            .collect()
    }

    /// Records a walk with a freshly allocated id at the front of the history.
    pub fn add_walk(&mut self, params: NewWalk) -> WalkRecord {
        let walk = params.into_record(self.ids.next_id());
        info!(
            "Recorded walk {} on {} with {} ({})",
            walk.id,
            walk.date,
            walk.walker.name,
            walk.status.as_str()
        );
        debug!("Walk {} dogs: {}", walk.id, walk.dog_names());
        let created = walk.clone();
        replace_with(&mut self.walks, |walks| walks.insert(0, walk));
        created
    }
}
