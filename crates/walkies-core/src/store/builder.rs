//! Builder for creating and seeding AppStore instances.

use std::sync::Arc;

use log::debug;

use super::{AppStore, IdSequence};
use crate::{error::Result, fixtures::Fixtures};

/// Builder for creating and configuring [`AppStore`] instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    fixtures: Option<Fixtures>,
    fixtures_json: Option<String>,
}

impl StoreBuilder {
    /// Creates a builder for an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with the bundled demo data.
    pub fn with_demo_data(mut self) -> Self {
        self.fixtures_json = Some(crate::fixtures::DEMO_FIXTURES_JSON.to_string());
        self.fixtures = None;
        self
    }

    /// Seed the store from a JSON document in the fixture format.
    pub fn with_fixtures_json(mut self, json: impl Into<String>) -> Self {
        self.fixtures_json = Some(json.into());
        self.fixtures = None;
        self
    }

    /// Seed the store from already-parsed fixtures.
    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = Some(fixtures);
        self.fixtures_json = None;
        self
    }

    /// Builds the store.
    ///
    /// # Errors
    ///
    /// Returns `WalkiesError::Serialization` if fixture JSON does not parse,
    /// and `WalkiesError::InvalidInput` if a collection repeats an id.
    pub fn build(self) -> Result<AppStore> {
        let fixtures = match (self.fixtures, self.fixtures_json) {
            (Some(fixtures), _) => fixtures,
            (None, Some(json)) => Fixtures::from_json(&json)?,
            (None, None) => Fixtures::default(),
        };
        fixtures.check_unique_ids()?;

        let first_id = fixtures.max_id() + 1;
        debug!(
            "Seeding store: {} dogs, {} walkers, {} walks, {} plans; next id {first_id}",
            fixtures.dogs.len(),
            fixtures.walkers.len(),
            fixtures.walk_history.len(),
            fixtures.recurring_plans.len(),
        );

        Ok(AppStore {
            dogs: Arc::new(fixtures.dogs),
            walkers: Arc::new(fixtures.walkers),
            walks: Arc::new(fixtures.walk_history),
            plans: Arc::new(fixtures.recurring_plans),
            profile: Arc::new(fixtures.user_profile),
            cards: Arc::new(fixtures.payments.cards),
            transactions: Arc::new(fixtures.payments.transactions),
            conversations: Arc::new(fixtures.inbox),
            chats: Arc::new(fixtures.chats),
            ids: IdSequence::starting_at(first_id),
        })
    }
}
