//! Seed data for a store.
//!
//! The demo data ships inside the binary as JSON and is parsed with
//! `serde_json` when a store is built with
//! [`StoreBuilder::with_demo_data`](crate::StoreBuilder::with_demo_data).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WalkiesError},
    models::{
        ChatMessage, Conversation, Dog, PaymentData, RecurringPlan, UserProfile, WalkRecord, Walker,
    },
};

/// The bundled demo data set.
pub const DEMO_FIXTURES_JSON: &str = include_str!("../fixtures/demo.json");

/// Everything a store can be seeded with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixtures {
    pub dogs: Vec<Dog>,
    pub walkers: Vec<Walker>,
    pub walk_history: Vec<WalkRecord>,
    pub recurring_plans: Vec<RecurringPlan>,
    pub inbox: Vec<Conversation>,
    /// Chat threads keyed by walker id
    pub chats: BTreeMap<u64, Vec<ChatMessage>>,
    pub payments: PaymentData,
    pub user_profile: UserProfile,
}

impl Fixtures {
    /// Parse fixtures from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The bundled demo data.
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_FIXTURES_JSON)
    }

    /// Reject data sets where two records of one kind share an id.
    ///
    /// Ids only need to be unique per collection; a dog and a walker may
    /// both be `1`.
    pub fn check_unique_ids(&self) -> Result<()> {
        fn check(field: &str, ids: impl Iterator<Item = u64>) -> Result<()> {
            let mut seen = BTreeSet::new();
            for id in ids {
                if !seen.insert(id) {
                    return Err(WalkiesError::invalid_input(field).with_reason(format!("duplicate id {id}")));
                }
            }
            Ok(())
        }

        check("dogs", self.dogs.iter().map(|dog| dog.id))?;
        check("walkers", self.walkers.iter().map(|walker| walker.id))?;
        check("walkHistory", self.walk_history.iter().map(|walk| walk.id))?;
        check("recurringPlans", self.recurring_plans.iter().map(|plan| plan.id))?;
        check("payments.cards", self.payments.cards.iter().map(|card| card.id))
    }

    /// Largest id used by any seeded record.
    pub fn max_id(&self) -> u64 {
        let ids = self
            .dogs
            .iter()
            .map(|dog| dog.id)
            .chain(self.walkers.iter().map(|walker| walker.id))
            .chain(self.walk_history.iter().map(|walk| walk.id))
            .chain(self.recurring_plans.iter().map(|plan| plan.id))
            .chain(self.inbox.iter().map(|conversation| conversation.id))
            .chain(self.payments.cards.iter().map(|card| card.id));
        ids.max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlanStatus, WalkStatus};

    #[test]
    fn test_demo_fixtures_parse() {
        let fixtures = Fixtures::demo().expect("demo fixtures parse");

        assert_eq!(fixtures.dogs.len(), 3);
        assert_eq!(fixtures.walkers.len(), 3);
        assert_eq!(fixtures.walk_history.len(), 4);
        assert_eq!(fixtures.walk_history[0].status, WalkStatus::InProgress);
        assert_eq!(fixtures.recurring_plans[0].days_of_week, vec![1, 3, 5]);
        assert_eq!(fixtures.recurring_plans[0].status, PlanStatus::Active);
        assert_eq!(fixtures.chats.get(&3).map(Vec::len), Some(3));
        assert_eq!(fixtures.payments.cards.len(), 1);
        assert_eq!(fixtures.user_profile.name, "Alex Morgan");
        assert_eq!(fixtures.max_id(), 99);
    }

    #[test]
    fn test_empty_fixtures() {
        let fixtures = Fixtures::from_json("{}").expect("empty object parses");
        assert_eq!(fixtures, Fixtures::default());
        assert_eq!(fixtures.max_id(), 0);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut fixtures = Fixtures::demo().expect("demo fixtures parse");
        assert!(fixtures.check_unique_ids().is_ok());

        let copy = fixtures.dogs[0].clone();
        fixtures.dogs.push(copy);
        match fixtures.check_unique_ids() {
            Err(WalkiesError::InvalidInput { field, reason }) => {
                assert_eq!(field, "dogs");
                assert_eq!(reason, "duplicate id 1");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_fixtures() {
        assert!(Fixtures::from_json("{\"dogs\": 3}").is_err());
    }
}
