//! The application state store.
//!
//! [`AppStore`] is the single source of truth for every entity in the app. It
//! is created once by [`StoreBuilder`] and handed explicitly to whatever needs
//! it; there is no global instance.
//!
//! # Copy-on-write collections
//!
//! Each collection is held behind an [`Arc`]. Readers get a cheap clone of the
//! `Arc`; mutators never touch a vector in place but build a new one and swap
//! it in. An observer that kept an earlier snapshot can therefore tell that a
//! collection changed with [`Arc::ptr_eq`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use walkies_core::{params::NewDog, StoreBuilder};
//!
//! let mut store = StoreBuilder::new().build()?;
//! let before = store.dogs();
//! store.add_dog(NewDog {
//!     name: "Pepper".to_string(),
//!     ..Default::default()
//! });
//! assert!(!Arc::ptr_eq(&before, &store.dogs()));
//! # Ok::<(), walkies_core::WalkiesError>(())
//! ```
//!
//! # Unknown ids
//!
//! Lookups return `Option`. Mutators addressed at an id that does not exist
//! return the matching `*NotFound` error and leave every collection untouched.
//!
//! ## Submodules
//!
//! - [`builder`]: seeds a store from fixtures
//! - [`dog_ops`], [`walk_ops`], [`walker_ops`], [`plan_ops`], [`profile_ops`],
//!   [`payment_ops`], [`inbox_ops`]: per-entity accessors and mutators
//! - [`handlers`]: composite reads returning display wrappers

use std::{collections::BTreeMap, sync::Arc};

use crate::models::{
    ChatMessage, Conversation, Dog, PaymentCard, RecurringPlan, Transaction, UserProfile,
    WalkRecord, Walker,
};

pub mod builder;
pub mod dog_ops;
pub mod handlers;
pub mod inbox_ops;
pub mod payment_ops;
pub mod plan_ops;
pub mod profile_ops;
pub mod walk_ops;
pub mod walker_ops;


pub use builder::StoreBuilder;

/// In-memory state for one app session.
#[derive(Debug, Clone)]
pub struct AppStore {
    pub(crate) dogs: Arc<Vec<Dog>>,
    pub(crate) walkers: Arc<Vec<Walker>>,
    pub(crate) walks: Arc<Vec<WalkRecord>>,
    pub(crate) plans: Arc<Vec<RecurringPlan>>,
    pub(crate) profile: Arc<UserProfile>,
    pub(crate) cards: Arc<Vec<PaymentCard>>,
    pub(crate) transactions: Arc<Vec<Transaction>>,
    pub(crate) conversations: Arc<Vec<Conversation>>,
    pub(crate) chats: Arc<BTreeMap<u64, Vec<ChatMessage>>>,
    pub(crate) ids: IdSequence,
}

/// Monotonic id allocator shared by every collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Start handing out ids at `first` (never below 1).
    pub fn starting_at(first: u64) -> Self {
        Self { next: first.max(1) }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to [`IdSequence::next_id`] will return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// Swap in a modified copy of `collection`.
pub(crate) fn replace_with<T: Clone>(collection: &mut Arc<Vec<T>>, edit: impl FnOnce(&mut Vec<T>)) {
    let mut next = collection.as_ref().clone();
    edit(&mut next);
    *collection = Arc::new(next);
}

/// Swap in a copy of `collection` with the element at `index` edited, and
/// return the edited element.
pub(crate) fn replace_at<T: Clone>(
    collection: &mut Arc<Vec<T>>,
    index: usize,
    edit: impl FnOnce(&mut T),
) -> T {
    let mut next = collection.as_ref().clone();
    edit(&mut next[index]);
    let updated = next[index].clone();
    *collection = Arc::new(next);
    updated
}

impl AppStore {
    /// The id the next created record will receive.
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }
}
