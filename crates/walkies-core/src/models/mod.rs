//! Data models for dogs, walkers, walks, recurring plans and the user.
//!
//! This module contains the core domain records of the Walkies app. Display
//! implementations for these models live in [`crate::display::models`] so the
//! records stay plain data.
//!
//! # Snapshots versus keys
//!
//! Two records refer to dogs and walkers, and they do it differently:
//!
//! - [`WalkRecord`] embeds full [`Dog`] and [`Walker`] values copied when the
//!   walk is created. History is immutable once written.
//! - [`RecurringPlan`] stores `dog_ids` and `walker_id` only. They are resolved
//!   against the store's current collections on every read (see
//!   [`ResolvedPlan`]), so a live plan always reflects the current catalog.
//!
//! # Examples
//!
//! ```rust
//! use walkies_core::models::{PlanStatus, WalkStatus};
//!
//! assert_eq!(PlanStatus::Active.toggled(), PlanStatus::Paused);
//! assert!(WalkStatus::InProgress.is_scheduled());
//! assert!(!WalkStatus::Completed.is_scheduled());
//! ```

pub mod dog;
pub mod filters;
pub mod inbox;
pub mod payment;
pub mod profile;
pub mod recurring;
pub mod requests;
pub mod status;
pub mod walk;
pub mod walker;


pub use dog::Dog;
pub use filters::{WalkFilter, WalkerFilter};
pub use inbox::{ChatMessage, Conversation, InboxEntry, Sender};
pub use payment::{CardBrand, PaymentCard, PaymentData, Transaction};
pub use profile::{ProfileKey, UserProfile};
pub use recurring::{PlanOverview, RecurringPlan, ResolvedPlan};
pub use requests::{DogUpdate, ProfileUpdate, RecurringPlanUpdate};
pub use status::{PlanStatus, WalkStatus};
pub use walk::{WalkActivity, WalkRecord, WalkSource};
pub use walker::Walker;
