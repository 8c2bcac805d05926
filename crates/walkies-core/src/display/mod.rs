//! Display wrapper types and formatting helpers.
//!
//! Domain records implement `Display` in [`models`], producing markdown. The
//! wrappers in this module format the same records for a specific context:
//! a list, the outcome of a create or update, a one-line status.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │   Formatted     │
//! │ (Dog, Walk, ..) │───▶│    Types        │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Wrapper Types
//!
//! - [`Dogs`], [`Walkers`], [`Walks`], [`PlanOverviews`], [`Cards`],
//!   [`Transactions`], [`Inbox`]: collections with an empty-state line
//! - [`CreateResult`], [`UpdateResult`], [`DeleteResult`]: mutation outcomes
//! - [`OperationStatus`]: success, notice and error lines
//!
//! ## Usage
//!
//! ```rust
//! use walkies_core::{
//!     display::{OperationStatus, Walkers},
//!     models::WalkerFilter,
//!     StoreBuilder,
//! };
//!
//! let store = StoreBuilder::new().with_demo_data().build()?;
//! let favorites = Walkers(store.list_walkers(WalkerFilter::Favorites));
//! assert_eq!(favorites.len(), 2);
//! assert!(favorites.to_string().contains("Alex Ray"));
//!
//! let status = OperationStatus::success("Added to favorites");
//! assert!(status.to_string().starts_with("Success:"));
//! # Ok::<(), walkies_core::WalkiesError>(())
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Cards, Dogs, Inbox, PlanOverviews, Transactions, Walkers, Walks};
pub use datetime::{
    format_date_display, format_date_str, format_plan_days, format_time_display,
    parse_time_or_default, WhenLabel, DAY_LABELS,
};
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::{OperationStatus, StatusKind};
