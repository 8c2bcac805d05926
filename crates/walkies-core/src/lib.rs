//! Core library for the Walkies dog-walking app.
//!
//! This crate holds everything behind the screens: the in-memory state store,
//! the recurring plan occurrence generator, the booking wizard and the
//! formatting helpers the screens use for dates, times and lists.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain records; their [`std::fmt::Display`]
//!   impls live in [`display::models`] and produce markdown
//! - **Display Wrappers** ([`display`]): list, result and status wrappers
//! - **Terminal Rendering**: the CLI's termimad renderer
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use walkies_core::{params::OccurrenceQuery, StoreBuilder};
//!
//! let mut store = StoreBuilder::new().with_demo_data().build()?;
//! let today = date(2025, 9, 17);
//!
//! let next = store.upcoming_occurrences(
//!     &OccurrenceQuery {
//!         plan_id: 1,
//!         count: 3,
//!         from: None,
//!     },
//!     today,
//! )?;
//! assert_eq!(next[0].date, date(2025, 9, 19));
//!
//! let favorite = store.toggle_walker_favorite(2)?;
//! assert!(favorite);
//! # Ok::<(), walkies_core::WalkiesError>(())
//! ```

pub mod booking;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod params;
pub mod payments;
pub mod profile;
pub mod schedule;
pub mod store;

use jiff::{civil::Date, Zoned};

// Re-export commonly used types
pub use booking::{BackOutcome, BookingDraft, BookingPrefill, BookingStep, BookingWizard, ServiceOption};
pub use display::{
    format_date_display, format_plan_days, format_time_display, parse_time_or_default, CreateResult,
    DeleteResult, OperationStatus, UpdateResult, DAY_LABELS,
};
pub use error::{Result, ValidationFailure, WalkiesError};
pub use models::{
    Dog, PlanStatus, RecurringPlan, ResolvedPlan, UserProfile, WalkRecord, WalkStatus, Walker,
};
pub use profile::{calculate_profile_completion, ProfileCompletion, PROFILE_COMPLETION_FIELDS};
pub use schedule::{generate_occurrences, Occurrence};
pub use store::{AppStore, StoreBuilder};

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}
