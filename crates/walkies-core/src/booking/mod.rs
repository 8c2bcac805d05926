//! The three-step booking wizard.
//!
//! A booking moves through [`BookingStep::Plan`] (service, date, time,
//! address, dogs, instructions), [`BookingStep::Walker`] and
//! [`BookingStep::Review`]. The wizard only holds a draft; nothing reaches the
//! store until [`BookingWizard::confirm`] records an upcoming walk.
//!
//! ```rust
//! use jiff::civil::date;
//! use walkies_core::{booking::{BookingStep, BookingWizard}, StoreBuilder};
//!
//! let mut store = StoreBuilder::new().with_demo_data().build()?;
//! let mut wizard = BookingWizard::new(date(2025, 9, 17));
//!
//! wizard.set_address("123 Main St");
//! let buddy = store.dog(1).expect("demo dog");
//! wizard.toggle_dog(&buddy);
//! assert_eq!(wizard.advance(&store.walkers())?, BookingStep::Walker);
//!
//! wizard.select_walker(store.walker(1).expect("demo walker"));
//! assert_eq!(wizard.advance(&store.walkers())?, BookingStep::Review);
//!
//! let walk = wizard.confirm(&mut store)?;
//! assert_eq!(walk.price, 25.0);
//! # Ok::<(), walkies_core::WalkiesError>(())
//! ```

use jiff::civil::{Date, Time};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ValidationFailure},
    models::{Dog, RecurringPlan, WalkRecord, Walker, WalkerFilter},
    params::NewWalk,
    store::AppStore,
};

#[cfg(test)]
mod tests;

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    Plan = 0,
    Walker = 1,
    Review = 2,
}

impl BookingStep {
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStep::Plan => "Plan your walk",
            BookingStep::Walker => "Choose a walker",
            BookingStep::Review => "Review & confirm",
        }
    }
}

/// Walk lengths offered by the service picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceOption {
    HalfHour,
    Hour,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 2] = [ServiceOption::HalfHour, ServiceOption::Hour];

    pub fn duration(&self) -> u32 {
        match self {
            ServiceOption::HalfHour => 30,
            ServiceOption::Hour => 60,
        }
    }

    /// Flat price in dollars.
    pub fn price(&self) -> f64 {
        match self {
            ServiceOption::HalfHour => 25.0,
            ServiceOption::Hour => 40.0,
        }
    }

    pub fn from_duration(minutes: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.duration() == minutes)
    }
}

/// The service part of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub duration: u32,
    pub price: f64,
}

impl Service {
    /// Price a duration the way the picker does: an hour costs the hourly
    /// rate, anything else the half-hour rate.
    pub fn for_duration(duration: u32) -> Self {
        let price = if duration == ServiceOption::Hour.duration() {
            ServiceOption::Hour.price()
        } else {
            ServiceOption::HalfHour.price()
        };
        Self { duration, price }
    }
}

impl From<ServiceOption> for Service {
    fn from(option: ServiceOption) -> Self {
        Self {
            duration: option.duration(),
            price: option.price(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeSelection {
    pub date: Option<Date>,
    pub time: Option<Time>,
}

/// Everything chosen so far in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub service: Service,
    pub date_time: DateTimeSelection,
    pub address: String,
    pub selected_dogs: Vec<Dog>,
    pub instructions: String,
    pub selected_walker: Option<Walker>,
    /// Set from the service price when moving to review
    pub total: f64,
}

/// Values used to start the wizard somewhere other than the defaults,
/// typically from one occurrence of a recurring plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingPrefill {
    pub date: Option<Date>,
    pub time: Option<Time>,
    pub duration: Option<u32>,
    pub walker_id: Option<u64>,
    #[serde(default)]
    pub dog_ids: Vec<u64>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl BookingPrefill {
    /// Prefill for booking the occurrence of `plan` on `date`.
    pub fn from_occurrence(plan: &RecurringPlan, date: Date) -> Self {
        Self {
            date: Some(date),
            time: Some(plan.time),
            duration: Some(plan.duration),
            walker_id: plan.walker_id,
            dog_ids: plan.dog_ids.clone(),
            address: Some(plan.address.clone()),
            notes: Some(plan.notes.clone()),
        }
    }
}

/// Result of stepping backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Moved(BookingStep),
    /// Backing out of the first step leaves the flow
    Abandoned,
}

/// State machine for one booking.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: BookingStep,
    draft: BookingDraft,
    min_date: Date,
    walker_filter: WalkerFilter,
    prefill_walker_id: Option<u64>,
    prefill_walker_applied: bool,
}

impl BookingWizard {
    /// Start time offered when nothing is prefilled.
    pub const DEFAULT_TIME: Time = Time::constant(10, 0, 0, 0);

    /// Minimum characters in a pickup address, counted as typed.
    pub const MIN_ADDRESS_LEN: usize = 3;

    /// A fresh wizard: tomorrow at 10:00, a 30-minute walk, nothing else.
    pub fn new(today: Date) -> Self {
        Self::from_prefill(&BookingPrefill::default(), Vec::new(), today)
    }

    /// A wizard seeded from `prefill`.
    ///
    /// Dogs are resolved against the store now; ids that no longer exist are
    /// dropped. The prefilled walker is applied on the first move to the
    /// walker step. A prefill date earlier than tomorrow lowers the minimum
    /// selectable date to it.
    pub fn with_prefill(prefill: &BookingPrefill, store: &AppStore, today: Date) -> Self {
        let dogs = store.dogs_by_ids(&prefill.dog_ids);
        Self::from_prefill(prefill, dogs, today)
    }

    fn from_prefill(prefill: &BookingPrefill, selected_dogs: Vec<Dog>, today: Date) -> Self {
        let tomorrow = today.tomorrow().unwrap_or(today);
        let min_date = match prefill.date {
            Some(date) if date < tomorrow => date,
            _ => tomorrow,
        };
        let duration = prefill.duration.unwrap_or(ServiceOption::HalfHour.duration());
        debug!("Starting booking wizard, earliest date {min_date}");

        Self {
            step: BookingStep::Plan,
            draft: BookingDraft {
                service: Service::for_duration(duration),
                date_time: DateTimeSelection {
                    date: Some(prefill.date.unwrap_or(tomorrow)),
                    time: Some(prefill.time.unwrap_or(Self::DEFAULT_TIME)),
                },
                address: prefill.address.clone().unwrap_or_default(),
                selected_dogs,
                instructions: prefill.notes.clone().unwrap_or_default(),
                selected_walker: None,
                total: 0.0,
            },
            min_date,
            walker_filter: WalkerFilter::default(),
            prefill_walker_id: prefill.walker_id,
            prefill_walker_applied: false,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Earliest date [`BookingWizard::set_date`] accepts.
    pub fn min_date(&self) -> Date {
        self.min_date
    }

    pub fn select_service(&mut self, option: ServiceOption) {
        self.draft.service = option.into();
    }

    /// Choose the walk date; dates before [`BookingWizard::min_date`] are
    /// rejected and leave the draft unchanged.
    pub fn set_date(&mut self, date: Date) -> Result<()> {
        if date < self.min_date {
            return Err(ValidationFailure::DateBeforeMinimum {
                min_date: self.min_date,
            }
            .into());
        }
        self.draft.date_time.date = Some(date);
        Ok(())
    }

    pub fn set_time(&mut self, time: Time) {
        self.draft.date_time.time = Some(time);
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.draft.address = address.into();
    }

    /// Add the dog to the selection, or remove it if already selected.
    /// Returns whether the dog is selected afterwards.
    pub fn toggle_dog(&mut self, dog: &Dog) -> bool {
        let before = self.draft.selected_dogs.len();
        self.draft.selected_dogs.retain(|selected| selected.id != dog.id);
        if self.draft.selected_dogs.len() == before {
            self.draft.selected_dogs.push(dog.clone());
            true
        } else {
            false
        }
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.draft.instructions = instructions.into();
    }

    pub fn select_walker(&mut self, walker: Walker) {
        self.draft.selected_walker = Some(walker);
    }

    pub fn walker_filter(&self) -> WalkerFilter {
        self.walker_filter
    }

    pub fn set_walker_filter(&mut self, filter: WalkerFilter) {
        self.walker_filter = filter;
    }

    /// Walkers to show on the walker step under the current filter chip.
    pub fn visible_walkers(&self, catalog: &[Walker]) -> Vec<Walker> {
        self.walker_filter.apply(catalog)
    }

    /// Check the plan step, returning the first thing to fix.
    pub fn validate_plan_step(&self) -> std::result::Result<(), ValidationFailure> {
        if self.draft.address.chars().count() < Self::MIN_ADDRESS_LEN {
            return Err(ValidationFailure::MissingAddress);
        }
        let DateTimeSelection { date, time } = self.draft.date_time;
        if date.is_none() || time.is_none() {
            return Err(ValidationFailure::MissingDateTime);
        }
        if self.draft.selected_dogs.is_empty() {
            return Err(ValidationFailure::NoDogsSelected);
        }
        Ok(())
    }

    pub fn is_plan_step_valid(&self) -> bool {
        self.validate_plan_step().is_ok()
    }

    /// Move forward one step.
    ///
    /// Plan to Walker requires a valid plan step and applies the prefilled
    /// walker (looked up in `walkers`) the first time. Walker to Review
    /// requires a selected walker and fixes the total. Advancing from
    /// Review stays on Review; use [`BookingWizard::confirm`] instead.
    pub fn advance(&mut self, walkers: &[Walker]) -> Result<BookingStep> {
        match self.step {
            BookingStep::Plan => {
                self.validate_plan_step()?;
                if !self.prefill_walker_applied {
                    self.prefill_walker_applied = true;
                    if let Some(walker) = self
                        .prefill_walker_id
                        .and_then(|id| walkers.iter().find(|walker| walker.id == id))
                    {
                        self.draft.selected_walker = Some(walker.clone());
                    }
                }
                self.step = BookingStep::Walker;
            }
            BookingStep::Walker => {
                if self.draft.selected_walker.is_none() {
                    return Err(ValidationFailure::NoWalkerSelected.into());
                }
                self.draft.total = self.draft.service.price;
                self.step = BookingStep::Review;
            }
            BookingStep::Review => {}
        }
        debug!("Booking wizard at step {:?}", self.step);
        Ok(self.step)
    }

    /// Step back, keeping everything already chosen.
    pub fn back(&mut self) -> BackOutcome {
        match self.step {
            BookingStep::Plan => BackOutcome::Abandoned,
            BookingStep::Walker => {
                self.step = BookingStep::Plan;
                BackOutcome::Moved(self.step)
            }
            BookingStep::Review => {
                self.step = BookingStep::Walker;
                BackOutcome::Moved(self.step)
            }
        }
    }

    /// Record the draft as an upcoming walk.
    ///
    /// # Errors
    ///
    /// `Validation(NotAtReview)` unless the wizard is on the review step.
    pub fn confirm(&self, store: &mut AppStore) -> Result<WalkRecord> {
        if self.step != BookingStep::Review {
            return Err(ValidationFailure::NotAtReview.into());
        }
        let walker = self
            .draft
            .selected_walker
            .clone()
            .ok_or(ValidationFailure::NoWalkerSelected)?;
        let (date, time) = match self.draft.date_time {
            DateTimeSelection {
                date: Some(date),
                time: Some(time),
            } => (date, time),
            _ => return Err(ValidationFailure::MissingDateTime.into()),
        };

        let mut walk = NewWalk::upcoming(
            date,
            time,
            self.draft.service.duration,
            walker,
            self.draft.selected_dogs.clone(),
            self.draft.total,
        );
        walk.address = Some(self.draft.address.clone());
        let instructions = self.draft.instructions.trim();
        if !instructions.is_empty() {
            walk.note = Some(instructions.to_string());
        }

        let record = store.add_walk(walk);
        info!("Booked walk {} for {} at ${:.2}", record.id, record.date, record.price);
        Ok(record)
    }
}
