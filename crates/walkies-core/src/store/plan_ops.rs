//! Recurring plan operations for the AppStore.

use std::sync::Arc;

use jiff::civil::Date;
use log::{debug, info};

use super::{replace_at, replace_with, AppStore};
use crate::{
    booking::BookingPrefill,
    error::{Result, ValidationFailure, WalkiesError},
    models::{PlanStatus, RecurringPlan, RecurringPlanUpdate, ResolvedPlan, WalkRecord, WalkSource},
    params::{CreateRecurringPlan, NewWalk, OccurrenceQuery, OccurrenceRef},
    schedule::{self, Occurrence},
};

impl AppStore {
    /// All recurring plans, in creation order.
    pub fn recurring_plans(&self) -> Arc<Vec<RecurringPlan>> {
        Arc::clone(&self.plans)
    }

    /// Retrieves a recurring plan by its ID.
    pub fn recurring_plan(&self, id: u64) -> Option<RecurringPlan> {
        self.plans.iter().find(|plan| plan.id == id).cloned()
    }

    /// Looks up a plan's walker and dogs in the current collections.
    pub fn resolve_plan(&self, plan: &RecurringPlan) -> ResolvedPlan {
        ResolvedPlan {
            plan: plan.clone(),
            walker: plan.walker_id.and_then(|id| self.walker(id)),
            dogs: self.dogs_by_ids(&plan.dog_ids),
        }
    }

    /// Creates an active plan from form input.
    ///
    /// Days are normalized (deduplicated, limited to `0..=6`, sorted), dog ids
    /// deduplicated and text fields trimmed. Missing time and duration fall
    /// back to 09:00 and 30 minutes. Use [`CreateRecurringPlan::validate`]
    /// first when the input comes from a user.
    pub fn create_recurring_plan(&mut self, params: CreateRecurringPlan) -> RecurringPlan {
        let plan = RecurringPlan {
            id: self.ids.next_id(),
            label: params.label.trim().to_string(),
            dog_ids: schedule::normalize_ids(&params.dog_ids),
            walker_id: params.walker_id,
            days_of_week: schedule::normalize_days(&params.days_of_week),
            time: params.time.unwrap_or(RecurringPlan::DEFAULT_TIME),
            duration: params
                .duration
                .filter(|&minutes| minutes > 0)
                .unwrap_or(RecurringPlan::DEFAULT_DURATION),
            start_date: params.start_date,
            address: params.address.trim().to_string(),
            notes: params.notes.trim().to_string(),
            status: PlanStatus::Active,
            last_confirmed_date: None,
        };
        debug!(
            "Creating recurring plan {} on days {:?} from {}",
            plan.id, plan.days_of_week, plan.start_date
        );
        let created = plan.clone();
        replace_with(&mut self.plans, |plans| plans.push(plan));
        created
    }

    /// Applies a partial update to a plan.
    ///
    /// Only fields present in `update` change, with the same normalization
    /// as [`AppStore::create_recurring_plan`].
    pub fn update_recurring_plan(&mut self, id: u64, update: &RecurringPlanUpdate) -> Result<RecurringPlan> {
        let index = self.plan_index(id)?;
        debug!("Updating recurring plan {id}");
        Ok(replace_at(&mut self.plans, index, |plan| update.apply_to(plan)))
    }

    /// Applies an update submitted from the schedule form.
    ///
    /// The update is tried on a copy first and the result must still pass
    /// [`RecurringPlan::validate_schedule`]; on failure the plan is left
    /// unchanged.
    pub fn edit_recurring_plan(&mut self, id: u64, update: &RecurringPlanUpdate) -> Result<RecurringPlan> {
        let mut edited = self
            .recurring_plan(id)
            .ok_or(WalkiesError::PlanNotFound { id })?;
        update.apply_to(&mut edited);
        edited.validate_schedule()?;
        self.update_recurring_plan(id, update)
    }

    /// Pauses an active plan or resumes a paused one; returns the new status.
    pub fn toggle_recurring_plan_status(&mut self, id: u64) -> Result<PlanStatus> {
        let index = self.plan_index(id)?;
        let updated = replace_at(&mut self.plans, index, |plan| {
            plan.status = plan.status.toggled();
        });
        info!("Recurring plan {id} is now {}", updated.status.as_str());
        Ok(updated.status)
    }

    /// Removes a plan. Walks already confirmed from it stay in history.
    pub fn delete_recurring_plan(&mut self, id: u64) -> Result<()> {
        self.plan_index(id)?;
        debug!("Deleting recurring plan {id}");
        replace_with(&mut self.plans, |plans| plans.retain(|plan| plan.id != id));
        Ok(())
    }

    /// Upcoming occurrences of a plan, relative to `query.from` or `today`.
    pub fn upcoming_occurrences(&self, query: &OccurrenceQuery, today: Date) -> Result<Vec<Occurrence>> {
        let plan = self
            .recurring_plan(query.plan_id)
            .ok_or(WalkiesError::PlanNotFound { id: query.plan_id })?;
        Ok(schedule::generate_occurrences(
            &plan,
            query.count,
            query.from.unwrap_or(today),
        ))
    }

    /// Books one occurrence of an active plan as an upcoming walk.
    ///
    /// The walk snapshots the plan's current walker and dogs and is priced
    /// with [`schedule::occurrence_price`]. The plan's `last_confirmed_date`
    /// is then set to the occurrence date.
    ///
    /// # Errors
    ///
    /// * `PlanNotFound` - no plan with that id
    /// * `PlanInactive` - the plan is paused
    /// * `WalkerNotFound` - the plan's walker is unset or no longer exists
    /// * `Validation(NoDogsSelected)` - none of the plan's dogs still exist
    pub fn confirm_occurrence(&mut self, occurrence: &OccurrenceRef) -> Result<WalkRecord> {
        let plan_id = occurrence.plan_id;
        let plan = self
            .recurring_plan(plan_id)
            .ok_or(WalkiesError::PlanNotFound { id: plan_id })?;
        if !plan.is_active() {
            return Err(WalkiesError::PlanInactive { id: plan_id });
        }

        let ResolvedPlan { walker, dogs, .. } = self.resolve_plan(&plan);
        let walker = walker.ok_or(WalkiesError::WalkerNotFound {
            id: plan.walker_id.unwrap_or_default(),
        })?;
        if dogs.is_empty() {
            return Err(ValidationFailure::NoDogsSelected.into());
        }

        let price = schedule::occurrence_price(walker.price, plan.duration);
        let mut walk = NewWalk::upcoming(occurrence.date, plan.time, plan.duration, walker, dogs, price);
        walk.address = Some(plan.address.clone());
        walk.note = Some(plan.notes.clone());
        walk.source = Some(WalkSource::RecurringPlan);

        let record = self.add_walk(walk);
        self.update_recurring_plan(plan_id, &RecurringPlanUpdate::confirmed_on(occurrence.date))?;
        info!("Confirmed plan {plan_id} occurrence on {} as walk {}", occurrence.date, record.id);
        Ok(record)
    }

    /// Prefill for reviewing one occurrence in the booking wizard instead of
    /// confirming it directly.
    pub fn review_occurrence(&self, occurrence: &OccurrenceRef) -> Result<BookingPrefill> {
        let plan = self
            .recurring_plan(occurrence.plan_id)
            .ok_or(WalkiesError::PlanNotFound {
                id: occurrence.plan_id,
            })?;
        Ok(BookingPrefill::from_occurrence(&plan, occurrence.date))
    }

    fn plan_index(&self, id: u64) -> Result<usize> {
        self.plans
            .iter()
            .position(|plan| plan.id == id)
            .ok_or(WalkiesError::PlanNotFound { id })
    }
}
