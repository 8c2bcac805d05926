mod common;

use std::sync::Arc;

use jiff::civil::{date, time};
use walkies_core::{
    display::{CreateResult, PlanOverviews},
    models::{PlanStatus, RecurringPlanUpdate, WalkSource},
    params::{CreateRecurringPlan, OccurrenceQuery, OccurrenceRef},
    ValidationFailure, WalkiesError,
};

use common::{create_demo_store, TODAY};

#[test]
#[allow(clippy::too_many_lines)]
fn test_recurring_plan_workflow() {
    let mut store = create_demo_store();

    // Schedule form validation comes first
    let mut input = CreateRecurringPlan::new(vec![], date(2025, 9, 20));
    assert_eq!(input.validate(), Err(ValidationFailure::NoDaysSelected));
    input.days_of_week = vec![6, 0];
    assert_eq!(input.validate(), Err(ValidationFailure::NoDogsSelected));
    input.dog_ids = vec![3];
    assert_eq!(input.validate(), Err(ValidationFailure::NoWalkerSelected));
    input.walker_id = Some(3);
    assert_eq!(input.validate(), Err(ValidationFailure::MissingAddress));
    input.address = "77 Park Row".to_string();
    input.time = Some(time(7, 30, 0, 0));
    input.duration = Some(60);
    assert_eq!(input.validate(), Ok(()));

    let plan = store.create_recurring_plan(input);
    assert_eq!(plan.days_of_week, vec![0, 6]);
    let output = CreateResult::new(store.resolve_plan(&plan)).to_string();
    assert!(output.starts_with(&format!("Created recurring plan with ID: {}", plan.id)));
    assert!(output.contains("Sun, Sat at 7:30 AM, 60 min"));

    // Weekend plan starting Saturday the 20th
    let query = OccurrenceQuery {
        plan_id: plan.id,
        count: 3,
        from: None,
    };
    let dates: Vec<_> = store
        .upcoming_occurrences(&query, TODAY)
        .expect("occurrences")
        .iter()
        .map(|occurrence| occurrence.date)
        .collect();
    assert_eq!(dates, vec![date(2025, 9, 20), date(2025, 9, 21), date(2025, 9, 27)]);

    // Confirm the first one: Casey at 22.00 for an hour is 35.20
    let walk = store
        .confirm_occurrence(&OccurrenceRef {
            plan_id: plan.id,
            date: dates[0],
        })
        .expect("confirm");
    assert_eq!(walk.price, 35.2);
    assert_eq!(walk.source, Some(WalkSource::RecurringPlan));
    assert_eq!(walk.dog_names(), "Max");

    // Confirming does not move the schedule forward
    let again = store.upcoming_occurrences(&query, TODAY).expect("occurrences");
    assert_eq!(again[0].date, date(2025, 9, 20));

    // Pause, try to confirm, resume
    assert_eq!(store.toggle_recurring_plan_status(plan.id).ok(), Some(PlanStatus::Paused));
    assert!(matches!(
        store.confirm_occurrence(&OccurrenceRef {
            plan_id: plan.id,
            date: dates[1],
        }),
        Err(WalkiesError::PlanInactive { .. })
    ));
    store.toggle_recurring_plan_status(plan.id).expect("resume");

    // Clearing the days leaves a plan that never occurs
    store
        .update_recurring_plan(plan.id, &RecurringPlanUpdate {
            days_of_week: Some(vec![9]),
            ..Default::default()
        })
        .expect("update");
    assert!(store.upcoming_occurrences(&query, TODAY).expect("occurrences").is_empty());

    store.delete_recurring_plan(plan.id).expect("delete");
    assert!(store.recurring_plan(plan.id).is_none());
    assert_eq!(store.walk(walk.id).map(|w| w.id), Some(walk.id));
}

#[test]
fn test_plan_reads_follow_catalog_edits() {
    let mut store = create_demo_store();
    let before = store.plan_overviews(TODAY);

    store.toggle_walker_favorite(1).expect("walker 1");
    let after: PlanOverviews = store.plan_overviews(TODAY);

    let walker = |overviews: &PlanOverviews| {
        overviews[0]
            .resolved
            .walker
            .as_ref()
            .map(|walker| walker.favorite)
    };
    assert_eq!(walker(&before), Some(true));
    assert_eq!(walker(&after), Some(false));
}

#[test]
fn test_snapshots_are_shared_until_mutation() {
    let mut store = create_demo_store();
    let first = store.walk_history();
    let second = store.walk_history();
    assert!(Arc::ptr_eq(&first, &second));

    store
        .confirm_occurrence(&OccurrenceRef {
            plan_id: 1,
            date: date(2025, 9, 19),
        })
        .expect("confirm");
    assert!(!Arc::ptr_eq(&first, &store.walk_history()));
    assert_eq!(first.len(), 4);
    assert_eq!(store.walk_history().len(), 5);
}

#[test]
fn test_bad_fixture_json_is_reported() {
    let result = walkies_core::StoreBuilder::new()
        .with_fixtures_json("{\"dogs\": [{\"id\": \"one\"}]}")
        .build();
    assert!(matches!(result, Err(WalkiesError::Serialization { .. })));
}
