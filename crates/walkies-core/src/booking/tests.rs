use jiff::civil::{date, time, Date};

use super::*;
use crate::{models::WalkStatus, params::OccurrenceRef, store::StoreBuilder};

const TODAY: Date = date(2025, 9, 17);

fn demo_store() -> AppStore {
    StoreBuilder::new()
        .with_demo_data()
        .build()
        .expect("demo data loads")
}

fn ready_wizard(store: &AppStore) -> BookingWizard {
    let mut wizard = BookingWizard::new(TODAY);
    wizard.set_address("123 Main St");
    wizard.toggle_dog(&store.dog(1).expect("Buddy"));
    wizard
}

#[test]
fn test_defaults() {
    let wizard = BookingWizard::new(TODAY);
    let draft = wizard.draft();

    assert_eq!(wizard.step(), BookingStep::Plan);
    assert_eq!(wizard.min_date(), date(2025, 9, 18));
    assert_eq!(draft.date_time.date, Some(date(2025, 9, 18)));
    assert_eq!(draft.date_time.time, Some(time(10, 0, 0, 0)));
    assert_eq!(draft.service.duration, 30);
    assert_eq!(draft.service.price, 25.0);
    assert!(draft.selected_dogs.is_empty());
    assert!(draft.selected_walker.is_none());
    assert!(!wizard.is_plan_step_valid());
}

#[test]
fn test_address_must_be_longer_than_two_characters() {
    let store = demo_store();
    let mut wizard = ready_wizard(&store);

    wizard.set_address("ab");
    assert_eq!(wizard.validate_plan_step(), Err(ValidationFailure::MissingAddress));
    assert!(wizard.advance(&store.walkers()).is_err());
    assert_eq!(wizard.step(), BookingStep::Plan);

    wizard.set_address("123 Main St");
    assert!(wizard.is_plan_step_valid());
}

#[test]
fn test_address_length_counts_whitespace() {
    let store = demo_store();
    let mut wizard = ready_wizard(&store);

    wizard.set_address("   ");
    assert!(wizard.is_plan_step_valid());
    wizard.set_address(" a ");
    assert!(wizard.is_plan_step_valid());
    wizard.set_address("  ");
    assert_eq!(wizard.validate_plan_step(), Err(ValidationFailure::MissingAddress));
}

#[test]
fn test_plan_step_needs_a_dog() {
    let store = demo_store();
    let mut wizard = ready_wizard(&store);
    let buddy = store.dog(1).expect("Buddy");

    assert!(!wizard.toggle_dog(&buddy));
    assert_eq!(wizard.validate_plan_step(), Err(ValidationFailure::NoDogsSelected));
    assert!(wizard.toggle_dog(&buddy));
    assert!(wizard.is_plan_step_valid());
}

#[test]
fn test_walker_step_requires_selection() {
    let store = demo_store();
    let mut wizard = ready_wizard(&store);
    wizard.advance(&store.walkers()).expect("plan step valid");

    let err = wizard.advance(&store.walkers()).expect_err("no walker yet");
    assert!(err.is_validation());
    assert_eq!(wizard.step(), BookingStep::Walker);
}

#[test]
fn test_service_price_flows_into_total() {
    let store = demo_store();
    for (option, expected) in [(ServiceOption::HalfHour, 25.0), (ServiceOption::Hour, 40.0)] {
        let mut wizard = ready_wizard(&store);
        wizard.select_service(option);
        wizard.advance(&store.walkers()).expect("to walker");
        wizard.select_walker(store.walker(3).expect("Casey"));
        wizard.advance(&store.walkers()).expect("to review");
        assert_eq!(wizard.draft().total, expected);
    }
}

#[test]
fn test_set_date_rejects_dates_before_minimum() {
    let mut wizard = BookingWizard::new(TODAY);

    let err = wizard.set_date(TODAY).expect_err("today is too early");
    assert!(matches!(
        err,
        crate::WalkiesError::Validation(ValidationFailure::DateBeforeMinimum { .. })
    ));
    assert_eq!(wizard.draft().date_time.date, Some(date(2025, 9, 18)));

    wizard.set_date(date(2025, 9, 20)).expect("future date");
    assert_eq!(wizard.draft().date_time.date, Some(date(2025, 9, 20)));
}

#[test]
fn test_back_keeps_draft_and_abandons_from_plan() {
    let store = demo_store();
    let mut wizard = ready_wizard(&store);
    wizard.advance(&store.walkers()).expect("to walker");
    wizard.select_walker(store.walker(2).expect("Jordan"));
    wizard.advance(&store.walkers()).expect("to review");

    assert_eq!(wizard.back(), BackOutcome::Moved(BookingStep::Walker));
    assert_eq!(wizard.back(), BackOutcome::Moved(BookingStep::Plan));
    assert_eq!(wizard.back(), BackOutcome::Abandoned);
    assert_eq!(wizard.draft().address, "123 Main St");
    assert_eq!(wizard.draft().selected_walker.as_ref().map(|w| w.id), Some(2));
}

#[test]
fn test_confirm_only_from_review() {
    let mut store = demo_store();
    let wizard = ready_wizard(&store);
    let before = store.walk_history().len();

    let err = wizard.confirm(&mut store).expect_err("still on plan step");
    assert_eq!(err.to_string(), "Review the booking before confirming.");
    assert_eq!(store.walk_history().len(), before);
}

#[test]
fn test_confirm_prepends_upcoming_walk() {
    let mut store = demo_store();
    let mut wizard = ready_wizard(&store);
    wizard.set_instructions("  Side gate code 1234 ");
    wizard.advance(&store.walkers()).expect("to walker");
    wizard.select_walker(store.walker(1).expect("Alex"));
    wizard.advance(&store.walkers()).expect("to review");

    let walk = wizard.confirm(&mut store).expect("booked");
    assert_eq!(store.walk_history()[0].id, walk.id);
    assert_eq!(walk.status, WalkStatus::Upcoming);
    assert_eq!(walk.date, date(2025, 9, 18));
    assert_eq!(walk.time, Some(time(10, 0, 0, 0)));
    assert_eq!(walk.duration, Some(30));
    assert_eq!(walk.price, 25.0);
    assert_eq!(walk.address.as_deref(), Some("123 Main St"));
    assert_eq!(walk.note.as_deref(), Some("Side gate code 1234"));
    assert_eq!(walk.dog_names(), "Buddy");
    assert!(walk.source.is_none());
}

#[test]
fn test_prefill_from_plan_occurrence() {
    let store = demo_store();
    let prefill = store
        .review_occurrence(&OccurrenceRef {
            plan_id: 1,
            date: date(2025, 9, 19),
        })
        .expect("plan exists");
    let mut wizard = BookingWizard::with_prefill(&prefill, &store, TODAY);

    assert_eq!(wizard.draft().date_time.date, Some(date(2025, 9, 19)));
    assert_eq!(wizard.draft().date_time.time, Some(time(9, 0, 0, 0)));
    assert_eq!(wizard.draft().address, "123 Bark Ave");
    assert_eq!(wizard.draft().instructions, "Buddy likes a slow warm up.");
    assert_eq!(wizard.draft().selected_dogs.len(), 1);
    assert!(wizard.draft().selected_walker.is_none());

    wizard.advance(&store.walkers()).expect("to walker");
    assert_eq!(wizard.draft().selected_walker.as_ref().map(|w| w.id), Some(1));

    // the prefilled walker is applied once only
    wizard.select_walker(store.walker(3).expect("Casey"));
    wizard.back();
    wizard.advance(&store.walkers()).expect("to walker again");
    assert_eq!(wizard.draft().selected_walker.as_ref().map(|w| w.id), Some(3));
}

#[test]
fn test_prefill_date_lowers_minimum() {
    let prefill = BookingPrefill {
        date: Some(date(2025, 9, 15)),
        duration: Some(60),
        ..Default::default()
    };
    let wizard = BookingWizard::from_prefill(&prefill, Vec::new(), TODAY);

    assert_eq!(wizard.min_date(), date(2025, 9, 15));
    assert_eq!(wizard.draft().service.price, 40.0);
}

#[test]
fn test_visible_walkers_follow_filter() {
    let store = demo_store();
    let mut wizard = BookingWizard::new(TODAY);
    wizard.set_walker_filter(WalkerFilter::Favorites);

    let ids: Vec<u64> = wizard.visible_walkers(&store.walkers()).iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
