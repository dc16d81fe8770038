//! Property-based tests for validation and transitions
//!
//! These tests verify key invariants hold across generated slot sets.

use super::*;
use crate::booking::{
    validate, Catalog, ValidationResult, CURRENT_RESERVATION_KEY, DEFAULT_MOVIES,
    DEFAULT_THEATERS, LAST_CONFIRMED_RESERVATION_KEY,
};
use crate::lex::{ConfirmationStatus, DialogAction, SessionAttributes, SlotName, Slots};
use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn iso(offset_days: i64) -> String {
    (today() + TimeDelta::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}

fn run(state: &DialogState, event: Event) -> TransitionResult {
    let catalog = Catalog::default();
    let context = TurnContext::new("BookMovie", today(), &catalog);
    transition(state, &context, event)
}

fn violated_slot(result: &ValidationResult) -> Option<SlotName> {
    match result {
        ValidationResult::Valid => None,
        ValidationResult::Invalid { violated_slot, .. } => Some(*violated_slot),
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// Substring of an allowed title, with its case scrambled
fn arb_catalog_fragment(entries: &'static [&'static str]) -> impl Strategy<Value = String> {
    (0..entries.len(), any::<prop::sample::Index>(), any::<bool>()).prop_map(
        move |(which, start, upper)| {
            let chars: Vec<char> = entries[which].chars().collect();
            let from = start.index(chars.len());
            let fragment: String = chars[from..].iter().collect();
            if upper {
                fragment.to_uppercase()
            } else {
                fragment.to_lowercase()
            }
        },
    )
}

fn arb_mobile() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{10,11}",
        "\\+[0-9]{1,3}[0-9]{10,11}",
    ]
}

fn arb_optional<S: Strategy<Value = String>>(s: S) -> impl Strategy<Value = Option<String>> {
    prop::option::of(s)
}

/// Slot sets where every filled slot is valid
fn arb_valid_slots() -> impl Strategy<Value = Slots> {
    (
        arb_optional(arb_catalog_fragment(DEFAULT_MOVIES)),
        arb_optional(arb_catalog_fragment(DEFAULT_THEATERS)),
        arb_optional((0i64..30).prop_map(iso)),
        arb_optional("[0-2][0-9]:[0-5][0-9]"),
        arb_optional((1i64..=10).prop_map(|n| n.to_string())),
        arb_optional(arb_mobile()),
    )
        .prop_map(|(movie, theater, date, time, count, mobile)| {
            let mut slots = Slots::unfilled();
            let fields = [
                (SlotName::MovieName, movie),
                (SlotName::TheaterName, theater),
                (SlotName::MovieDate, date),
                (SlotName::MovieTime, time),
                (SlotName::TicketCount, count),
                (SlotName::Mobile, mobile),
            ];
            for (name, value) in fields {
                if let Some(value) = value {
                    slots.set(name, value);
                }
            }
            slots
        })
}

fn arb_confirmation() -> impl Strategy<Value = ConfirmationStatus> {
    prop_oneof![
        Just(ConfirmationStatus::None),
        Just(ConfirmationStatus::Confirmed),
        Just(ConfirmationStatus::Denied),
    ]
}

// ============================================================================
// Validator Properties
// ============================================================================

proptest! {
    #[test]
    fn valid_slots_always_pass(slots in arb_valid_slots()) {
        prop_assert_eq!(validate(&slots, &Catalog::default(), today()), ValidationResult::Valid);
    }

    #[test]
    fn unknown_movie_is_rejected(name in "[xyz]{3,12}", rest in arb_valid_slots()) {
        let slots = rest.with(SlotName::MovieName, name);
        let result = validate(&slots, &Catalog::default(), today());
        prop_assert_eq!(violated_slot(&result), Some(SlotName::MovieName));
    }

    #[test]
    fn past_dates_are_rejected(days_ago in 1i64..2000) {
        let slots = Slots::default().with(SlotName::MovieDate, iso(-days_ago));
        let result = validate(&slots, &Catalog::default(), today());
        prop_assert_eq!(violated_slot(&result), Some(SlotName::MovieDate));
    }

    #[test]
    fn dates_past_window_are_rejected(days_ahead in 30i64..2000) {
        let slots = Slots::default().with(SlotName::MovieDate, iso(days_ahead));
        let result = validate(&slots, &Catalog::default(), today());
        prop_assert_eq!(violated_slot(&result), Some(SlotName::MovieDate));
    }

    #[test]
    fn ticket_count_outside_bounds_is_rejected(count in prop_oneof![-1000i64..1, 11i64..1000]) {
        let slots = Slots::default().with(SlotName::TicketCount, count.to_string());
        let result = validate(&slots, &Catalog::default(), today());
        prop_assert_eq!(violated_slot(&result), Some(SlotName::TicketCount));
    }

    #[test]
    fn short_mobile_numbers_are_rejected(mobile in "[0-9]{1,9}") {
        let slots = Slots::default().with(SlotName::Mobile, mobile);
        let result = validate(&slots, &Catalog::default(), today());
        prop_assert_eq!(violated_slot(&result), Some(SlotName::Mobile));
    }
}

// ============================================================================
// Transition Properties
// ============================================================================

proptest! {
    #[test]
    fn valid_dialog_turn_always_delegates(
        slots in arb_valid_slots(),
        confirmation in arb_confirmation(),
    ) {
        let result = run(&DialogState::default(), Event::DialogCodeHook {
            slots: slots.clone(),
            confirmation_status: confirmation,
        });

        match result.response.dialog_action {
            DialogAction::Delegate { slots: echoed } => prop_assert_eq!(echoed, slots),
            other => prop_assert!(false, "expected Delegate, got {:?}", other),
        }
        prop_assert!(result.response.session_attributes.contains_key(CURRENT_RESERVATION_KEY));

        let expected_effects = usize::from(confirmation == ConfirmationStatus::Confirmed);
        prop_assert_eq!(result.effects.len(), expected_effects);
    }

    #[test]
    fn invalid_slot_is_always_the_one_elicited(
        slots in arb_valid_slots(),
        count in 11i64..100,
        confirmation in arb_confirmation(),
    ) {
        let slots = slots.with(SlotName::TicketCount, count.to_string());
        let result = run(&DialogState::default(), Event::DialogCodeHook {
            slots,
            confirmation_status: confirmation,
        });

        prop_assert!(result.effects.is_empty());
        match result.response.dialog_action {
            DialogAction::ElicitSlot { slot_to_elicit, slots, .. } => {
                prop_assert_eq!(slot_to_elicit, SlotName::TicketCount);
                prop_assert_eq!(slots.get(SlotName::TicketCount), None);
            }
            other => prop_assert!(false, "expected ElicitSlot, got {:?}", other),
        }
    }

    #[test]
    fn fulfillment_always_closes(
        slots in arb_valid_slots(),
        extra_key in "[a-z]{1,8}",
    ) {
        let state = DialogState::new(SessionAttributes::from([
            (CURRENT_RESERVATION_KEY.to_string(), "{}".to_string()),
            (format!("x-{extra_key}"), "kept".to_string()),
        ]));
        let result = run(&state, Event::FulfillmentCodeHook { slots });

        prop_assert!(
            matches!(result.response.dialog_action, DialogAction::Close { .. }),
            "expected Close, got {:?}",
            result.response.dialog_action
        );
        let attrs = &result.response.session_attributes;
        prop_assert!(!attrs.contains_key(CURRENT_RESERVATION_KEY));
        prop_assert!(attrs.contains_key(LAST_CONFIRMED_RESERVATION_KEY));
        prop_assert_eq!(attrs.get(&format!("x-{extra_key}")).map(String::as_str), Some("kept"));
        prop_assert!(result.effects.is_empty());
    }
}
