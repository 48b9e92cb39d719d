//! Property-based tests for the dispatcher and the reference turnstile.
//!
//! These tests use proptest to verify dispatch properties hold across
//! many randomly generated event sequences.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tabula::core::{Event, State};
use tabula::turnstile::{
    transition_table, Turnstile, TurnstileAction, TurnstileControls, TurnstileEvent,
    TurnstileState,
};

struct SilentControls;

impl TurnstileControls for SilentControls {
    fn alarm_on(&mut self) {}
    fn alarm_off(&mut self) {}
    fn lock(&mut self) {}
    fn unlock(&mut self) {}
    fn thankyou(&mut self) {}
}

#[derive(Default)]
struct RecordingControls {
    fired: Vec<&'static str>,
}

impl TurnstileControls for RecordingControls {
    fn alarm_on(&mut self) {
        self.fired.push("alarmOn");
    }

    fn alarm_off(&mut self) {
        self.fired.push("alarmOff");
    }

    fn lock(&mut self) {
        self.fired.push("lock");
    }

    fn unlock(&mut self) {
        self.fired.push("unlock");
    }

    fn thankyou(&mut self) {
        self.fired.push("thankyou");
    }
}

fn drive<C: TurnstileControls>(turnstile: &mut Turnstile<C>, event: &TurnstileEvent) {
    match event {
        TurnstileEvent::Reset => turnstile.reset(),
        TurnstileEvent::Pass => turnstile.pass(),
        TurnstileEvent::Coin => turnstile.coin(),
    }
}

/// Fold the reference table over an event sequence, treating unhandled
/// pairs as identity. This is the model the dispatcher must agree with.
fn fold_table(events: &[TurnstileEvent]) -> TurnstileState {
    let table = transition_table();
    let mut state = TurnstileState::Locked;
    for event in events {
        if let Some(entry) = table.lookup(&state, event) {
            state = entry.to.clone();
        }
    }
    state
}

fn handled_count(events: &[TurnstileEvent]) -> usize {
    let table = transition_table();
    let mut state = TurnstileState::Locked;
    let mut handled = 0;
    for event in events {
        if let Some(entry) = table.lookup(&state, event) {
            state = entry.to.clone();
            handled += 1;
        }
    }
    handled
}

fn control_name(action: &TurnstileAction) -> &'static str {
    match action {
        TurnstileAction::AlarmOn => "alarmOn",
        TurnstileAction::AlarmOff => "alarmOff",
        TurnstileAction::Lock => "lock",
        TurnstileAction::Unlock => "unlock",
        TurnstileAction::Thankyou => "thankyou",
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8) -> TurnstileEvent {
        match variant {
            0 => TurnstileEvent::Reset,
            1 => TurnstileEvent::Pass,
            _ => TurnstileEvent::Coin,
        }
    }
}

proptest! {
    #[test]
    fn dispatcher_state_equals_table_fold(
        events in prop::collection::vec(arbitrary_event(), 0..32)
    ) {
        let mut turnstile = Turnstile::new(SilentControls, |_, _| {});
        for event in &events {
            drive(&mut turnstile, event);
        }

        prop_assert_eq!(turnstile.state(), &fold_table(&events));
    }

    #[test]
    fn reset_always_yields_locked(
        events in prop::collection::vec(arbitrary_event(), 0..32)
    ) {
        let mut turnstile = Turnstile::new(SilentControls, |_, _| {});
        for event in &events {
            drive(&mut turnstile, event);
        }

        turnstile.reset();
        prop_assert_eq!(turnstile.state(), &TurnstileState::Locked);
    }

    #[test]
    fn unhandled_events_leave_state_unchanged(
        prefix in prop::collection::vec(arbitrary_event(), 0..16),
        probe in arbitrary_event()
    ) {
        let calls: Rc<RefCell<Vec<(String, String)>>> = Rc::new(RefCell::new(Vec::new()));
        let calls_in_hook = Rc::clone(&calls);

        let mut turnstile = Turnstile::new(SilentControls, move |state, event| {
            calls_in_hook
                .borrow_mut()
                .push((state.to_string(), event.to_string()));
        });

        for event in &prefix {
            drive(&mut turnstile, event);
        }
        calls.borrow_mut().clear();

        let state_before = turnstile.state().clone();
        let handled = transition_table().handles(&state_before, &probe);

        drive(&mut turnstile, &probe);

        if handled {
            prop_assert!(calls.borrow().is_empty());
        } else {
            prop_assert_eq!(turnstile.state(), &state_before);
            prop_assert_eq!(
                calls.borrow().clone(),
                vec![(state_before.name().to_string(), probe.name().to_string())]
            );
        }
    }

    #[test]
    fn actions_fire_in_declared_order(
        prefix in prop::collection::vec(arbitrary_event(), 0..16),
        probe in arbitrary_event()
    ) {
        let mut turnstile = Turnstile::new(RecordingControls::default(), |_, _| {});
        for event in &prefix {
            drive(&mut turnstile, event);
        }
        turnstile.controls_mut().fired.clear();

        let state_before = turnstile.state().clone();
        let expected: Vec<&'static str> = transition_table()
            .lookup(&state_before, &probe)
            .map(|entry| entry.actions.iter().map(control_name).collect())
            .unwrap_or_default();

        drive(&mut turnstile, &probe);

        prop_assert_eq!(turnstile.controls().fired.clone(), expected);
    }

    #[test]
    fn every_event_is_either_logged_or_routed_to_hook(
        events in prop::collection::vec(arbitrary_event(), 0..32)
    ) {
        let unhandled = Rc::new(RefCell::new(0usize));
        let unhandled_in_hook = Rc::clone(&unhandled);

        let mut turnstile = Turnstile::new(SilentControls, move |_, _| {
            *unhandled_in_hook.borrow_mut() += 1;
        });

        for event in &events {
            drive(&mut turnstile, event);
        }

        prop_assert_eq!(turnstile.log().records().len(), handled_count(&events));
        prop_assert_eq!(
            turnstile.log().records().len() + *unhandled.borrow(),
            events.len()
        );
    }
}
