//! Reference instantiation: a coin-operated turnstile.
//!
//! A two-coin turnstile with an alarm: two coins unlock the gate, a
//! pass while locked raises the alarm, and the alarming machine accepts
//! nothing but `Reset`. Further passage or coin attempts while alarming
//! are deliberately unhandled: the machine is already in an error
//! condition and only a reset may leave it.
//!
//! | Current State | Event | Next State | Actions (in order)  |
//! |---------------|-------|------------|---------------------|
//! | Locked        | Pass  | Alarming   | alarm_on            |
//! | Locked        | Coin  | FirstCoin  | -                   |
//! | Locked        | Reset | Locked     | lock                |
//! | Alarming      | Reset | Locked     | alarm_off, lock     |
//! | FirstCoin     | Pass  | Alarming   | alarm_on            |
//! | FirstCoin     | Coin  | Unlocked   | unlock              |
//! | FirstCoin     | Reset | Locked     | lock                |
//! | Unlocked      | Pass  | Locked     | lock                |
//! | Unlocked      | Coin  | Unlocked   | thankyou            |
//! | Unlocked      | Reset | Locked     | lock                |

use crate::core::DispatchLog;
use crate::dispatch::{ActionHandler, Dispatcher};
use crate::table::{TableBuilder, TableEntry, TransitionTable};
use crate::{action_enum, event_enum, state_enum};

state_enum! {
    /// The turnstile's closed state set. Initial state is `Locked`.
    pub enum TurnstileState {
        Locked,
        Alarming,
        FirstCoin,
        Unlocked,
    }
}

event_enum! {
    /// Inputs the turnstile responds to.
    pub enum TurnstileEvent {
        Reset,
        Pass,
        Coin,
    }
}

action_enum! {
    /// Side effects the turnstile can request from its controls.
    pub enum TurnstileAction {
        AlarmOn,
        AlarmOff,
        Lock,
        Unlock,
        Thankyou,
    }
}

/// Hardware-facing controls, one method per action.
///
/// Supplied by the embedding application; free to perform arbitrary
/// side effects. Every implementation doubles as an
/// [`ActionHandler<TurnstileAction>`] through the blanket impl below,
/// so a recording test double needs nothing beyond this trait.
pub trait TurnstileControls {
    fn alarm_on(&mut self);
    fn alarm_off(&mut self);
    fn lock(&mut self);
    fn unlock(&mut self);
    fn thankyou(&mut self);
}

impl<C: TurnstileControls> ActionHandler<TurnstileAction> for C {
    fn perform(&mut self, action: &TurnstileAction) {
        match action {
            TurnstileAction::AlarmOn => self.alarm_on(),
            TurnstileAction::AlarmOff => self.alarm_off(),
            TurnstileAction::Lock => self.lock(),
            TurnstileAction::Unlock => self.unlock(),
            TurnstileAction::Thankyou => self.thankyou(),
        }
    }
}

/// Build the reference transition table.
///
/// All (state, event) pairs absent from the table - notably
/// Alarming x Pass and Alarming x Coin - are unhandled and route to the
/// fallback hook without changing state.
pub fn transition_table() -> TransitionTable<TurnstileState, TurnstileEvent, TurnstileAction> {
    use TurnstileAction::*;
    use TurnstileEvent::*;
    use TurnstileState::*;

    TableBuilder::new()
        .entry(TableEntry::new(Locked, Pass, Alarming).action(AlarmOn))
        .entry(TableEntry::new(Locked, Coin, FirstCoin))
        .entry(TableEntry::new(Locked, Reset, Locked).action(Lock))
        .entry(TableEntry::new(Alarming, Reset, Locked).actions([AlarmOff, Lock]))
        .entry(TableEntry::new(FirstCoin, Pass, Alarming).action(AlarmOn))
        .entry(TableEntry::new(FirstCoin, Coin, Unlocked).action(Unlock))
        .entry(TableEntry::new(FirstCoin, Reset, Locked).action(Lock))
        .entry(TableEntry::new(Unlocked, Pass, Locked).action(Lock))
        .entry(TableEntry::new(Unlocked, Coin, Unlocked).action(Thankyou))
        .entry(TableEntry::new(Unlocked, Reset, Locked).action(Lock))
        .build()
        .expect("reference turnstile table is well-formed")
}

/// A turnstile machine with one submission method per event.
///
/// Starts `Locked` and never terminates; it simply stops receiving
/// events when the embedding application is done with it.
pub struct Turnstile<C: TurnstileControls> {
    dispatcher: Dispatcher<TurnstileState, TurnstileEvent, TurnstileAction, C>,
}

impl<C: TurnstileControls> Turnstile<C> {
    /// Create a turnstile in the `Locked` state.
    pub fn new<F>(controls: C, on_unhandled: F) -> Self
    where
        F: FnMut(&str, &str) + 'static,
    {
        Self {
            dispatcher: Dispatcher::new(
                transition_table(),
                TurnstileState::Locked,
                controls,
                on_unhandled,
            ),
        }
    }

    /// Submit a `Reset` event.
    pub fn reset(&mut self) {
        self.dispatcher.submit(TurnstileEvent::Reset);
    }

    /// Submit a `Pass` event.
    pub fn pass(&mut self) {
        self.dispatcher.submit(TurnstileEvent::Pass);
    }

    /// Submit a `Coin` event.
    pub fn coin(&mut self) {
        self.dispatcher.submit(TurnstileEvent::Coin);
    }

    /// Get the current state.
    pub fn state(&self) -> &TurnstileState {
        self.dispatcher.current_state()
    }

    /// Get the log of handled transitions.
    pub fn log(&self) -> &DispatchLog<TurnstileState, TurnstileEvent> {
        self.dispatcher.log()
    }

    /// Get the controls.
    pub fn controls(&self) -> &C {
        self.dispatcher.handler()
    }

    /// Get the controls mutably.
    pub fn controls_mut(&mut self) -> &mut C {
        self.dispatcher.handler_mut()
    }
}
