//! Coin-Operated Turnstile
//!
//! This example drives the crate's reference machine: a two-coin
//! turnstile with an alarm state.
//!
//! Key concepts:
//! - A static transition table as the single source of behavior
//! - Side effects behind a controls trait
//! - Unhandled events routed to a fallback hook, state unchanged
//!
//! Run with: cargo run --example turnstile

use tabula::turnstile::{Turnstile, TurnstileControls};

struct ConsoleControls;

impl TurnstileControls for ConsoleControls {
    fn alarm_on(&mut self) {
        println!("  [action] alarm on");
    }

    fn alarm_off(&mut self) {
        println!("  [action] alarm off");
    }

    fn lock(&mut self) {
        println!("  [action] lock the gate");
    }

    fn unlock(&mut self) {
        println!("  [action] unlock the gate");
    }

    fn thankyou(&mut self) {
        println!("  [action] thank you, coin kept");
    }
}

fn main() {
    println!("=== Coin-Operated Turnstile ===\n");

    let mut turnstile = Turnstile::new(ConsoleControls, |state, event| {
        println!("  [unhandled] {event} ignored while {state}");
    });

    println!("A paying customer:");
    turnstile.coin();
    turnstile.coin();
    turnstile.pass();
    println!("  state: {:?}\n", turnstile.state());

    println!("A fare dodger:");
    turnstile.pass();
    println!("  state: {:?}", turnstile.state());
    turnstile.coin();
    println!("  state: {:?}\n", turnstile.state());

    println!("The attendant resets the machine:");
    turnstile.reset();
    println!("  state: {:?}\n", turnstile.state());

    println!("Path traversed: {:?}", turnstile.log().path());
}
