//! Turnstile State Machine
//!
//! This example demonstrates the generic engine with a non-email table,
//! plus snapshotting a run to JSON and resuming it.
//!
//! Key concepts:
//! - Declaring states and symbols with the enum macros
//! - Building a validated machine from a declarative table
//! - Step tracing and snapshots
//!
//! Run with: cargo run --example turnstile

use mailsift::builder::FsmBuilder;
use mailsift::snapshot::Snapshot;
use mailsift::{state_enum, symbol_enum, transition_table, Fsm};

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

symbol_enum! {
    enum Input {
        Coin,
        Push,
    }
}

fn turnstile() -> Fsm<Turnstile, Input> {
    FsmBuilder::new()
        .states([Turnstile::Locked, Turnstile::Unlocked])
        .start(Turnstile::Locked)
        .accepting(Turnstile::Locked)
        .rules(transition_table! {
            (Turnstile::Locked, Input::Coin) => Turnstile::Unlocked,
            (Turnstile::Unlocked, Input::Push) => Turnstile::Locked,
        })
        .build()
        .expect("turnstile table is well-formed")
}

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let mut machine = turnstile();
    println!("Initial state: {:?}", machine.current_state());

    for input in [Input::Push, Input::Coin, Input::Coin, Input::Push] {
        let state = *machine.step(input);
        println!("  {input:?} -> {state:?}");
    }

    println!("\nEffective steps (missing entries left no record):");
    for record in machine.trace().records() {
        println!("  {:?} --{:?}--> {:?}", record.from, record.via, record.to);
    }

    let snapshot = Snapshot::capture(&machine);
    let json = snapshot.to_json().expect("snapshot serializes");
    println!("\nSnapshot: {json}");

    let mut resumed = turnstile();
    snapshot
        .restore_into(&mut resumed)
        .expect("snapshot restores");
    println!(
        "Resumed machine is at {:?}, accepting: {}",
        resumed.current_state(),
        resumed.is_accepting()
    );

    println!("\n=== Example Complete ===");
}
