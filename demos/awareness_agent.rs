//! Awareness Agent
//!
//! This example drives an NPC's awareness flags through every bitmask
//! operation and prints the callbacks each one fires.
//!
//! Key concepts:
//! - Typed flag sets via `bitflags`
//! - Added/removed diffs computed by the engine
//! - Re-asserting active flags with `reset_states`
//! - Recording an audit trail with `StateHistory`
//!
//! Run with: cargo run --example awareness_agent

use flagstate::core::{StateContainer, StateHistory};
use flagstate::{FlagStateMachine, FlagTransitions};

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Awareness: u32 {
        const IDLE = 1 << 1;
        const INTRIGUED = 1 << 2;
        const ALERT = 1 << 3;
        const HUNTING = 1 << 4;
    }
}

struct Agent {
    name: &'static str,
    awareness: StateContainer<Awareness>,
}

impl FlagStateMachine for Agent {
    type Flags = Awareness;

    fn container(&self) -> &StateContainer<Awareness> {
        &self.awareness
    }

    fn container_mut(&mut self) -> &mut StateContainer<Awareness> {
        &mut self.awareness
    }

    fn on_enter_state(&mut self, state: Awareness) {
        println!("  [{}] enter   {:?}", self.name, state);
    }

    fn on_exit_state(&mut self, state: Awareness) {
        println!("  [{}] exit    {:?}", self.name, state);
    }

    fn on_states_added(&mut self, added: Awareness) {
        println!("  [{}] added   {:?}", self.name, added);
        if added.contains(Awareness::ALERT) {
            println!("  [{}] draws weapon", self.name);
        }
    }

    fn on_states_removed(&mut self, removed: Awareness) {
        println!("  [{}] removed {:?}", self.name, removed);
    }
}

fn main() {
    println!("=== Awareness Agent Example ===\n");

    let mut agent = Agent {
        name: "guard",
        awareness: StateContainer::empty(),
    };
    let mut history = StateHistory::new();

    println!("change_state(IDLE)");
    history = history.record(agent.change_state(Awareness::IDLE).record());

    println!("\nadd_states(INTRIGUED)");
    history = history.record(agent.add_states(Awareness::INTRIGUED).record());

    println!("\nadd_states(INTRIGUED) again - nothing fires");
    history = history.record(agent.add_states(Awareness::INTRIGUED).record());

    println!("\nremove_and_add_states(IDLE | INTRIGUED, ALERT)");
    history = history.record(
        agent
            .remove_and_add_states(Awareness::IDLE | Awareness::INTRIGUED, Awareness::ALERT)
            .record(),
    );

    println!("\nreset_states(ALERT) - listeners rerun");
    history = history.record(agent.reset_states(Awareness::ALERT).record());

    println!("\nchange_state(HUNTING)");
    history = history.record(agent.change_state(Awareness::HUNTING).record());

    println!("\nreturn_to_previous_state()");
    history = history.record(agent.return_to_previous_state().record());

    println!("\nCurrent:  {:?}", agent.current_states());
    println!("Previous: {:?}", agent.previous_states());
    println!("Alert?    {}", agent.has_state(Awareness::ALERT));

    println!("\nPath:");
    for state in history.get_path() {
        println!("  {state:?}");
    }

    println!("\n=== Example Complete ===");
}
