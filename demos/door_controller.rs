//! Door Controller
//!
//! This example demonstrates a discrete state machine and checkpointing.
//!
//! Key concepts:
//! - Declaring states with `state_enum!`
//! - Exit/enter callbacks around a single active state
//! - Returning to the previous state
//! - Saving and restoring a container without re-running callbacks
//!
//! Run with: cargo run --example door_controller

use flagstate::builder::ContainerBuilder;
use flagstate::checkpoint::{Checkpoint, CheckpointFormat};
use flagstate::core::{State, StateContainer, StateHistory};
use flagstate::{state_enum, FiniteStateMachine, FiniteTransitions};

state_enum! {
    enum Door {
        #[default]
        Closed,
        Opening,
        Open,
        Locked,
    }
}

struct Controller {
    door: StateContainer<Door>,
}

impl FiniteStateMachine for Controller {
    type State = Door;

    fn container(&self) -> &StateContainer<Door> {
        &self.door
    }

    fn container_mut(&mut self) -> &mut StateContainer<Door> {
        &mut self.door
    }

    fn on_enter_state(&mut self, state: &Door) {
        println!("  enter {}", state.name());
    }

    fn on_exit_state(&mut self, state: &Door) {
        println!("  exit  {}", state.name());
    }
}

fn main() {
    println!("=== Door Controller Example ===\n");

    let door = ContainerBuilder::new()
        .initial(Door::Closed)
        .when(|d: &Door| *d != Door::Opening)
        .build()
        .unwrap();
    let mut controller = Controller { door };
    let mut history = StateHistory::new();

    history = history.record(controller.change_state(Door::Opening));
    history = history.record(controller.change_state(Door::Open));
    history = history.record(controller.change_state(Door::Locked));

    println!("\nUnlock by returning to the previous state:");
    history = history.record(controller.return_to_previous_state());

    let bytes = Checkpoint::capture(controller.container(), &history)
        .encode(CheckpointFormat::Json)
        .unwrap();
    println!("\nCheckpoint: {} bytes of JSON", bytes.len());

    let (door, restored_history) = Checkpoint::<Door>::decode(CheckpointFormat::Json, &bytes)
        .unwrap()
        .restore()
        .unwrap();
    let restored = Controller { door };

    println!("Restored state: {}", restored.current_state().name());
    println!("Restored previous: {}", restored.previous_state().name());
    println!("Transitions: {}", restored_history.transitions().len());

    println!("\n=== Example Complete ===");
}
