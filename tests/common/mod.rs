#![allow(dead_code)]

use flagstate::core::{RawStates, StateContainer};
use flagstate::FlagStateMachine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Enter(u32),
    Exit(u32),
    Added(u32),
    Removed(u32),
}

/// Owner over raw 32-bit masks that records every callback.
#[derive(Debug, Default)]
pub struct Recorder {
    pub states: StateContainer<RawStates>,
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn new(bits: u32) -> Self {
        Self {
            states: StateContainer::from_flags(raw(bits)),
            events: Vec::new(),
        }
    }

    pub fn added(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Added(bits) => Some(*bits),
                _ => None,
            })
            .collect()
    }

    pub fn removed(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Removed(bits) => Some(*bits),
                _ => None,
            })
            .collect()
    }
}

impl FlagStateMachine for Recorder {
    type Flags = RawStates;

    fn container(&self) -> &StateContainer<RawStates> {
        &self.states
    }

    fn container_mut(&mut self) -> &mut StateContainer<RawStates> {
        &mut self.states
    }

    fn on_enter_state(&mut self, state: RawStates) {
        self.events.push(Event::Enter(state.bits()));
    }

    fn on_exit_state(&mut self, state: RawStates) {
        self.events.push(Event::Exit(state.bits()));
    }

    fn on_states_added(&mut self, added: RawStates) {
        self.events.push(Event::Added(added.bits()));
    }

    fn on_states_removed(&mut self, removed: RawStates) {
        self.events.push(Event::Removed(removed.bits()));
    }
}

pub fn raw(bits: u32) -> RawStates {
    RawStates::from_bits_retain(bits)
}
