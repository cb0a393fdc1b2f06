//! Flagstate: bitmask and discrete state machines
//!
//! Flagstate turns any owner type into a state machine by exposing a
//! [`StateContainer`] and implementing a small callback protocol. The
//! transition operations are provided by blanket extension traits, so owners
//! never inherit from a base type.
//!
//! # Core Concepts
//!
//! - **Container**: current state plus the state it replaced
//! - **Flag states**: any `bitflags` type; operations compute which bits were
//!   added or removed and notify the owner
//! - **Discrete states**: a single active value of a `State` type
//! - **Notification protocol**: exit, enter, added, removed, in that order
//!
//! # Example
//!
//! ```rust
//! use flagstate::core::StateContainer;
//! use flagstate::{FlagStateMachine, FlagTransitions};
//!
//! bitflags::bitflags! {
//!     #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//!     struct Ability: u32 {
//!         const IDLE = 1 << 1;
//!         const CASTING = 1 << 2;
//!         const STUNNED = 1 << 3;
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! struct Mage {
//!     ability: StateContainer<Ability>,
//!     log: Log,
//! }
//!
//! impl FlagStateMachine for Mage {
//!     type Flags = Ability;
//!
//!     fn container(&self) -> &StateContainer<Ability> {
//!         &self.ability
//!     }
//!
//!     fn container_mut(&mut self) -> &mut StateContainer<Ability> {
//!         &mut self.ability
//!     }
//!
//!     fn on_enter_state(&mut self, state: Ability) {
//!         self.log.0.push(format!("enter {state:?}"));
//!     }
//!
//!     fn on_exit_state(&mut self, state: Ability) {
//!         self.log.0.push(format!("exit {state:?}"));
//!     }
//!
//!     fn on_states_added(&mut self, added: Ability) {
//!         self.log.0.push(format!("added {added:?}"));
//!     }
//!
//!     fn on_states_removed(&mut self, removed: Ability) {
//!         self.log.0.push(format!("removed {removed:?}"));
//!     }
//! }
//!
//! let mut mage = Mage { ability: StateContainer::empty(), log: Log::default() };
//!
//! mage.change_state(Ability::IDLE);
//! mage.add_states(Ability::CASTING);
//! mage.remove_and_add_states(Ability::CASTING, Ability::STUNNED);
//!
//! assert!(mage.has_states(Ability::IDLE | Ability::STUNNED));
//! assert!(!mage.has_any_of_the_states(Ability::CASTING));
//! assert_eq!(mage.previous_states(), Ability::IDLE | Ability::CASTING);
//! assert_eq!(mage.log.0.len(), 6);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{State, StateContainer, StateDiff, StateFlags, StateHistory};
pub use crate::machine::{
    FiniteStateMachine, FiniteTransitions, FlagStateMachine, FlagTransition, FlagTransitions,
};
