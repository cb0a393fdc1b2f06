//! Core state types and pure logic.
//!
//! This module contains the data the transition engines operate on:
//! - The `StateContainer` holding current and previous state
//! - Flag-set bounds and the untyped `RawStates` mask
//! - Pure added/removed diff computation
//! - The discrete `State` trait, guards and immutable history
//!
//! Nothing in this module fires notifications; that is the job of
//! [`crate::machine`].

mod container;
mod diff;
mod flags;
mod guard;
mod history;
mod state;

pub use container::StateContainer;
pub use diff::StateDiff;
pub use flags::{FlagSetExt, RawStates, StateFlags};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition, TransitionKind};
pub use state::State;
