//! Current/previous state storage owned by a state machine.

use super::flags::StateFlags;
use super::guard::Guard;
use serde::{Deserialize, Serialize};
use std::mem;

/// Holds the current state and the state it replaced.
///
/// A container is plain data. Owners embed one and expose it through
/// [`crate::FlagStateMachine`] or [`crate::FiniteStateMachine`]; the
/// transition engines are the only code that writes to it.
///
/// `previous_state` starts as the empty flag set (or `T::default()`), so
/// returning to the previous state on a fresh container is well defined.
///
/// # Example
///
/// ```rust
/// use flagstate::core::{RawStates, StateContainer};
///
/// let container = StateContainer::from_flags(RawStates::from_bits_retain(0b0010));
/// assert_eq!(container.state().bits(), 0b0010);
/// assert!(container.previous_state().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateContainer<T> {
    state: T,
    previous_state: T,
}

impl<T> StateContainer<T> {
    /// Create a container with an explicit previous state.
    pub fn with_previous(state: T, previous_state: T) -> Self {
        Self {
            state,
            previous_state,
        }
    }

    /// The current state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// The state held immediately before the last transition.
    pub fn previous_state(&self) -> &T {
        &self.previous_state
    }

    /// Check the current state against a guard (pure).
    pub fn satisfies(&self, guard: &Guard<T>) -> bool {
        guard.check(&self.state)
    }

    /// Split into `(state, previous_state)`.
    pub fn into_parts(self) -> (T, T) {
        (self.state, self.previous_state)
    }

    /// Move `next` in as the current state; the old current becomes previous.
    pub(crate) fn advance(&mut self, next: T) {
        self.previous_state = mem::replace(&mut self.state, next);
    }

    /// Swap current and previous.
    pub(crate) fn swap(&mut self) {
        mem::swap(&mut self.state, &mut self.previous_state);
    }

    pub(crate) fn set_state(&mut self, state: T) {
        self.state = state;
    }
}

impl<T: Clone> StateContainer<T> {
    /// Snapshot the current state into `previous_state` without changing it.
    pub(crate) fn remember_current(&mut self) {
        self.previous_state = self.state.clone();
    }
}

impl<T: Default> StateContainer<T> {
    /// Create a container whose previous state is `T::default()`.
    pub fn new(initial: T) -> Self {
        Self::with_previous(initial, T::default())
    }
}

impl<T: Default> Default for StateContainer<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<F: StateFlags> StateContainer<F> {
    /// Container with no bits set, now or previously.
    pub fn empty() -> Self {
        Self::with_previous(F::empty(), F::empty())
    }

    /// Create a flag container whose previous state is the empty set.
    pub fn from_flags(initial: F) -> Self {
        Self::with_previous(initial, F::empty())
    }

    /// Zero the current state. `previous_state` is left as it was.
    pub fn clear(&mut self) {
        self.state = F::empty();
    }
}
