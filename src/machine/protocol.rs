//! Capability traits owners implement to become state machines.
//!
//! An owner exposes its [`StateContainer`] and receives callbacks. The
//! transition operations themselves live in extension traits that are
//! implemented for every owner automatically.

use crate::core::{State, StateContainer, StateFlags};

/// Bitmask state machine capability.
///
/// Callback order within one operation is fixed: exit, enter, added,
/// removed. `reset_states` and `remove_and_add_states` fire removed before
/// added. Operations that only add or only remove fire just that callback.
///
/// Callbacks run synchronously on the caller's thread and may themselves
/// start another transition; the nested one observes the outer write.
///
/// # Example
///
/// ```rust
/// use flagstate::core::StateContainer;
/// use flagstate::{FlagStateMachine, FlagTransitions};
///
/// bitflags::bitflags! {
///     #[derive(Clone, Copy, Debug, PartialEq, Eq)]
///     struct Senses: u32 {
///         const HEARD = 1 << 0;
///         const SEEN = 1 << 1;
///     }
/// }
///
/// struct Sentry {
///     senses: StateContainer<Senses>,
///     alarms: u32,
/// }
///
/// impl FlagStateMachine for Sentry {
///     type Flags = Senses;
///
///     fn container(&self) -> &StateContainer<Senses> {
///         &self.senses
///     }
///
///     fn container_mut(&mut self) -> &mut StateContainer<Senses> {
///         &mut self.senses
///     }
///
///     fn on_enter_state(&mut self, _state: Senses) {}
///     fn on_exit_state(&mut self, _state: Senses) {}
///
///     fn on_states_added(&mut self, added: Senses) {
///         if added.contains(Senses::SEEN) {
///             self.alarms += 1;
///         }
///     }
///
///     fn on_states_removed(&mut self, _removed: Senses) {}
/// }
///
/// let mut sentry = Sentry { senses: StateContainer::empty(), alarms: 0 };
/// sentry.add_states(Senses::SEEN);
/// sentry.add_states(Senses::SEEN);
/// assert_eq!(sentry.alarms, 1);
/// ```
pub trait FlagStateMachine {
    /// Flag set held by this machine.
    type Flags: StateFlags;

    fn container(&self) -> &StateContainer<Self::Flags>;

    fn container_mut(&mut self) -> &mut StateContainer<Self::Flags>;

    /// A full replacement made `state` the current state.
    fn on_enter_state(&mut self, state: Self::Flags);

    /// A full replacement moved away from `state`.
    fn on_exit_state(&mut self, state: Self::Flags);

    /// Bits in `added` went from unset to set.
    fn on_states_added(&mut self, added: Self::Flags);

    /// Bits in `removed` went from set to unset.
    fn on_states_removed(&mut self, removed: Self::Flags);
}

/// Discrete state machine capability.
///
/// Only one value is active at a time, so only exit and enter exist.
pub trait FiniteStateMachine {
    type State: State;

    fn container(&self) -> &StateContainer<Self::State>;

    fn container_mut(&mut self) -> &mut StateContainer<Self::State>;

    /// `state` became the current state.
    fn on_enter_state(&mut self, state: &Self::State);

    /// `state` is being replaced. The container still holds it as current.
    fn on_exit_state(&mut self, state: &Self::State);
}
