//! Bitmask transition engine.
//!
//! [`FlagTransition`] computes the outcome of an operation from plain values
//! (pure). [`FlagTransitions`] applies it to a [`FlagStateMachine`] and runs
//! the notification protocol.

use crate::core::{FlagSetExt, StateDiff, StateFlags, StateTransition, TransitionKind};
use crate::machine::protocol::FlagStateMachine;
use bitflags::Flags;

/// Outcome of one bitmask transition.
///
/// `from` is the state on entry and `to` the state on exit. For
/// [`TransitionKind::Reset`] the two are equal and `diff` holds the
/// re-asserted bits on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagTransition<F> {
    pub kind: TransitionKind,
    pub from: F,
    pub to: F,
    pub diff: StateDiff<F>,
}

impl<F: StateFlags> FlagTransition<F> {
    /// Full replacement of `current` by `next`.
    pub fn change(current: F, next: F) -> Self {
        Self {
            kind: TransitionKind::Change,
            from: current,
            to: next,
            diff: StateDiff::between(current, next),
        }
    }

    /// Union of `current` with `mask`. Only bits not already set count as added.
    pub fn add(current: F, mask: F) -> Self {
        Self {
            kind: TransitionKind::Add,
            from: current,
            to: current.union(mask),
            diff: StateDiff {
                added: mask.difference(current),
                removed: F::empty(),
            },
        }
    }

    /// Subtraction of `mask` from `current`. Only bits currently set count as removed.
    pub fn remove(current: F, mask: F) -> Self {
        Self {
            kind: TransitionKind::Remove,
            from: current,
            to: current.difference(mask),
            diff: StateDiff {
                added: F::empty(),
                removed: current.intersection(mask),
            },
        }
    }

    /// Re-assertion of the bits of `mask` that are set in `current`.
    pub fn reset(current: F, mask: F) -> Self {
        let reset = current.intersection(mask);
        Self {
            kind: TransitionKind::Reset,
            from: current,
            to: current,
            diff: StateDiff {
                added: reset,
                removed: reset,
            },
        }
    }

    /// `(current & ~remove) | add` as one step.
    ///
    /// Removed bits are those actually cleared (`current & remove & ~add`);
    /// added bits are those newly set (`~current & add`).
    pub fn remove_and_add(current: F, remove: F, add: F) -> Self {
        Self {
            kind: TransitionKind::RemoveAndAdd,
            from: current,
            to: current.difference(remove).union(add),
            diff: StateDiff {
                added: add.difference(current),
                removed: current.intersection(remove).difference(add),
            },
        }
    }

    /// Swap back from `current` to `previous`, diffed like a full replacement.
    pub fn return_to_previous(current: F, previous: F) -> Self {
        Self {
            kind: TransitionKind::ReturnToPrevious,
            from: current,
            to: previous,
            diff: StateDiff::between(current, previous),
        }
    }

    /// True when applying this transition fires at least one callback.
    pub fn notifies(&self) -> bool {
        self.kind.replaces_state() || !self.diff.is_empty()
    }

    /// Timestamped record for a [`crate::core::StateHistory`].
    pub fn record(&self) -> StateTransition<F> {
        StateTransition::now(self.kind, self.from, self.to)
    }

    fn trace(&self) {
        tracing::trace!(
            kind = ?self.kind,
            from = ?self.from,
            to = ?self.to,
            added = ?self.diff.added,
            removed = ?self.diff.removed,
            "flag transition"
        );
    }
}

fn fire_added<M: FlagStateMachine + ?Sized>(machine: &mut M, added: M::Flags) {
    if !added.is_empty() {
        machine.on_states_added(added);
    }
}

fn fire_removed<M: FlagStateMachine + ?Sized>(machine: &mut M, removed: M::Flags) {
    if !removed.is_empty() {
        machine.on_states_removed(removed);
    }
}

/// Transition operations for every [`FlagStateMachine`].
///
/// Implemented automatically; owners only implement the capability trait.
/// Each mutating operation writes `previous_state` before firing any
/// callback and returns the [`FlagTransition`] it applied.
pub trait FlagTransitions: FlagStateMachine {
    /// Replace the whole state with `next`.
    ///
    /// Always fires exit then enter; added and removed fire only when the
    /// respective diff is nonzero.
    fn change_state(&mut self, next: Self::Flags) -> FlagTransition<Self::Flags> {
        let transition = FlagTransition::change(self.current_states(), next);
        self.container_mut().advance(next);
        transition.trace();

        self.on_exit_state(transition.from);
        self.on_enter_state(transition.to);
        fire_added(self, transition.diff.added);
        fire_removed(self, transition.diff.removed);
        transition
    }

    /// Set every bit of `mask`. Fires added for newly set bits only.
    fn add_states(&mut self, mask: Self::Flags) -> FlagTransition<Self::Flags> {
        let transition = FlagTransition::add(self.current_states(), mask);
        self.container_mut().advance(transition.to);
        transition.trace();

        fire_added(self, transition.diff.added);
        transition
    }

    /// Clear every bit of `mask`. Fires removed for bits that were set.
    fn remove_states(&mut self, mask: Self::Flags) -> FlagTransition<Self::Flags> {
        let transition = FlagTransition::remove(self.current_states(), mask);
        self.container_mut().advance(transition.to);
        transition.trace();

        fire_removed(self, transition.diff.removed);
        transition
    }

    /// Fire removed then added for every bit of `mask` that is set.
    ///
    /// The state itself never changes. When no bit of `mask` is set nothing
    /// is written and nothing fires.
    fn reset_states(&mut self, mask: Self::Flags) -> FlagTransition<Self::Flags> {
        let transition = FlagTransition::reset(self.current_states(), mask);
        if transition.diff.is_empty() {
            return transition;
        }
        self.container_mut().remember_current();
        transition.trace();

        self.on_states_removed(transition.diff.removed);
        self.on_states_added(transition.diff.added);
        transition
    }

    /// Clear `remove` and set `add` in one step, with no notification in
    /// between. Fires removed, then added.
    fn remove_and_add_states(
        &mut self,
        remove: Self::Flags,
        add: Self::Flags,
    ) -> FlagTransition<Self::Flags> {
        let transition = FlagTransition::remove_and_add(self.current_states(), remove, add);
        self.container_mut().advance(transition.to);
        transition.trace();

        fire_removed(self, transition.diff.removed);
        fire_added(self, transition.diff.added);
        transition
    }

    /// Swap current and previous state, notifying like [`Self::change_state`].
    fn return_to_previous_state(&mut self) -> FlagTransition<Self::Flags> {
        let transition =
            FlagTransition::return_to_previous(self.current_states(), self.previous_states());
        self.container_mut().swap();
        transition.trace();

        self.on_exit_state(transition.from);
        self.on_enter_state(transition.to);
        fire_added(self, transition.diff.added);
        fire_removed(self, transition.diff.removed);
        transition
    }

    /// Zero the state without any notification.
    fn remove_all_flags(&mut self) {
        tracing::trace!(from = ?self.current_states(), "flags cleared");
        self.container_mut().clear();
    }

    fn current_states(&self) -> Self::Flags {
        *self.container().state()
    }

    fn previous_states(&self) -> Self::Flags {
        *self.container().previous_state()
    }

    /// True iff every bit of `mask` is set.
    fn has_state(&self, mask: Self::Flags) -> bool {
        self.current_states().has_flag(mask)
    }

    /// Alias of [`Self::has_state`] for multi-bit masks.
    fn has_states(&self, mask: Self::Flags) -> bool {
        self.has_state(mask)
    }

    /// True iff at least one bit of `mask` is set.
    fn has_any_of_the_states(&self, mask: Self::Flags) -> bool {
        self.current_states().has_any_flag(mask)
    }
}

impl<M: FlagStateMachine + ?Sized> FlagTransitions for M {}
