//! Discrete transition engine.

use crate::core::{State, StateTransition, TransitionKind};
use crate::machine::protocol::FiniteStateMachine;

/// Transition operations for every [`FiniteStateMachine`].
///
/// # Example
///
/// ```rust
/// use flagstate::core::{State, StateContainer};
/// use flagstate::{FiniteStateMachine, FiniteTransitions};
///
/// #[derive(Clone, PartialEq, Debug, Default)]
/// enum Light {
///     #[default]
///     Off,
///     On,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// struct Lamp {
///     light: StateContainer<Light>,
/// }
///
/// impl FiniteStateMachine for Lamp {
///     type State = Light;
///
///     fn container(&self) -> &StateContainer<Light> {
///         &self.light
///     }
///
///     fn container_mut(&mut self) -> &mut StateContainer<Light> {
///         &mut self.light
///     }
///
///     fn on_enter_state(&mut self, _state: &Light) {}
///     fn on_exit_state(&mut self, _state: &Light) {}
/// }
///
/// let mut lamp = Lamp { light: StateContainer::new(Light::Off) };
/// lamp.change_state(Light::On);
/// lamp.return_to_previous_state();
///
/// assert_eq!(lamp.current_state(), &Light::Off);
/// assert_eq!(lamp.previous_state(), &Light::On);
/// ```
pub trait FiniteTransitions: FiniteStateMachine {
    /// Replace the current state with `next`.
    ///
    /// `previous_state` is written first, then exit fires while the old
    /// value is still current, then the new value is stored and enter fires.
    fn change_state(&mut self, next: Self::State) -> StateTransition<Self::State> {
        let current = self.current_state().clone();
        let transition = StateTransition::now(TransitionKind::Change, current, next);
        move_to(self, &transition);
        transition
    }

    /// Go back to the state held before the last transition.
    ///
    /// On a fresh container this is `State::default()`.
    fn return_to_previous_state(&mut self) -> StateTransition<Self::State> {
        let current = self.current_state().clone();
        let target = self.previous_state().clone();
        let transition = StateTransition::now(TransitionKind::ReturnToPrevious, current, target);
        move_to(self, &transition);
        transition
    }

    fn current_state(&self) -> &Self::State {
        self.container().state()
    }

    fn previous_state(&self) -> &Self::State {
        self.container().previous_state()
    }

    /// True when the current state equals `state`.
    fn is_in(&self, state: &Self::State) -> bool {
        self.current_state() == state
    }
}

impl<M: FiniteStateMachine + ?Sized> FiniteTransitions for M {}

fn move_to<M: FiniteStateMachine + ?Sized>(machine: &mut M, transition: &StateTransition<M::State>) {
    tracing::trace!(
        kind = ?transition.kind,
        from = transition.from.name(),
        to = transition.to.name(),
        "state transition"
    );

    machine.container_mut().remember_current();
    machine.on_exit_state(&transition.from);
    machine.container_mut().set_state(transition.to.clone());
    machine.on_enter_state(&transition.to);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateContainer;

    #[derive(Clone, PartialEq, Debug, Default)]
    enum Stance {
        #[default]
        Unassigned,
        Idle,
        Patrol,
        Attack,
    }

    impl State for Stance {
        fn name(&self) -> &str {
            match self {
                Self::Unassigned => "Unassigned",
                Self::Idle => "Idle",
                Self::Patrol => "Patrol",
                Self::Attack => "Attack",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        // (callback argument, container state, container previous) at call time
        Exit(Stance, Stance, Stance),
        Enter(Stance, Stance, Stance),
    }

    struct Soldier {
        stance: StateContainer<Stance>,
        events: Vec<Event>,
    }

    impl Soldier {
        fn new(initial: Stance) -> Self {
            Self {
                stance: StateContainer::new(initial),
                events: Vec::new(),
            }
        }
    }

    impl FiniteStateMachine for Soldier {
        type State = Stance;

        fn container(&self) -> &StateContainer<Stance> {
            &self.stance
        }

        fn container_mut(&mut self) -> &mut StateContainer<Stance> {
            &mut self.stance
        }

        fn on_enter_state(&mut self, state: &Stance) {
            let event = Event::Enter(
                state.clone(),
                self.stance.state().clone(),
                self.stance.previous_state().clone(),
            );
            self.events.push(event);
        }

        fn on_exit_state(&mut self, state: &Stance) {
            let event = Event::Exit(
                state.clone(),
                self.stance.state().clone(),
                self.stance.previous_state().clone(),
            );
            self.events.push(event);
        }
    }

    #[test]
    fn change_state_exits_before_storing_new_state() {
        let mut soldier = Soldier::new(Stance::Idle);

        soldier.change_state(Stance::Patrol);

        assert_eq!(
            soldier.events,
            vec![
                Event::Exit(Stance::Idle, Stance::Idle, Stance::Idle),
                Event::Enter(Stance::Patrol, Stance::Patrol, Stance::Idle),
            ]
        );
    }

    #[test]
    fn change_state_tracks_previous() {
        let mut soldier = Soldier::new(Stance::Idle);

        let transition = soldier.change_state(Stance::Attack);

        assert_eq!(transition.kind, TransitionKind::Change);
        assert_eq!(transition.from, Stance::Idle);
        assert_eq!(transition.to, Stance::Attack);
        assert!(soldier.is_in(&Stance::Attack));
        assert_eq!(soldier.previous_state(), &Stance::Idle);
    }

    #[test]
    fn return_to_previous_round_trips() {
        let mut soldier = Soldier::new(Stance::Idle);
        soldier.change_state(Stance::Patrol);
        soldier.events.clear();

        let transition = soldier.return_to_previous_state();

        assert_eq!(transition.kind, TransitionKind::ReturnToPrevious);
        assert_eq!(soldier.current_state(), &Stance::Idle);
        assert_eq!(soldier.previous_state(), &Stance::Patrol);
        assert_eq!(
            soldier.events,
            vec![
                Event::Exit(Stance::Patrol, Stance::Patrol, Stance::Patrol),
                Event::Enter(Stance::Idle, Stance::Idle, Stance::Patrol),
            ]
        );
    }

    #[test]
    fn return_to_previous_on_fresh_machine_uses_default() {
        let mut soldier = Soldier::new(Stance::Attack);

        soldier.return_to_previous_state();

        assert_eq!(soldier.current_state(), &Stance::Unassigned);
        assert_eq!(soldier.previous_state(), &Stance::Attack);
    }

    #[test]
    fn repeated_returns_toggle_between_two_states() {
        let mut soldier = Soldier::new(Stance::Idle);
        soldier.change_state(Stance::Patrol);

        soldier.return_to_previous_state();
        soldier.return_to_previous_state();

        assert_eq!(soldier.current_state(), &Stance::Patrol);
        assert_eq!(soldier.previous_state(), &Stance::Idle);
    }
}
