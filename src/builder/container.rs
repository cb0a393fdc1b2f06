//! Builder for constructing state containers.

use crate::builder::error::BuildError;
use crate::core::{Guard, StateContainer, StateFlags};
use std::fmt::Debug;

/// Builder for [`StateContainer`] with a fluent API.
///
/// The initial state is required. The previous state defaults to the empty
/// flag set (`build_flags`) or `T::default()` (`build`). An optional guard
/// must admit both values.
///
/// # Example
///
/// ```rust
/// use flagstate::builder::ContainerBuilder;
/// use flagstate::core::RawStates;
///
/// let container = ContainerBuilder::new()
///     .initial(RawStates::from_bits_retain(0b0010))
///     .when(|s: &RawStates| s.bits() < 0x100)
///     .build_flags()
///     .unwrap();
///
/// assert_eq!(container.state().bits(), 0b0010);
/// ```
#[derive(Debug)]
pub struct ContainerBuilder<T> {
    initial: Option<T>,
    previous: Option<T>,
    guard: Option<Guard<T>>,
}

impl<T: Debug> ContainerBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            previous: None,
            guard: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: T) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the previous state (optional).
    pub fn previous(mut self, state: T) -> Self {
        self.previous = Some(state);
        self
    }

    /// Require both states to pass `guard`.
    pub fn admit(mut self, guard: Guard<T>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Require both states to pass a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.admit(Guard::new(predicate))
    }

    fn finish(self, fallback: impl FnOnce() -> T) -> Result<StateContainer<T>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let previous = self.previous.unwrap_or_else(fallback);

        if let Some(guard) = &self.guard {
            for (role, state) in [("initial", &initial), ("previous", &previous)] {
                if !guard.check(state) {
                    return Err(BuildError::RejectedState {
                        role,
                        state: format!("{state:?}"),
                    });
                }
            }
        }

        Ok(StateContainer::with_previous(initial, previous))
    }
}

impl<T: Debug + Default> ContainerBuilder<T> {
    /// Build the container, defaulting the previous state to `T::default()`.
    pub fn build(self) -> Result<StateContainer<T>, BuildError> {
        self.finish(T::default)
    }
}

impl<F: StateFlags> ContainerBuilder<F> {
    /// Build a flag container, defaulting the previous state to the empty set.
    pub fn build_flags(self) -> Result<StateContainer<F>, BuildError> {
        self.finish(F::empty)
    }
}

impl<T: Debug> Default for ContainerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
