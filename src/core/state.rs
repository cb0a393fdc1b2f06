//! State trait for discrete state machines.
//!
//! Discrete machines hold exactly one active value at a time, with no
//! combination semantics. Any enum-like type implementing this trait can be
//! driven by [`crate::FiniteTransitions`].

use std::fmt::Debug;

/// Trait for discrete state machine states.
///
/// # Required Traits
///
/// - `Clone`: the engine snapshots the current value into `previous_state`
/// - `PartialEq`: states must be comparable for queries
/// - `Debug`: states must be debuggable for diagnostics
/// - `Default`: the value a fresh container reports as its previous state
///
/// # Example
///
/// ```rust
/// use flagstate::core::State;
///
/// #[derive(Clone, PartialEq, Debug, Default)]
/// enum GuardPost {
///     #[default]
///     Unassigned,
///     Patrolling,
///     Chasing,
/// }
///
/// impl State for GuardPost {
///     fn name(&self) -> &str {
///         match self {
///             Self::Unassigned => "Unassigned",
///             Self::Patrolling => "Patrolling",
///             Self::Chasing => "Chasing",
///         }
///     }
/// }
///
/// assert_eq!(GuardPost::default().name(), "Unassigned");
/// ```
pub trait State: Clone + PartialEq + Debug + Default {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
