//! Guard predicates over states.
//!
//! Guards are pure boolean functions describing which states are acceptable.
//! The container builder uses them to admit initial states.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over a state value.
///
/// # Example
///
/// ```rust
/// use flagstate::core::{Guard, RawStates};
///
/// // Only masks with at most one bit set
/// let single = Guard::new(|s: &RawStates| s.bits().count_ones() <= 1);
///
/// assert!(single.check(&RawStates::from_bits_retain(0b0100)));
/// assert!(!single.check(&RawStates::from_bits_retain(0b0110)));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard admits this state.
    pub fn check(&self, state: &T) -> bool {
        (self.predicate)(state)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
