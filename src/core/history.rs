//! State transition history tracking.
//!
//! Transition operations return a description of what they did; callers
//! that want an audit trail record those descriptions into an immutable
//! [`StateHistory`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which transition operation produced a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Full replacement of the state
    Change,
    /// Union with a mask
    Add,
    /// Subtraction of a mask
    Remove,
    /// Re-assertion of already-set bits
    Reset,
    /// Combined subtraction and union
    RemoveAndAdd,
    /// Swap of current and previous state
    ReturnToPrevious,
}

impl TransitionKind {
    /// True for operations that fire exit/enter notifications.
    pub fn replaces_state(self) -> bool {
        matches!(self, Self::Change | Self::ReturnToPrevious)
    }
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use flagstate::core::{StateTransition, TransitionKind};
///
/// let transition = StateTransition::now(TransitionKind::Change, 1u8, 2u8);
/// assert_eq!(transition.from, 1);
/// assert_eq!(transition.to, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<T> {
    /// The operation that produced this transition
    pub kind: TransitionKind,
    /// The state on entry to the operation
    pub from: T,
    /// The state on exit from the operation
    pub to: T,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<T> StateTransition<T> {
    /// Record a transition stamped with the current time.
    pub fn now(kind: TransitionKind, from: T, to: T) -> Self {
        Self {
            kind,
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition added.
///
/// # Example
///
/// ```rust
/// use flagstate::core::{StateHistory, StateTransition, TransitionKind};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(TransitionKind::Change, "idle", "alert"))
///     .record(StateTransition::now(TransitionKind::Change, "alert", "idle"));
///
/// assert_eq!(history.get_path(), vec![&"idle", &"alert", &"idle"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory<T> {
    transitions: Vec<StateTransition<T>>,
}

impl<T> Default for StateHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateHistory<T> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` of the first transition followed by the `to` of
    /// each transition.
    pub fn get_path(&self) -> Vec<&T> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in recording order.
    pub fn transitions(&self) -> &[StateTransition<T>] {
        &self.transitions
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<T>> {
        self.transitions.last()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<T: Clone> StateHistory<T> {
    /// Record a transition, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, transition: StateTransition<T>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }
}

impl<T: PartialEq> StateHistory<T> {
    /// True when every transition starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.transitions
            .windows(2)
            .all(|pair| pair[0].to == pair[1].from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Searching,
        Alert,
    }

    fn change(from: TestState, to: TestState) -> StateTransition<TestState> {
        StateTransition::now(TransitionKind::Change, from, to)
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(change(TestState::Idle, TestState::Searching));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(change(TestState::Idle, TestState::Searching))
            .record(change(TestState::Searching, TestState::Alert));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Idle);
        assert_eq!(path[1], &TestState::Searching);
        assert_eq!(path[2], &TestState::Alert);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let first = StateTransition {
            kind: TransitionKind::Change,
            from: TestState::Idle,
            to: TestState::Searching,
            timestamp: start,
        };
        let second = StateTransition {
            kind: TransitionKind::Change,
            from: TestState::Searching,
            to: TestState::Alert,
            timestamp: start + chrono::Duration::milliseconds(25),
        };

        let history = StateHistory::new().record(first).record(second);

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(change(TestState::Idle, TestState::Alert));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn contiguity_detects_gaps() {
        let contiguous = StateHistory::new()
            .record(change(TestState::Idle, TestState::Searching))
            .record(change(TestState::Searching, TestState::Alert));
        assert!(contiguous.is_contiguous());

        let gapped = StateHistory::new()
            .record(change(TestState::Idle, TestState::Searching))
            .record(change(TestState::Alert, TestState::Idle));
        assert!(!gapped.is_contiguous());
    }

    #[test]
    fn replaces_state_only_for_full_replacements() {
        assert!(TransitionKind::Change.replaces_state());
        assert!(TransitionKind::ReturnToPrevious.replaces_state());
        assert!(!TransitionKind::Add.replaces_state());
        assert!(!TransitionKind::Reset.replaces_state());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(change(TestState::Idle, TestState::Searching));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
