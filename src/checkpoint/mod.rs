//! Checkpoint and restore for state containers.
//!
//! A checkpoint captures a container together with its recorded history so
//! an owner can be persisted and later rebuilt. Restoring writes the
//! container back as-is: no transition runs and no callback fires.

use crate::core::{StateContainer, StateHistory};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Encoding used by [`Checkpoint::encode`] and [`Checkpoint::decode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointFormat {
    /// Human-readable JSON (`serde_json`)
    Json,
    /// Compact binary (`bincode`)
    Binary,
}

/// Serializable snapshot of a container and its history.
///
/// # Example
///
/// ```rust
/// use flagstate::checkpoint::{Checkpoint, CheckpointFormat};
/// use flagstate::core::{RawStates, StateContainer, StateHistory};
///
/// let container = StateContainer::from_flags(RawStates::from_bits_retain(0b0110));
/// let checkpoint = Checkpoint::capture(&container, &StateHistory::new());
///
/// let bytes = checkpoint.encode(CheckpointFormat::Binary).unwrap();
/// let (restored, _history) = Checkpoint::<RawStates>::decode(CheckpointFormat::Binary, &bytes)
///     .unwrap()
///     .restore()
///     .unwrap();
///
/// assert_eq!(restored, container);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<T> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current and previous state
    pub container: StateContainer<T>,

    /// Transitions recorded up to the capture
    pub history: StateHistory<T>,
}

/// Outcome of [`Checkpoint::validate`]: success, or every problem found.
pub type CheckResult = Validation<(), NonEmptyVec<CheckpointError>>;

impl<T> Checkpoint<T>
where
    T: Clone + PartialEq + Debug + Serialize + DeserializeOwned,
{
    /// Snapshot a container and its history.
    pub fn capture(container: &StateContainer<T>, history: &StateHistory<T>) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            container: container.clone(),
            history: history.clone(),
        };
        tracing::debug!(
            id = %checkpoint.id,
            state = ?checkpoint.container.state(),
            transitions = checkpoint.history.transitions().len(),
            "checkpoint captured"
        );
        checkpoint
    }

    /// Encode the checkpoint in the given format.
    pub fn encode(&self, format: CheckpointFormat) -> Result<Vec<u8>, CheckpointError> {
        match format {
            CheckpointFormat::Json => serde_json::to_vec(self).map_err(|e| e.to_string()),
            CheckpointFormat::Binary => bincode::serialize(self).map_err(|e| e.to_string()),
        }
        .map_err(|reason| CheckpointError::Encode { format, reason })
    }

    /// Decode a checkpoint. The result is not validated until [`Self::restore`].
    pub fn decode(format: CheckpointFormat, bytes: &[u8]) -> Result<Self, CheckpointError> {
        match format {
            CheckpointFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
            CheckpointFormat::Binary => bincode::deserialize(bytes).map_err(|e| e.to_string()),
        }
        .map_err(|reason| CheckpointError::Decode { format, reason })
    }

    /// Check the checkpoint, accumulating every problem found.
    ///
    /// - the version must be [`CHECKPOINT_VERSION`]
    /// - each transition must start where the previous one ended
    /// - the last transition must end in the container's current state
    pub fn validate(&self) -> CheckResult {
        let mut checks: Vec<CheckResult> = Vec::new();

        checks.push(if self.version == CHECKPOINT_VERSION {
            Validation::success(())
        } else {
            Validation::fail(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        });

        checks.push(if self.history.is_contiguous() {
            Validation::success(())
        } else {
            Validation::fail(CheckpointError::Inconsistent(
                "history has gaps between transitions".to_string(),
            ))
        });

        checks.push(match self.history.last() {
            Some(last) if last.to != *self.container.state() => {
                Validation::fail(CheckpointError::Inconsistent(format!(
                    "history ends in {:?} but container holds {:?}",
                    last.to,
                    self.container.state()
                )))
            }
            _ => Validation::success(()),
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and hand back the container and history.
    ///
    /// A version mismatch is reported as [`CheckpointError::UnsupportedVersion`]
    /// so callers can migrate; every other problem is folded into a single
    /// [`CheckpointError::Inconsistent`].
    pub fn restore(self) -> Result<(StateContainer<T>, StateHistory<T>), CheckpointError> {
        if let Validation::Failure(errors) = self.validate() {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(id = %self.id, %message, "checkpoint rejected");

            let unsupported = errors
                .iter()
                .find(|e| matches!(e, CheckpointError::UnsupportedVersion { .. }));
            if let Some(error) = unsupported {
                return Err(error.clone());
            }

            let reasons = errors
                .iter()
                .filter_map(|e| match e {
                    CheckpointError::Inconsistent(reason) => Some(reason.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CheckpointError::Inconsistent(reasons));
        }

        tracing::debug!(id = %self.id, state = ?self.container.state(), "checkpoint restored");
        Ok((self.container, self.history))
    }
}
