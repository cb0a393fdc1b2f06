//! Checkpoint error types.

use super::CheckpointFormat;
use thiserror::Error;

/// Errors raised while encoding, decoding or restoring a checkpoint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckpointError {
    #[error("Could not encode checkpoint as {format:?}: {reason}")]
    Encode {
        format: CheckpointFormat,
        reason: String,
    },

    #[error("Could not decode {format:?} checkpoint: {reason}")]
    Decode {
        format: CheckpointFormat,
        reason: String,
    },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// History and container disagree with each other
    #[error("Inconsistent checkpoint: {0}")]
    Inconsistent(String),
}
