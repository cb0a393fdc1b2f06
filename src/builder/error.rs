//! Build errors for container builders.

use thiserror::Error;

/// Errors that can occur when building state containers.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Guard rejected {role} state {state}")]
    RejectedState { role: &'static str, state: String },
}
